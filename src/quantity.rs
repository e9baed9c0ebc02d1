use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ConvError;

/// Renders a quantity in fixed-point notation with six decimals.
pub fn format_fixed(value: f64) -> String {
    format!("{:.6}", value)
}

/// Parses the quantity given on the command line.
///
/// Text containing an ASCII letter is accepted only if rendering its value
/// with `format_fixed` reproduces the text exactly, so "1e3" and "0x10" are
/// rejected while "inf" is not. Text without letters is not held to the round
/// trip ("+2" and "2.50" pass) but must still parse as a real number.
pub fn parse_quantity(text: &str) -> Result<f64, ConvError> {
    lazy_static! {
        static ref REGEX_ALPHABETIC: Regex = Regex::new(r"[A-Za-z]").unwrap();
    }

    let invalid = || ConvError::InvalidQuantity {text: text.to_string()};

    let value = text.parse::<f64>();

    let round_trips = matches!(&value, Ok(value) if format_fixed(*value) == text);

    if REGEX_ALPHABETIC.is_match(text) && !round_trips {
        return Err(invalid());
    }

    value.map_err(|_| invalid())
}



#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Some(2.0)           , "2")]
    #[case(Some(-3.5)          , "-3.5")]
    #[case(Some(2.5)           , "2.50")]
    #[case(Some(2.0)           , "+2")]
    #[case(Some(0.0)           , "0")]
    #[case(Some(0.5)           , ".5")]
    #[case(Some(f64::INFINITY) , "inf")]
    #[case(None                , "abc")]
    #[case(None                , "1e3")]
    #[case(None                , "1E3")]
    #[case(None                , "0x10")]
    #[case(None                , "12abc")]
    #[case(None                , "Infinity")]
    #[case(None                , "--3")]
    #[case(None                , "1,5")]
    #[case(None                , "")]
    #[trace]
    fn test_parse_quantity(#[case] expected: Option<f64>, #[case] text: &str) {
        match (expected, parse_quantity(text)) {
            (Some(expected), Ok(value)) => assert_eq!(value, expected),
            (None, Err(ConvError::InvalidQuantity {text: text_error})) => {
                assert_eq!(text_error, text);
            }
            (expected, result) => panic!("Expected {:?}: {:?}", expected, result),
        }
    }

    #[test]
    fn test_parse_quantity_nan() {
        // "NaN" renders as itself, so the letters are tolerated.
        assert!(parse_quantity("NaN").unwrap().is_nan());
        assert!(parse_quantity("nan").is_err());
    }

    #[rstest]
    #[case("2.000000"   , 2.0)]
    #[case("0.002000"   , 0.002)]
    #[case("-40.000000" , -40.0)]
    #[case("NaN"        , f64::NAN)]
    fn test_format_fixed(#[case] expected: &str, #[case] value: f64) {
        assert_eq!(format_fixed(value), expected);
    }
}
