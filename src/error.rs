use std::io;
use std::path::PathBuf;

/// The column layout every data line of a database must follow.
pub const HEADER_COLUMNS: &str
= "Original Units | Target Units | Factor | Constant | Exponent";

/// Represents a failure of the unit converter.
///
/// Each of these aborts the program before (or instead of) a conversion. Not
/// finding a matching rule is not an error; see `ConversionOutcome`.
#[derive(Debug, thiserror::Error)]
pub enum ConvError {
    /// The database file could not be opened or read.
    #[error("Cannot read database file {}", .path.display())]
    DatabaseNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data line has fewer than five fields.
    #[error("Malformed database entry on line {}:\n{}\nFive (5) columns are needed:\n{}", .number, .line, HEADER_COLUMNS)]
    MalformedEntry {
        number: usize,
        line: String,
    },

    /// A numeric field of a data line is not a real number.
    #[error("Invalid {column} on line {number}: {text:?}")]
    InvalidField {
        number: usize,
        column: &'static str,
        text: String,
    },

    /// The quantity given on the command line is not a valid number.
    #[error("The quantity provided is not valid\n you gave: {text}")]
    InvalidQuantity {
        text: String,
    },
}

impl ConvError {
    /// Returns the process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvError::InvalidQuantity {..} => 1,
            ConvError::DatabaseNotFound {..} => 3,
            ConvError::MalformedEntry {..} | ConvError::InvalidField {..} => 4,
        }
    }

    /// Returns the database line this error refers to, if any.
    ///
    /// Only the build script reports errors by line, so this is not compiled
    /// into the main binary.
    #[cfg(any(test, not(mainbuild)))]
    pub fn number_line(&self) -> Option<usize> {
        match self {
            ConvError::MalformedEntry {number, ..}
            | ConvError::InvalidField {number, ..} => Some(*number),
            _ => None,
        }
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(ConvError::InvalidQuantity {text: "abc".to_string()}, 1)]
    #[case(ConvError::DatabaseNotFound {
        path: PathBuf::from("convdb.dat"),
        source: io::Error::from(io::ErrorKind::NotFound),
    }, 3)]
    #[case(ConvError::MalformedEntry {number: 1, line: "m km 1 0".to_string()}, 4)]
    #[case(ConvError::InvalidField {number: 1, column: "factor", text: "x".to_string()}, 4)]
    fn test_exit_code(#[case] error: ConvError, #[case] expected: u8) {
        assert_eq!(error.exit_code(), expected);
    }

    #[rstest]
    #[case(ConvError::MalformedEntry {number: 7, line: "m km 1 0".to_string()}, Some(7))]
    #[case(ConvError::InvalidField {number: 2, column: "constant", text: "x".to_string()}, Some(2))]
    #[case(ConvError::InvalidQuantity {text: "abc".to_string()}, None)]
    fn test_number_line(#[case] error: ConvError, #[case] expected: Option<usize>) {
        assert_eq!(error.number_line(), expected);
    }

    #[test]
    fn test_malformed_message() {
        let error = ConvError::MalformedEntry {number: 3, line: "m km 0.001 0".to_string()};
        let message = error.to_string();

        assert!(message.contains("line 3"));
        assert!(message.contains("m km 0.001 0"));
        assert!(message.ends_with(HEADER_COLUMNS));
    }

    #[test]
    fn test_invalid_field_message() {
        let error = ConvError::InvalidField {number: 1, column: "exponent", text: "1\r".to_string()};

        assert_eq!(error.to_string(), "Invalid exponent on line 1: \"1\\r\"");
    }
}
