mod config;
mod converter;
mod database;
mod error;
mod quantity;

use anyhow::Error;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use converter::ConversionOutcome;
use converter::ConversionRequest;
use database::RuleSet;
use error::ConvError;

/// The word that must separate the source and destination units.
const CONNECTIVE: &str = "to";

/// Command line unit conversion.
#[derive(Debug, Parser)]
#[command(name = "conv", version)]
#[command(after_help = "Example:\n  $ conv 2 m to km\n  2.0000 m = 0.002000 km")]
struct Cli {
    /// Quantity to convert, integer or decimal
    #[arg(allow_hyphen_values = true)]
    quantity: String,

    /// Source units, e.g. kg, m, km, m/s
    from_unit: String,

    /// The word "to"
    #[arg(value_parser = parse_connective)]
    connective: String,

    /// Target units, e.g. kg, m, km, m/s
    to_unit: String,

    /// Database file to read instead of the one next to the executable
    #[arg(long, value_name = "PATH", env = config::ENV_DATABASE)]
    database: Option<PathBuf>,
}

/// Accepts the connective in any letter case.
fn parse_connective(string: &str) -> Result<String, String> {
    if string.eq_ignore_ascii_case(CONNECTIVE) {
        Ok(string.to_string())
    }
    else {
        Err(format!("expected \"{}\"", CONNECTIVE))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
    .with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conv=warn"))
    )
    .with_writer(std::io::stderr)
    .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);

            let code = error.downcast_ref::<ConvError>().map_or(1, ConvError::exit_code);

            ExitCode::from(code)
        }
    }
}

/// Validates the request, loads the database and prints the conversion.
fn run(cli: Cli) -> Result<(), Error> {
    debug!("Converting {} {} {} {}", cli.quantity, cli.from_unit, cli.connective, cli.to_unit);

    // The quantity is checked before the database is touched.
    let quantity = quantity::parse_quantity(&cli.quantity)?;

    let path = config::database_path(cli.database)?;
    let rules = RuleSet::load(&path)?;

    let request = ConversionRequest {
        quantity,
        from_unit: cli.from_unit,
        to_unit: cli.to_unit,
    };

    match converter::convert(&rules, &request) {
        ConversionOutcome::Converted(result) => {
            println!(
                "{:.4} {} = {} {}",
                request.quantity,
                request.from_unit,
                quantity::format_fixed(result),
                request.to_unit
            );
        }
        ConversionOutcome::NoMatch => {
            println!("Cannot convert from {} to {}.", request.from_unit, request.to_unit);
            println!("The units are not in the database.");
        }
    }

    Ok(())
}



#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(true  , "to")]
    #[case(true  , "TO")]
    #[case(true  , "To")]
    #[case(true  , "tO")]
    #[case(false , "into")]
    #[case(false , "->")]
    #[case(false , "")]
    fn test_parse_connective(#[case] expected: bool, #[case] string: &str) {
        assert_eq!(parse_connective(string).is_ok(), expected);
    }

    #[test]
    fn test_cli_negative_quantity() {
        let cli = Cli::try_parse_from(["conv", "-40", "C", "to", "F"]).unwrap();

        assert_eq!(cli.quantity, "-40");
        assert_eq!(cli.connective, "to");
    }

    #[test]
    fn test_cli_connective_rejected() {
        assert!(Cli::try_parse_from(["conv", "1", "m", "in", "km"]).is_err());
    }
}
