use std::fs;
use std::path::Path;
use std::slice;
use std::str::FromStr;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::error::ConvError;

/// Any line containing this character is a comment, wherever it appears.
const DELIMITER_COMMENT: char = '#';

/// The character separating the fields of a data line.
const DELIMITER_FIELD: char = ' ';

/// Lines not longer than this (in bytes, without the newline) are skipped.
const LENGTH_MIN_EXCLUSIVE: usize = 7;

/// The number of fields a data line must provide.
const COUNT_FIELDS: usize = 5;

/// A conversion rule.
///
/// This structure represents one entry of the database: converting from
/// `from_unit` to `to_unit` maps a quantity `q` to
/// `q^exponent * factor + constant`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRule {
    pub from_unit: String,
    pub to_unit: String,
    pub factor: f64,
    pub constant: f64,
    pub exponent: f64,
}

/// An ordered set of conversion rules.
///
/// Rules are kept in file order. Lookups are first-match-wins, so an earlier
/// rule shadows any later rule for the same pair of units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<ConversionRule>,
}

impl RuleSet {
    /// Reads the database file at the given path and builds a rule set.
    ///
    /// The file is read in full and closed before any line is parsed. A
    /// missing or unreadable file (including one that is not UTF-8) yields
    /// `DatabaseNotFound`; any bad data line aborts the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<RuleSet, ConvError> {
        let path = path.as_ref();

        let input = fs::read_to_string(path).map_err(|source| {
            ConvError::DatabaseNotFound {path: path.to_path_buf(), source}
        })?;

        let rules = input.parse::<RuleSet>()?;

        debug!("Loaded {} rules from {}", rules.len(), path.display());

        Ok(rules)
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns an iterator over the rules in file order.
    pub fn iter(&self) -> slice::Iter<'_, ConversionRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ConversionRule;
    type IntoIter = slice::Iter<'a, ConversionRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Implements parsing of database text into rule sets.
impl FromStr for RuleSet {
    type Err = ConvError;

    fn from_str(input: &str) -> Result<RuleSet, ConvError> {
        let mut rules = vec![];

        // Only '\n' ends a line; a '\r' before it stays part of the line.
        for (line, number) in input.split('\n').zip(1..) {
            if line.contains(DELIMITER_COMMENT) {
                trace!("Skipping comment on line {}", number);
                continue;
            }

            if line.len() <= LENGTH_MIN_EXCLUSIVE {
                trace!("Skipping short line {}", number);
                continue;
            }

            rules.push(ConversionRule::parse(line, number)?);
        }

        Ok(RuleSet {rules})
    }
}

impl ConversionRule {
    /// Parses a data line (without its newline) into a rule.
    fn parse(line: &str, number: usize) -> Result<ConversionRule, ConvError> {
        let fields = split_fields(line, DELIMITER_FIELD);

        if fields.len() < COUNT_FIELDS {
            return Err(ConvError::MalformedEntry {number, line: line.to_string()});
        }

        if fields.len() > COUNT_FIELDS {
            warn!("Ignoring {} extra fields on line {}", fields.len() - COUNT_FIELDS, number);
        }

        let parse_field = |column: &'static str, text: &str| {
            text.parse::<f64>().map_err(|_| ConvError::InvalidField {
                number,
                column,
                text: text.to_string(),
            })
        };

        Ok(ConversionRule {
            from_unit: fields[0].to_string(),
            to_unit: fields[1].to_string(),
            factor: parse_field("factor", fields[2])?,
            constant: parse_field("constant", fields[3])?,
            exponent: parse_field("exponent", fields[4])?,
        })
    }
}

/// Splits a line into fields at a delimiter.
///
/// A run of consecutive delimiters counts as a single separator, and leading
/// or trailing delimiters produce no fields; no field returned is ever empty.
/// Only the given character separates fields (a space delimiter does not
/// split at tabs).
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).filter(|field| !field.is_empty()).collect()
}
