use tracing::debug;

use crate::database::ConversionRule;
use crate::database::RuleSet;

/// A request to convert a quantity between two units.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRequest {
    pub quantity: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// The outcome of a conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConversionOutcome {
    /// A rule matched, producing this value.
    Converted(f64),

    /// No rule converts between the requested units.
    NoMatch,
}

impl ConversionRule {
    /// Returns whether this rule converts between the given units.
    ///
    /// Units are compared exactly (and case-sensitively). A rule only works
    /// in its own direction.
    pub fn matches(&self, from_unit: &str, to_unit: &str) -> bool {
        self.from_unit == from_unit && self.to_unit == to_unit
    }

    /// Applies this rule to a quantity.
    pub fn transform(&self, quantity: f64) -> f64 {
        // NaN (e.g. a negative quantity to a fractional power) propagates.
        quantity.powf(self.exponent) * self.factor + self.constant
    }
}

/// Performs a unit conversion.
///
/// The first rule in the set that matches the requested units is applied;
/// later rules for the same units are never consulted.
pub fn convert(rules: &RuleSet, request: &ConversionRequest) -> ConversionOutcome {
    match rules.iter().find(|rule| rule.matches(&request.from_unit, &request.to_unit)) {
        Some(rule) => {
            debug!("Matched rule {:?}", rule);

            ConversionOutcome::Converted(rule.transform(request.quantity))
        }
        None => {
            debug!("No rule converts {} to {}", request.from_unit, request.to_unit);

            ConversionOutcome::NoMatch
        }
    }
}
