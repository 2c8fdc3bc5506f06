//! Rule functions callable from a rule-evaluation engine.
//!
//! The engine resolves an expression such as `d2:zScore(#{age}, #{weight},
//! #{flag}, #{sex})` to a function name and a list of string arguments and
//! hands both context maps along. Functions return a string result.

use std::collections::HashMap;

use growth_model::Result;
use growth_standards::ReferenceTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::arguments::ZScoreArguments;
use crate::logging::redact;
use crate::resolver::{BracketStrategy, ZScoreResolver};

/// Name under which [`ZScoreFunction`] is registered.
pub const D2_ZSCORE: &str = "d2:zScore";

/// Current value of a program variable as seen by the rule engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleVariableValue {
    pub value: Option<String>,
    #[serde(default)]
    pub candidates: Vec<String>,
    #[serde(default)]
    pub event_date: Option<String>,
}

/// Variable bindings keyed by variable name.
pub type ValueMap = HashMap<String, RuleVariableValue>;

/// Supplementary data keyed by name (for example user groups).
pub type SupplementaryData = HashMap<String, Vec<String>>;

/// A function the rule engine can call by name.
pub trait RuleFunction: Send + Sync {
    /// Name used in rule expressions.
    fn name(&self) -> &'static str;

    /// Evaluates the function.
    ///
    /// # Errors
    ///
    /// Returns an error when the arguments are invalid or the function
    /// cannot produce a result for them. Evaluation is deterministic, so
    /// retrying with the same arguments fails the same way.
    fn evaluate(
        &self,
        arguments: &[String],
        values: &ValueMap,
        supplementary_data: &SupplementaryData,
    ) -> Result<String>;
}

/// `d2:zScore(age, weight, flag, sex)`: weight-for-age SD band.
///
/// Age is in months and weight in whole kilograms, both within 0..=127.
/// The sex code is classified with [`growth_model::Sex::from_code`]. The
/// value and supplementary maps are not read. The default instance uses
/// [`growth_standards::default_table`].
#[derive(Debug, Clone, Copy)]
pub struct ZScoreFunction<'t> {
    resolver: ZScoreResolver<'t>,
}

impl Default for ZScoreFunction<'static> {
    fn default() -> Self {
        Self::from_resolver(ZScoreResolver::default())
    }
}

impl<'t> ZScoreFunction<'t> {
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self::from_resolver(ZScoreResolver::new(table))
    }

    pub fn from_resolver(resolver: ZScoreResolver<'t>) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn with_strategy(self, strategy: BracketStrategy) -> Self {
        Self::from_resolver(self.resolver.with_strategy(strategy))
    }

    pub fn resolver(&self) -> &ZScoreResolver<'t> {
        &self.resolver
    }

    /// Parses and resolves without the engine context maps.
    pub fn evaluate_arguments<S: AsRef<str>>(&self, arguments: &[S]) -> Result<String> {
        let span = debug_span!("zscore", strategy = %self.resolver.strategy());
        let _guard = span.enter();

        let parsed = ZScoreArguments::parse(arguments)?;
        debug!(
            age = %redact(parsed.age),
            weight = %redact(parsed.weight),
            sex = %redact(parsed.sex),
            "parsed arguments"
        );
        let score = self.resolver.resolve(parsed.age, parsed.weight, parsed.sex)?;
        Ok(score.to_string())
    }
}

impl RuleFunction for ZScoreFunction<'_> {
    fn name(&self) -> &'static str {
        D2_ZSCORE
    }

    fn evaluate(
        &self,
        arguments: &[String],
        _values: &ValueMap,
        _supplementary_data: &SupplementaryData,
    ) -> Result<String> {
        self.evaluate_arguments(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn evaluates_through_the_trait() {
        let function = ZScoreFunction::default();
        let result = function
            .evaluate(&args(&["0", "5", "", "M"]), &ValueMap::new(), &SupplementaryData::new())
            .expect("evaluate");
        // boys at birth: 5.0 kg is the +3 SD weight
        assert_eq!(result, "3");
        assert_eq!(function.name(), D2_ZSCORE);
    }

    #[test]
    fn context_maps_are_ignored() {
        let function = ZScoreFunction::default();
        let mut values = ValueMap::new();
        values.insert(
            "sex".to_string(),
            RuleVariableValue {
                value: Some("M".to_string()),
                ..Default::default()
            },
        );
        let mut supplementary = SupplementaryData::new();
        supplementary.insert("USER_GROUPS".to_string(), vec!["nurses".to_string()]);

        let arguments = args(&["24", "12", "", "F"]);
        let with_context = function
            .evaluate(&arguments, &values, &supplementary)
            .expect("evaluate");
        let without = function
            .evaluate(&arguments, &ValueMap::new(), &SupplementaryData::new())
            .expect("evaluate");
        assert_eq!(with_context, without);
    }
}
