//! Serializable command results.

use growth_core::{BracketStrategy, D2_ZSCORE};
use growth_model::Sex;
use growth_standards::ReferenceTable;
use serde::Serialize;

/// Outcome of `growth-zscore eval`.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub function: &'static str,
    pub arguments: Vec<String>,
    pub strategy: BracketStrategy,
    pub result: String,
}

impl EvalReport {
    pub fn new(arguments: Vec<String>, strategy: BracketStrategy, result: String) -> Self {
        Self {
            function: D2_ZSCORE,
            arguments,
            strategy,
            result,
        }
    }
}

/// Ages covered for one sex.
#[derive(Debug, Clone, Serialize)]
pub struct Coverage {
    pub sex: Sex,
    pub rows: usize,
    pub min_age: Option<u8>,
    pub max_age: Option<u8>,
}

/// Outcome of `growth-zscore info`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub source: String,
    pub fingerprint: String,
    pub coverage: Vec<Coverage>,
}

impl InfoReport {
    pub fn from_table(table: &ReferenceTable) -> Self {
        let coverage = Sex::all()
            .into_iter()
            .map(|sex| {
                let ages: Vec<u8> = table.ages(sex).collect();
                Coverage {
                    sex,
                    rows: ages.len(),
                    min_age: ages.first().copied(),
                    max_age: ages.last().copied(),
                }
            })
            .collect();
        Self {
            source: table.source().to_string(),
            fingerprint: table.fingerprint().to_string(),
            coverage,
        }
    }
}
