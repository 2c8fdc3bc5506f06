//! Sex classification for growth reference lookups.
//!
//! Rule engines pass the child's sex as a free-form code. Classification
//! is an allow-list: a fixed set of tokens means male and every other
//! value, including the empty string, means female.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tokens classified as male. Matching is exact and case-sensitive.
pub const MALE_CODES: &[&str] = &["male", "MALE", "Male", "ma", "m", "M", "0", "false"];

/// Sex used to select a growth reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Classifies a raw sex code.
    ///
    /// Unrecognized codes default to [`Sex::Female`] rather than being
    /// rejected. Codes such as `"MA"`, `"mAle"` or `"1"` are therefore
    /// female; callers wanting strict validation must check the code
    /// against [`MALE_CODES`] and their own female vocabulary first.
    pub fn from_code(code: &str) -> Self {
        if MALE_CODES.contains(&code) {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn all() -> [Sex; 2] {
        [Sex::Male, Sex::Female]
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
