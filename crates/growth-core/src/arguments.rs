//! Parsing of the raw `d2:zScore` argument list.

use growth_model::{Result, Sex, ZScoreError};

/// Minimum number of arguments accepted by the arity check.
pub const MIN_ARGUMENTS: usize = 3;

pub const AGE_INDEX: usize = 0;
pub const WEIGHT_INDEX: usize = 1;

/// Position of the sex code.
///
/// This is the fourth slot although only three arguments are required, so
/// a three-argument call passes the arity check and then fails with
/// [`ZScoreError::MissingSexCode`].
pub const SEX_INDEX: usize = 3;

/// Typed `d2:zScore` arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreArguments {
    /// Age in months.
    pub age: u8,
    /// Weight in kg, parsed from an integer.
    pub weight: f32,
    pub sex: Sex,
}

impl ZScoreArguments {
    /// Validates arity, classifies the sex code and parses age and weight.
    pub fn parse<S: AsRef<str>>(arguments: &[S]) -> Result<Self> {
        if arguments.len() < MIN_ARGUMENTS {
            return Err(ZScoreError::TooFewArguments {
                found: arguments.len(),
            });
        }
        let sex_code = arguments
            .get(SEX_INDEX)
            .ok_or(ZScoreError::MissingSexCode { index: SEX_INDEX })?;
        let sex = Sex::from_code(sex_code.as_ref());

        let age = parse_small_int("age", arguments[AGE_INDEX].as_ref())?;
        let weight = parse_small_int("weight", arguments[WEIGHT_INDEX].as_ref())?;

        Ok(Self {
            age,
            weight: f32::from(weight),
            sex,
        })
    }
}

/// Parses a signed byte and requires it to be non-negative (0..=127).
fn parse_small_int(name: &'static str, value: &str) -> Result<u8> {
    value
        .parse::<i8>()
        .ok()
        .and_then(|parsed| u8::try_from(parsed).ok())
        .ok_or_else(|| ZScoreError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}
