use thiserror::Error;

use crate::reference::ReferenceKey;

/// Broad classification of a [`ZScoreError`] for callers that map errors
/// onto their own taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong arity or an unparseable argument.
    InvalidArgument,
    /// The reference data does not cover the request.
    Lookup,
}

/// Errors raised while evaluating a Z-score.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ZScoreError {
    #[error("At least three arguments required but found: {found}")]
    TooFewArguments { found: usize },

    #[error("missing sex code argument at position {index}")]
    MissingSexCode { index: usize },

    #[error("invalid {name} '{value}': expected an integer between 0 and 127")]
    InvalidNumber { name: &'static str, value: String },

    #[error("no reference row for {key}")]
    MissingRow { key: ReferenceKey },

    #[error("weight {weight} is below the lowest tabulated weight {lowest} for {key}")]
    BelowReferenceRange {
        key: ReferenceKey,
        weight: f32,
        lowest: f32,
    },

    #[error("weight {weight} is above the highest tabulated weight {highest} for {key}")]
    AboveReferenceRange {
        key: ReferenceKey,
        weight: f32,
        highest: f32,
    },
}

impl ZScoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZScoreError::TooFewArguments { .. }
            | ZScoreError::MissingSexCode { .. }
            | ZScoreError::InvalidNumber { .. } => ErrorKind::InvalidArgument,
            ZScoreError::MissingRow { .. }
            | ZScoreError::BelowReferenceRange { .. }
            | ZScoreError::AboveReferenceRange { .. } => ErrorKind::Lookup,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_lookup(&self) -> bool {
        self.kind() == ErrorKind::Lookup
    }
}

/// Reasons a set of tabulated weights cannot form an [`SdRow`](crate::SdRow).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdRowError {
    #[error("expected 7 SD weights but found {found}")]
    WrongLength { found: usize },

    #[error("weight at position {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("weight at position {index} must be positive but is {weight}")]
    NotPositive { index: usize, weight: f32 },

    #[error("weights must increase strictly: position {index} has {current} after {previous}")]
    NotIncreasing {
        index: usize,
        previous: f32,
        current: f32,
    },
}

pub type Result<T> = std::result::Result<T, ZScoreError>;
