//! Weight-for-age band resolution.
//!
//! A query weight is resolved against one [`SdRow`]:
//!
//! 1. A weight equal to a tabulated weight yields that point's SD value.
//! 2. Otherwise the row is traversed in ascending order to find a bracket
//!    and the SD value is interpolated from it.
//! 3. The value is signed by comparing the weight with the median: positive
//!    above, negative below, zero on the median.
//!
//! The traversal is selected with [`BracketStrategy`]. The default,
//! [`BracketStrategy::Legacy`], keeps the established `d2:zScore` results:
//! its upper anchor is the last tabulated weight not below the query
//! (the row maximum), not the nearest one.

use std::cmp::Ordering;
use std::fmt;

use growth_model::{ReferenceKey, Result, SdPoint, SdRow, Sex, ZScoreError};
use growth_standards::{ReferenceTable, default_table};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::logging::redact;

/// How the bracketing points around a query weight are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketStrategy {
    /// Overwriting scan: every point below the weight replaces the lower
    /// anchor, every other point replaces the upper anchor. The upper
    /// anchor ends as the row maximum, or stays `0.0` when the weight is
    /// above the whole row.
    #[default]
    Legacy,
    /// Tight bracket with linear interpolation between signed SD curves.
    /// Weights outside the row are rejected.
    Nearest,
}

impl BracketStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BracketStrategy::Legacy => "legacy",
            BracketStrategy::Nearest => "nearest",
        }
    }

    /// Walks `row` in ascending order and returns the anchors around
    /// `weight`.
    pub fn bracket(self, row: &SdRow, weight: f32) -> Bracket {
        let mut bracket = Bracket::default();
        for point in row.ascending() {
            trace!(point = point.weight, band = point.band, "bracket scan");
            if weight > point.weight {
                bracket.lower = Some(point);
                continue;
            }
            match self {
                BracketStrategy::Legacy => bracket.upper = Some(point),
                BracketStrategy::Nearest => {
                    bracket.upper = Some(point);
                    break;
                }
            }
        }
        bracket
    }
}

impl fmt::Display for BracketStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anchors found by a [`BracketStrategy`] traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bracket {
    /// Greatest tabulated point strictly below the weight.
    pub lower: Option<SdPoint>,
    /// Upper anchor; which point this is depends on the strategy.
    pub upper: Option<SdPoint>,
}

/// A resolved Z-score band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ZScore {
    /// The weight matched a tabulated weight.
    Exact(i32),
    /// The weight fell between tabulated weights.
    Interpolated(f32),
}

impl ZScore {
    pub fn value(&self) -> f64 {
        match self {
            ZScore::Exact(value) => f64::from(*value),
            ZScore::Interpolated(value) => f64::from(*value),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, ZScore::Exact(_))
    }
}

impl fmt::Display for ZScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZScore::Exact(value) => write!(f, "{value}"),
            // A zero sign must not print as "-0".
            ZScore::Interpolated(value) if *value == 0.0 => write!(f, "0"),
            ZScore::Interpolated(value) => write!(f, "{value}"),
        }
    }
}

/// Resolves Z-score bands against a shared [`ReferenceTable`].
#[derive(Debug, Clone, Copy)]
pub struct ZScoreResolver<'t> {
    table: &'t ReferenceTable,
    strategy: BracketStrategy,
}

impl Default for ZScoreResolver<'static> {
    fn default() -> Self {
        Self::new(default_table())
    }
}

impl<'t> ZScoreResolver<'t> {
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self {
            table,
            strategy: BracketStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: BracketStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> BracketStrategy {
        self.strategy
    }

    pub fn table(&self) -> &'t ReferenceTable {
        self.table
    }

    /// Looks up the row for `(sex, age)` and resolves `weight` against it.
    pub fn resolve(&self, age: u8, weight: f32, sex: Sex) -> Result<ZScore> {
        let key = ReferenceKey::new(sex, age);
        let row = self.table.row(&key)?;
        debug!(key = %redact(key), "reference row found");
        resolve_row(row, weight, self.strategy, &key)
    }
}

/// Resolves `weight` against a single row. `key` is only used in errors.
pub fn resolve_row(
    row: &SdRow,
    weight: f32,
    strategy: BracketStrategy,
    key: &ReferenceKey,
) -> Result<ZScore> {
    if !weight.is_finite() {
        return Err(ZScoreError::InvalidNumber {
            name: "weight",
            value: weight.to_string(),
        });
    }
    let sign = sign(row, weight);

    if let Some(point) = row.exact(weight) {
        return Ok(ZScore::Exact(i32::from(point.sd()) * sign));
    }

    let bracket = strategy.bracket(row, weight);
    let Some(lower) = bracket.lower else {
        warn!(
            weight = %redact(weight),
            lowest = row.lowest(),
            "weight below reference row"
        );
        return Err(ZScoreError::BelowReferenceRange {
            key: *key,
            weight,
            lowest: row.lowest(),
        });
    };

    let magnitude = match strategy {
        BracketStrategy::Legacy => {
            if bracket.upper.is_none() {
                warn!(
                    weight = %redact(weight),
                    highest = row.highest(),
                    "weight above reference row, upper anchor stays at zero"
                );
            }
            let higher = bracket.upper.map_or(0.0, |point| point.weight);
            let gap = lower.weight - weight;
            let span = lower.weight - higher;
            f32::from(lower.sd()) + gap / span
        }
        BracketStrategy::Nearest => {
            let Some(upper) = bracket.upper else {
                return Err(ZScoreError::AboveReferenceRange {
                    key: *key,
                    weight,
                    highest: row.highest(),
                });
            };
            let fraction = (weight - lower.weight) / (upper.weight - lower.weight);
            let band = f32::from(lower.band) + fraction * f32::from(upper.band - lower.band);
            band.abs()
        }
    };
    debug!(
        strategy = %strategy,
        lower = lower.weight,
        upper = bracket.upper.map(|point| point.weight),
        magnitude,
        "interpolated band"
    );

    Ok(ZScore::Interpolated(magnitude * sign as f32))
}

/// +1 above the median, -1 below it, 0 on it.
fn sign(row: &SdRow, weight: f32) -> i32 {
    match weight.total_cmp(&row.median()) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}
