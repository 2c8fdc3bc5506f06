//! Reference table keys and standard-deviation rows.
//!
//! A weight-for-age reference row tabulates the weight at each of the
//! seven SD curves (-3 through +3) for one sex and one age in months.

use serde::Serialize;
use std::fmt;

use crate::error::SdRowError;
use crate::sex::Sex;

/// Table version component of every key in the shipped reference data.
pub const TABLE_VERSION: u8 = 1;

/// Number of SD curves in a row.
pub const BAND_COUNT: usize = 7;

/// Position of the median (SD 0) in an ascending row.
pub const MEDIAN_INDEX: usize = 3;

/// Composite lookup key into a growth reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReferenceKey {
    pub sex: Sex,
    pub version: u8,
    /// Age in completed months.
    pub age: u8,
}

impl ReferenceKey {
    /// Key for the current table version.
    pub fn new(sex: Sex, age: u8) -> Self {
        Self {
            sex,
            version: TABLE_VERSION,
            age,
        }
    }
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, table version {}, age {} months",
            self.sex, self.version, self.age
        )
    }
}

/// One tabulated point on a reference row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SdPoint {
    pub weight: f32,
    /// Signed SD curve, -3 through +3.
    pub band: i8,
}

impl SdPoint {
    /// Tabulated SD value: the distance of this curve from the median.
    ///
    /// The sign is not part of the tabulated value; it is derived from
    /// the query weight's position relative to the median.
    pub fn sd(&self) -> u8 {
        self.band.unsigned_abs()
    }
}

/// Seven weights sorted ascending, one per SD curve.
///
/// The fixed-size array keeps the median at [`MEDIAN_INDEX`] by
/// construction; rows can only be built from strictly increasing
/// weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SdRow {
    points: [SdPoint; BAND_COUNT],
}

impl SdRow {
    /// Builds a row from the weights at SD -3, -2, -1, 0, +1, +2, +3.
    ///
    /// Weights are kilograms and must be finite, positive and strictly
    /// increasing.
    pub fn from_weights(weights: [f32; BAND_COUNT]) -> Result<Self, SdRowError> {
        for (index, weight) in weights.iter().enumerate() {
            if !weight.is_finite() {
                return Err(SdRowError::NonFinite { index });
            }
            if *weight <= 0.0 {
                return Err(SdRowError::NotPositive {
                    index,
                    weight: *weight,
                });
            }
        }
        for index in 1..BAND_COUNT {
            let previous = weights[index - 1];
            let current = weights[index];
            if current <= previous {
                return Err(SdRowError::NotIncreasing {
                    index,
                    previous,
                    current,
                });
            }
        }

        let points = std::array::from_fn(|index| SdPoint {
            weight: weights[index],
            band: index as i8 - MEDIAN_INDEX as i8,
        });
        Ok(Self { points })
    }

    /// Same as [`SdRow::from_weights`] for a slice of unknown length.
    pub fn from_slice(weights: &[f32]) -> Result<Self, SdRowError> {
        let weights: [f32; BAND_COUNT] = weights
            .try_into()
            .map_err(|_| SdRowError::WrongLength {
                found: weights.len(),
            })?;
        Self::from_weights(weights)
    }

    pub fn points(&self) -> &[SdPoint; BAND_COUNT] {
        &self.points
    }

    /// Points in ascending weight order. Each call starts a fresh pass.
    pub fn ascending(&self) -> impl DoubleEndedIterator<Item = SdPoint> + ExactSizeIterator + '_ {
        self.points.iter().copied()
    }

    pub fn weights(&self) -> [f32; BAND_COUNT] {
        self.points.map(|point| point.weight)
    }

    /// Weight on the SD 0 curve.
    pub fn median(&self) -> f32 {
        self.points[MEDIAN_INDEX].weight
    }

    pub fn lowest(&self) -> f32 {
        self.points[0].weight
    }

    pub fn highest(&self) -> f32 {
        self.points[BAND_COUNT - 1].weight
    }

    /// The tabulated point whose weight equals `weight` exactly.
    pub fn exact(&self, weight: f32) -> Option<SdPoint> {
        self.points.iter().copied().find(|point| point.weight == weight)
    }
}
