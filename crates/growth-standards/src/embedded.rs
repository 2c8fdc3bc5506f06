//! Embedded reference data.
//!
//! The WHO Child Growth Standards weight-for-age tables are compiled in
//! with `include_str!()`, so the default table needs no runtime file I/O.
//!
//! Columns: `Month,SD3neg,SD2neg,SD1neg,SD0,SD1,SD2,SD3` (weights in kg).

/// WHO weight-for-age, boys, 0 to 60 months.
pub const WEIGHT_FOR_AGE_BOYS: &str = include_str!("../data/who/weight_for_age_boys.csv");

/// WHO weight-for-age, girls, 0 to 60 months.
pub const WEIGHT_FOR_AGE_GIRLS: &str = include_str!("../data/who/weight_for_age_girls.csv");

/// File name of the boys table, both embedded and in an override directory.
pub const BOYS_FILE_NAME: &str = "weight_for_age_boys.csv";

/// File name of the girls table, both embedded and in an override directory.
pub const GIRLS_FILE_NAME: &str = "weight_for_age_girls.csv";
