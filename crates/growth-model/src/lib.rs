pub mod error;
pub mod reference;
pub mod sex;

pub use error::{ErrorKind, Result, SdRowError, ZScoreError};
pub use reference::{
    BAND_COUNT, MEDIAN_INDEX, ReferenceKey, SdPoint, SdRow, TABLE_VERSION,
};
pub use sex::{MALE_CODES, Sex};
