//! Growth reference standards: WHO weight-for-age tables and loaders.
//!
//! - [`embedded`]: compiled-in CSV data
//! - [`loader`]: CSV parsing and row validation
//! - [`table`]: the immutable [`ReferenceTable`] and its process-wide default
//!
//! ```rust,ignore
//! use growth_model::Sex;
//! use growth_standards::default_table;
//!
//! let row = default_table().lookup(Sex::Male, 6)?;
//! println!("median weight at 6 months: {}", row.median());
//! ```

#![deny(unsafe_code)]

pub mod embedded;
pub mod error;
pub mod hash;
pub mod loader;
pub mod paths;
pub mod table;

pub use error::{Result, StandardsError};
pub use paths::{STANDARDS_ENV_VAR, standards_dir_override};
pub use table::{ReferenceTable, TableSource, default_table, load_configured};
