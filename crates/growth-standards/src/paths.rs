//! Reference data directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the embedded reference tables.
pub const STANDARDS_ENV_VAR: &str = "GROWTH_STANDARDS_DIR";

/// Directory configured through `GROWTH_STANDARDS_DIR`, if any.
///
/// An empty value is treated as unset.
pub fn standards_dir_override() -> Option<PathBuf> {
    std::env::var_os(STANDARDS_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
