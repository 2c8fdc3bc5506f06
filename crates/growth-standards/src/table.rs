//! The immutable two-sex reference table.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use growth_model::{ReferenceKey, SdRow, Sex, TABLE_VERSION, ZScoreError};
use tracing::{debug, error, info};

use crate::embedded::{BOYS_FILE_NAME, GIRLS_FILE_NAME, WEIGHT_FOR_AGE_BOYS, WEIGHT_FOR_AGE_GIRLS};
use crate::error::{Result, StandardsError};
use crate::hash::fingerprint;
use crate::loader::parse_weight_for_age;
use crate::paths::standards_dir_override;

/// Rows of one sex, keyed by `(table version, age in months)`.
type SexTable = BTreeMap<(u8, u8), SdRow>;

/// Where a [`ReferenceTable`] was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Compiled-in WHO tables.
    Embedded,
    /// CSV files from an override directory.
    Directory(PathBuf),
    /// Caller-supplied CSV text.
    Inline,
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::Embedded => write!(f, "embedded WHO weight-for-age"),
            TableSource::Directory(path) => write!(f, "{}", path.display()),
            TableSource::Inline => write!(f, "inline"),
        }
    }
}

/// Weight-for-age reference rows for both sexes.
///
/// Built once and never mutated afterwards, so a shared reference can be
/// used from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    boys: SexTable,
    girls: SexTable,
    source: TableSource,
    fingerprint: String,
}

static DEFAULT_TABLE: LazyLock<ReferenceTable> = LazyLock::new(|| {
    load_configured().unwrap_or_else(|error| {
        error!(
            %error,
            "failed to load configured reference tables, using embedded data"
        );
        ReferenceTable::embedded().expect("embedded weight-for-age tables are well formed")
    })
});

/// The process-wide table, loaded on first access.
///
/// Honours `GROWTH_STANDARDS_DIR` like [`load_configured`]. The variable is
/// read once; if the directory cannot be loaded the error is logged and
/// the embedded data is used. Check [`ReferenceTable::source`] to see which
/// data was picked, or call [`load_configured`] to get the error instead.
pub fn default_table() -> &'static ReferenceTable {
    &DEFAULT_TABLE
}

/// Loads the table from `GROWTH_STANDARDS_DIR` when set, otherwise the
/// embedded data.
pub fn load_configured() -> Result<ReferenceTable> {
    match standards_dir_override() {
        Some(dir) => ReferenceTable::from_dir(&dir),
        None => ReferenceTable::embedded(),
    }
}

impl ReferenceTable {
    /// Parses the compiled-in WHO tables.
    pub fn embedded() -> Result<Self> {
        let mut table = Self::from_csv(WEIGHT_FOR_AGE_BOYS, WEIGHT_FOR_AGE_GIRLS)?;
        table.source = TableSource::Embedded;
        Ok(table)
    }

    /// Loads `weight_for_age_boys.csv` and `weight_for_age_girls.csv`
    /// from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| StandardsError::io(path, e))
        };
        let boys = read(BOYS_FILE_NAME)?;
        let girls = read(GIRLS_FILE_NAME)?;

        let mut table = Self::build(
            &dir.join(BOYS_FILE_NAME).display().to_string(),
            &boys,
            &dir.join(GIRLS_FILE_NAME).display().to_string(),
            &girls,
        )?;
        table.source = TableSource::Directory(dir.to_path_buf());
        info!(dir = %dir.display(), "loaded reference tables from directory");
        Ok(table)
    }

    /// Parses both tables from CSV text.
    pub fn from_csv(boys: &str, girls: &str) -> Result<Self> {
        Self::build(BOYS_FILE_NAME, boys, GIRLS_FILE_NAME, girls)
    }

    fn build(boys_name: &str, boys: &str, girls_name: &str, girls: &str) -> Result<Self> {
        let keyed = |rows: BTreeMap<u8, SdRow>| -> SexTable {
            rows.into_iter()
                .map(|(age, row)| ((TABLE_VERSION, age), row))
                .collect()
        };
        let table = Self {
            boys: keyed(parse_weight_for_age(boys_name, boys)?),
            girls: keyed(parse_weight_for_age(girls_name, girls)?),
            source: TableSource::Inline,
            fingerprint: fingerprint([boys.as_bytes(), girls.as_bytes()]),
        };
        debug!(
            boys = table.boys.len(),
            girls = table.girls.len(),
            "built reference table"
        );
        Ok(table)
    }

    fn table_for(&self, sex: Sex) -> &SexTable {
        match sex {
            Sex::Male => &self.boys,
            Sex::Female => &self.girls,
        }
    }

    /// Row for `key`, or [`ZScoreError::MissingRow`] when the data does
    /// not cover it.
    pub fn row(&self, key: &ReferenceKey) -> std::result::Result<&SdRow, ZScoreError> {
        self.table_for(key.sex)
            .get(&(key.version, key.age))
            .ok_or(ZScoreError::MissingRow { key: *key })
    }

    /// Row for `sex` and `age` in the current table version.
    pub fn lookup(&self, sex: Sex, age: u8) -> std::result::Result<&SdRow, ZScoreError> {
        self.row(&ReferenceKey::new(sex, age))
    }

    /// Ages covered for `sex`, ascending.
    pub fn ages(&self, sex: Sex) -> impl Iterator<Item = u8> + '_ {
        self.table_for(sex).keys().map(|&(_, age)| age)
    }

    /// Rows for `sex`, ascending by key.
    pub fn rows(&self, sex: Sex) -> impl Iterator<Item = (ReferenceKey, &SdRow)> + '_ {
        self.table_for(sex).iter().map(move |(&(version, age), row)| {
            (ReferenceKey { sex, version, age }, row)
        })
    }

    pub fn len(&self) -> usize {
        self.boys.len() + self.girls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boys.is_empty() && self.girls.is_empty()
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    /// SHA-256 hex digest of the source CSV text.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
