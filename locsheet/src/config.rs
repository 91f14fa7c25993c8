//! Export configuration, usually read from a TOML file.
//!
//! ```toml
//! source = "translations.csv"
//! sheet = "Sheet1"
//! export_dir = "app/src/main/res"
//! platform = "android"
//! ```

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::Error, formats::Platform, source::CsvFileSource};

/// Everything one export run needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// A CSV export of the sheet, or a directory holding `<sheet>.csv` files.
    pub source: PathBuf,

    /// Sheet to export when `source` is a directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,

    /// Root directory of the generated resources.
    pub export_dir: PathBuf,

    #[serde(default)]
    pub platform: Platform,
}

impl ExportConfig {
    pub fn new(source: impl Into<PathBuf>, export_dir: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            source: source.into(),
            sheet: None,
            export_dir: export_dir.into(),
            platform,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, Error> {
        let config: ExportConfig = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values a TOML file cannot rule out by itself.
    pub fn validate(&self) -> Result<(), Error> {
        if self.source.as_os_str().is_empty() {
            return Err(Error::Config("`source` must not be empty".to_string()));
        }
        if self.export_dir.as_os_str().is_empty() {
            return Err(Error::Config("`export_dir` must not be empty".to_string()));
        }
        if self.sheet.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(Error::Config("`sheet` must not be blank".to_string()));
        }
        Ok(())
    }

    pub fn table_source(&self) -> CsvFileSource {
        CsvFileSource::for_sheet(&self.source, self.sheet.as_deref())
    }
}
