//! Where the translation table comes from.
//!
//! Retrieval of a remote spreadsheet is left to the caller; locsheet reads the
//! CSV export it produces, or takes a table that is already in memory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{error::Error, traits::Parser, types::TranslationTable};

/// Anything that can hand over a complete translation table.
pub trait TableSource {
    fn load(&self) -> Result<TranslationTable, Error>;

    /// Human readable description used in logs.
    fn describe(&self) -> String;
}

impl TableSource for TranslationTable {
    fn load(&self) -> Result<TranslationTable, Error> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        "in-memory table".to_string()
    }
}

/// A CSV export of one sheet on the local file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves a sheet by name.
    ///
    /// When `location` is a directory the sheet is read from
    /// `<location>/<sheet>.csv`; otherwise `location` is the CSV file and the
    /// sheet name is only informational.
    pub fn for_sheet(location: impl AsRef<Path>, sheet: Option<&str>) -> Self {
        let location = location.as_ref();
        match sheet {
            Some(sheet) if location.is_dir() => Self::new(location.join(format!("{}.csv", sheet))),
            _ => Self::new(location),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for CsvFileSource {
    fn load(&self) -> Result<TranslationTable, Error> {
        if self.path.is_dir() {
            return Err(Error::SourceUnavailable(format!(
                "{} is a directory, name the sheet to read from it",
                self.path.display()
            )));
        }
        let table = TranslationTable::read_from(&self.path)?;
        info!(
            source = %self.path.display(),
            rows = table.rows.len(),
            "Loaded translation table"
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
