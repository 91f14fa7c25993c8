//! All error types for the locsheet crate.
//!
//! These are returned from all fallible operations (loading the table, rendering
//! documents, writing them out, reading configuration).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("malformed table: {0}")]
    MalformedTable(String),

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown platform `{0}`")]
    UnknownPlatform(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new malformed-table error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedTable(message.into())
    }

    /// Creates a new write failure for `path`.
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_malformed_table_error() {
        let error = Error::malformed("header has 3 columns");
        assert_eq!(error.to_string(), "malformed table: header has 3 columns");
    }

    #[test]
    fn test_source_unavailable_error() {
        let error = Error::SourceUnavailable("missing.csv".to_string());
        assert_eq!(error.to_string(), "source unavailable: missing.csv");
    }

    #[test]
    fn test_write_failure_mentions_path() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = Error::write_failure("out/values/strings.xml", source);
        let message = error.to_string();
        assert!(message.contains("out/values/strings.xml"));
        assert!(message.contains("denied"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_unknown_platform_error() {
        let error = Error::UnknownPlatform("windows".to_string());
        assert_eq!(error.to_string(), "unknown platform `windows`");
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }
}
