//! All supported target platforms for locsheet.
//!
//! This module provides the [`Platform`] enum and the [`PlatformFormatter`]
//! trait implemented once per platform, so the exporter never has to branch
//! on the target.

pub mod android_strings;
pub mod csv;
pub mod strings;

use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

// Reexporting the formats for easier access
pub use android_strings::{AndroidFormatter, Format as AndroidStringsFormat, escape_android};
pub use strings::{Format as StringsFormat, IosFormatter, escape_ios};

use crate::{
    Error,
    projector::ProjectedRow,
    types::{Entry, Language, ResourceDocument},
};

/// The platforms a table can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Platform {
    /// Android `res/values*/strings.xml`.
    #[default]
    Android,
    /// Apple `*.lproj/Localizable.strings`.
    Ios,
}

impl Platform {
    /// Returns the formatter implementing this platform.
    pub fn formatter(&self) -> &'static dyn PlatformFormatter {
        match self {
            Platform::Android => &AndroidFormatter,
            Platform::Ios => &IosFormatter,
        }
    }
}

/// Implements [`std::fmt::Display`] for [`Platform`].
///
/// ```rust
/// use locsheet::formats::Platform;
/// assert_eq!(Platform::Android.to_string(), "android");
/// assert_eq!(Platform::Ios.to_string(), "ios");
/// ```
impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
        }
    }
}

/// Implements [`std::str::FromStr`] for [`Platform`].
///
/// Accepts the following case-insensitive strings:
/// - `"android"`, `"xml"` → `Platform::Android`
/// - `"ios"`, `"apple"`, `"strings"` → `Platform::Ios`
///
/// ```rust
/// use locsheet::formats::Platform;
/// use std::str::FromStr;
/// assert_eq!(Platform::from_str("Android").unwrap(), Platform::Android);
/// assert_eq!(Platform::from_str("ios").unwrap(), Platform::Ios);
/// assert!(Platform::from_str("windows").is_err());
/// ```
impl FromStr for Platform {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "android" | "xml" => Ok(Platform::Android),
            "ios" | "apple" | "strings" => Ok(Platform::Ios),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Everything the exporter needs to know about one platform.
pub trait PlatformFormatter {
    /// Escapes raw text for the platform's string literal grammar.
    fn escape(&self, text: &str) -> String;

    /// Turns a projected row into a document entry.
    fn entry(&self, row: &ProjectedRow) -> Entry {
        Entry {
            key: row.key.clone(),
            text: self.escape(&row.text),
            formatted_false: false,
        }
    }

    /// Serializes a complete document.
    fn render(&self, document: &ResourceDocument) -> Result<String, Error>;

    /// Path of the document for `language`, relative to the export directory.
    fn document_path(&self, language: &Language) -> PathBuf;

    /// Builds the document for `language` from projected rows.
    fn document(&self, language: &Language, rows: &[ProjectedRow]) -> ResourceDocument {
        ResourceDocument {
            language: language.clone(),
            entries: rows.iter().map(|row| self.entry(row)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Android.to_string(), "android");
        assert_eq!(Platform::Ios.to_string(), "ios");
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!(Platform::from_str("android").unwrap(), Platform::Android);
        assert_eq!(Platform::from_str(" XML ").unwrap(), Platform::Android);
        assert_eq!(Platform::from_str("iOS").unwrap(), Platform::Ios);
        assert_eq!(Platform::from_str("apple").unwrap(), Platform::Ios);
        assert_eq!(Platform::from_str("strings").unwrap(), Platform::Ios);
        assert!(matches!(
            Platform::from_str("windows"),
            Err(Error::UnknownPlatform(p)) if p == "windows"
        ));
    }

    #[test]
    fn test_default_platform_is_android() {
        assert_eq!(Platform::default(), Platform::Android);
    }

    #[test]
    fn test_platform_try_from_string() {
        assert_eq!(Platform::try_from("Apple".to_string()).unwrap(), Platform::Ios);
        assert_eq!(Platform::try_from("xml".to_string()).unwrap(), Platform::Android);
        assert!(Platform::try_from("windows".to_string()).is_err());
    }

    #[test]
    fn test_document_paths() {
        let fr = Language::Named("fr".to_string());
        let android = Platform::Android.formatter();
        assert_eq!(
            android.document_path(&Language::Base),
            PathBuf::from("values/strings.xml")
        );
        assert_eq!(
            android.document_path(&fr),
            PathBuf::from("values-fr/strings.xml")
        );

        let ios = Platform::Ios.formatter();
        assert_eq!(
            ios.document_path(&Language::Base),
            PathBuf::from("Base.lproj/Localizable.strings")
        );
        assert_eq!(
            ios.document_path(&fr),
            PathBuf::from("fr.lproj/Localizable.strings")
        );
    }
}
