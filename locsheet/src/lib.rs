#![forbid(unsafe_code)]
//! Export translation spreadsheets to platform resource files.
//!
//! A translation table (key, base text and one column per language) is turned
//! into Android `strings.xml` or Apple `Localizable.strings` files, one per
//! language.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use locsheet::{ExportConfig, Platform, export_translations};
//!
//! let config = ExportConfig::new("translations.csv", "app/src/main/res", Platform::Android);
//! let report = export_translations(&config)?;
//! println!("wrote {} documents", report.documents.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Table layout
//!
//! - Row 0 is the header. Columns 4 and up name additional languages.
//! - Column 0 starting with `//` comments a row out.
//! - Column 2 is the key, column 3 the base text.
//!
//! # Output
//!
//! - **Android**: `values/strings.xml` and `values-<lang>/strings.xml`
//! - **iOS**: `Base.lproj/Localizable.strings` and `<lang>.lproj/Localizable.strings`

pub mod config;
pub mod error;
pub mod exporter;
pub mod formats;
pub mod placeholder;
pub mod projector;
pub mod sink;
pub mod source;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::ExportConfig,
    error::Error,
    exporter::{DocumentSummary, ExportReport, Exporter, export_from_source, export_translations},
    formats::{Platform, PlatformFormatter, escape_android, escape_ios},
    placeholder::needs_formatted_false,
    sink::{DocumentSink, FileSink, MemorySink},
    source::{CsvFileSource, TableSource},
    types::{Language, LanguageColumn, RenderedDocument, TranslationRow, TranslationTable},
};
