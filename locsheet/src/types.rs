//! Core, platform-agnostic types for locsheet.
//! The table reader decodes into these; the platform formatters serialize these.

use std::{
    collections::HashMap,
    fmt::Display,
    path::{Component, Path, PathBuf},
};

use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Prefix in column 0 marking a row as commented out.
pub const COMMENT_MARKER: &str = "//";
/// Column holding the translation key.
pub const KEY_COLUMN: usize = 2;
/// Column holding the base-language text.
pub const BASE_COLUMN: usize = 3;
/// First column that may name an additional language.
pub const FIRST_LANGUAGE_COLUMN: usize = 4;

/// The whole translation spreadsheet as an ordered list of rows.
///
/// Row 0 is the header. Every other row is data: column 0 may carry the
/// comment marker, column 2 is the key, column 3 the base text and columns
/// 4.. hold translations for the languages named in the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationTable {
    pub rows: Vec<Vec<String>>,
}

impl TranslationTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds a table from string slices, mostly useful in tests.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Returns the header row after checking it has the key and base columns.
    pub fn header(&self) -> Result<&[String], Error> {
        let header = self
            .rows
            .first()
            .ok_or_else(|| Error::malformed("table is empty"))?;
        if header.len() <= BASE_COLUMN {
            return Err(Error::malformed(format!(
                "header has {} columns, expected at least {}",
                header.len(),
                BASE_COLUMN + 1
            )));
        }
        Ok(header)
    }

    /// Derives the additional language columns from the header.
    ///
    /// Blank header cells are skipped. A name seen twice keeps its first column.
    pub fn language_columns(&self) -> Result<Vec<LanguageColumn>, Error> {
        let header = self.header()?;
        let mut columns: Vec<LanguageColumn> = Vec::new();

        for (index, name) in header.iter().enumerate().skip(FIRST_LANGUAGE_COLUMN) {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if !is_safe_directory_name(name) {
                return Err(Error::malformed(format!(
                    "language column {} has an unusable name `{}`",
                    index + 1,
                    name
                )));
            }
            if let Some(first) = columns.iter().find(|c| c.name == name) {
                warn!(
                    language = name,
                    column = index + 1,
                    first_column = first.index + 1,
                    "duplicate language column ignored"
                );
                continue;
            }
            columns.push(LanguageColumn {
                name: name.to_string(),
                index,
            });
        }

        Ok(columns)
    }

    /// Builds the logical view of every data row.
    ///
    /// A non-comment row without a key or base cell is rejected. Missing
    /// language cells are left out of the row's translations.
    pub fn translation_rows(&self, columns: &[LanguageColumn]) -> Result<Vec<TranslationRow>, Error> {
        self.header()?;
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, fields)| TranslationRow::from_fields(index + 1, fields, columns))
            .collect()
    }
}

fn is_safe_directory_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// A language named in the header and the column it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageColumn {
    pub name: String,
    /// Zero-based column index.
    pub index: usize,
}

impl LanguageColumn {
    /// Parses the column name as a language identifier.
    ///
    /// Android region qualifiers (`pt-rBR`) are accepted as well as BCP 47 tags.
    pub fn language_identifier(&self) -> Option<LanguageIdentifier> {
        let normalized = self
            .name
            .split('-')
            .map(|part| match part.strip_prefix('r') {
                Some(region) if region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()) => {
                    region
                }
                _ => part,
            })
            .collect::<Vec<_>>()
            .join("-");
        normalized.parse().ok()
    }
}

/// Which pass of the export a document belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    /// The base text in column 3.
    Base,
    /// A language column from the header.
    Named(String),
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Base => write!(f, "base"),
            Language::Named(name) => write!(f, "{}", name),
        }
    }
}

impl From<&LanguageColumn> for Language {
    fn from(column: &LanguageColumn) -> Self {
        Language::Named(column.name.clone())
    }
}

/// Logical view of one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    /// One-based line of the row in the table, header included.
    pub line: usize,
    pub key: String,
    pub is_comment: bool,
    pub base: String,
    /// Raw text per language name. Cells past the end of the row are absent.
    pub translations: HashMap<String, String>,
}

impl TranslationRow {
    pub fn from_fields(
        line: usize,
        fields: &[String],
        columns: &[LanguageColumn],
    ) -> Result<Self, Error> {
        let is_comment = fields
            .first()
            .is_some_and(|marker| marker.starts_with(COMMENT_MARKER));

        if fields.len() <= BASE_COLUMN {
            if is_comment {
                return Ok(TranslationRow {
                    line,
                    key: fields.get(KEY_COLUMN).cloned().unwrap_or_default(),
                    is_comment,
                    base: String::new(),
                    translations: HashMap::new(),
                });
            }
            return Err(Error::malformed(format!(
                "row {} has {} fields, expected at least {}",
                line,
                fields.len(),
                BASE_COLUMN + 1
            )));
        }

        let translations = columns
            .iter()
            .filter_map(|column| {
                fields
                    .get(column.index)
                    .map(|text| (column.name.clone(), text.clone()))
            })
            .collect();

        Ok(TranslationRow {
            line,
            key: fields[KEY_COLUMN].clone(),
            is_comment,
            base: fields[BASE_COLUMN].clone(),
            translations,
        })
    }

    /// Raw text of this row for `language`, if the cell exists.
    pub fn text(&self, language: &Language) -> Option<&str> {
        match language {
            Language::Base => Some(&self.base),
            Language::Named(name) => self.translations.get(name).map(String::as_str),
        }
    }
}

/// One `<string>` element or `.strings` line, already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub text: String,
    /// Only meaningful for Android.
    pub formatted_false: bool,
}

/// All entries for one language of a platform, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDocument {
    pub language: Language,
    pub entries: Vec<Entry>,
}

/// A finished document ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub language: Language,
    /// Location relative to the export directory.
    pub path: PathBuf,
    pub contents: String,
    pub entries: usize,
}
