//! The export run: one table in, one document per language out.
//!
//! The run is a single synchronous pass. The table is validated and every
//! data row parsed before the first document is handed to the sink, so a
//! malformed table never leaves partial output behind. Once writing has
//! started, a failure stops the run but keeps the documents already written.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::ExportConfig,
    error::Error,
    formats::Platform,
    projector::project,
    sink::{DocumentSink, FileSink},
    source::TableSource,
    types::{Language, LanguageColumn, RenderedDocument, TranslationRow, TranslationTable},
};

/// Renders and emits the documents of one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exporter {
    platform: Platform,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub platform: Platform,
    pub documents: Vec<DocumentSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    /// `base` or the language column name.
    pub language: String,
    /// Path relative to the export directory.
    pub path: PathBuf,
    pub entries: usize,
}

impl From<&RenderedDocument> for DocumentSummary {
    fn from(document: &RenderedDocument) -> Self {
        Self {
            language: document.language.to_string(),
            path: document.path.clone(),
            entries: document.entries,
        }
    }
}

impl Exporter {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Renders the document for a single language.
    pub fn render_language(
        &self,
        rows: &[TranslationRow],
        language: &Language,
    ) -> Result<RenderedDocument, Error> {
        let formatter = self.platform.formatter();
        let projected = project(rows, language);
        let document = formatter.document(language, &projected);

        Ok(RenderedDocument {
            language: language.clone(),
            path: formatter.document_path(language),
            contents: formatter.render(&document)?,
            entries: document.entries.len(),
        })
    }

    /// Renders every document without writing anything: base first, then the
    /// language columns in header order.
    pub fn render(&self, table: &TranslationTable) -> Result<Vec<RenderedDocument>, Error> {
        let (columns, rows) = prepare(table)?;
        languages(&columns)
            .map(|language| self.render_language(&rows, &language))
            .collect()
    }

    /// Renders each document and hands it to `sink` right away.
    pub fn export<S: DocumentSink + ?Sized>(
        &self,
        table: &TranslationTable,
        sink: &mut S,
    ) -> Result<ExportReport, Error> {
        let (columns, rows) = prepare(table)?;
        info!(
            platform = %self.platform,
            languages = columns.len(),
            rows = rows.len(),
            "Starting export"
        );

        let mut documents = Vec::with_capacity(columns.len() + 1);
        for language in languages(&columns) {
            let document = self.render_language(&rows, &language)?;
            sink.write_document(&document)?;
            documents.push(DocumentSummary::from(&document));
        }

        info!(
            platform = %self.platform,
            documents = documents.len(),
            "All translations exported"
        );
        Ok(ExportReport {
            platform: self.platform,
            documents,
        })
    }
}

fn prepare(table: &TranslationTable) -> Result<(Vec<LanguageColumn>, Vec<TranslationRow>), Error> {
    let columns = table.language_columns()?;
    for column in &columns {
        if column.language_identifier().is_none() {
            warn!(
                language = column.name.as_str(),
                column = column.index + 1,
                "language column is not a recognized language identifier"
            );
        }
    }
    let rows = table.translation_rows(&columns)?;
    Ok((columns, rows))
}

fn languages(columns: &[LanguageColumn]) -> impl Iterator<Item = Language> + '_ {
    std::iter::once(Language::Base).chain(columns.iter().map(Language::from))
}

/// Loads the configured table and writes every document below the export
/// directory.
pub fn export_translations(config: &ExportConfig) -> Result<ExportReport, Error> {
    export_from_source(&config.table_source(), config)
}

/// Like [`export_translations`] with an explicit table source.
pub fn export_from_source<T: TableSource + ?Sized>(
    source: &T,
    config: &ExportConfig,
) -> Result<ExportReport, Error> {
    info!(source = %source.describe(), "Loading translation table");
    let table = source.load()?;
    let mut sink = FileSink::new(&config.export_dir);
    Exporter::new(config.platform).export(&table, &mut sink)
}
