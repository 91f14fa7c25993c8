//! Destinations for rendered documents.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{error::Error, types::RenderedDocument};

/// Receives each finished document as soon as it is rendered.
pub trait DocumentSink {
    fn write_document(&mut self, document: &RenderedDocument) -> Result<(), Error>;
}

/// Writes documents below an export directory, creating directories on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSink for FileSink {
    fn write_document(&mut self, document: &RenderedDocument) -> Result<(), Error> {
        let path = self.root.join(&document.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::write_failure(parent, e))?;
        }
        fs::write(&path, document.contents.as_bytes()).map_err(|e| Error::write_failure(&path, e))?;

        info!(
            language = %document.language,
            path = %path.display(),
            entries = document.entries,
            "Exported document"
        );
        Ok(())
    }
}

/// Keeps documents in memory, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub documents: Vec<RenderedDocument>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a document by its relative path.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&RenderedDocument> {
        self.documents.iter().find(|doc| doc.path == path.as_ref())
    }
}

impl DocumentSink for MemorySink {
    fn write_document(&mut self, document: &RenderedDocument) -> Result<(), Error> {
        self.documents.push(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;
    use tempfile::TempDir;

    fn document(path: &str, contents: &str) -> RenderedDocument {
        RenderedDocument {
            language: Language::Base,
            path: PathBuf::from(path),
            contents: contents.to_string(),
            entries: 1,
        }
    }

    #[test]
    fn test_file_sink_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("out");
        let mut sink = FileSink::new(&root);

        sink.write_document(&document("values/strings.xml", "first"))
            .unwrap();
        // Writing into an existing directory is fine and overwrites the file.
        sink.write_document(&document("values/strings.xml", "second"))
            .unwrap();

        let written = fs::read_to_string(root.join("values/strings.xml")).unwrap();
        assert_eq!(written, "second");
    }

    #[test]
    fn test_file_sink_reports_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A file where the export directory should be.
        let root = temp_dir.path().join("blocked");
        fs::write(&root, "").unwrap();
        let mut sink = FileSink::new(&root);

        let err = sink
            .write_document(&document("values/strings.xml", "x"))
            .unwrap_err();
        assert!(matches!(err, Error::WriteFailure { .. }));
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.write_document(&document("a", "1")).unwrap();
        sink.write_document(&document("b", "2")).unwrap();
        assert_eq!(sink.documents.len(), 2);
        assert_eq!(sink.get("b").unwrap().contents, "2");
        assert!(sink.get("c").is_none());
    }
}
