//! Reading the translation table from CSV.
//!
//! Every record becomes a row, the header included. Rows may have different
//! lengths; whether they are long enough is decided later by the table itself.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{error::Error, traits::Parser, types::TranslationTable};

impl Parser for TranslationTable {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(TranslationTable::new(rows))
    }

    /// Override default file reading to support BOM-aware decoding (spreadsheet
    /// exports often start with a UTF-8 BOM).
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::SourceUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        Self::from_reader(BufReader::new(decoder))
    }
}
