//! Raw tabular BOM data.

use crate::error::{BomError, Result};
use std::io::Read;
use std::path::Path;

/// A header row plus string records, as read from a spreadsheet export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BomTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl BomTable {
    /// Create a table from headers and records.
    pub fn new<H, S>(headers: H, records: Vec<Vec<String>>) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            records,
        }
    }

    /// Read CSV from any reader. The first row holds the column names.
    ///
    /// Records shorter than the header row are accepted; missing cells
    /// read as empty.
    pub fn from_csv_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            records.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(
            columns = headers.len(),
            records = records.len(),
            "Read BOM table"
        );

        Ok(Self { headers, records })
    }

    /// Read CSV from a string.
    pub fn from_csv_str(content: &str, delimiter: u8) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes(), delimiter)
    }

    /// Read CSV from a file.
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| BomError::io(path, e))?;
        Self::from_csv_reader(std::io::BufReader::new(file), delimiter)
    }

    /// Index of a column, matched exactly first and then ignoring ASCII case.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .or_else(|| self.headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
    }

    /// Cell value, empty when the record is shorter than the header row.
    #[must_use]
    pub fn cell(&self, record: usize, column: usize) -> &str {
        self.records
            .get(record)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
