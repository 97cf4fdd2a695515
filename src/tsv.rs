//! TSV files for the headless driver, read and written with the csv crate
//!
//! The first line holds the column ids. Empty fields load as `Empty`.

use std::io::Cursor;

use crate::column::CellValue;
use crate::store::{DataStore, Record};

/// Error type for TSV loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "TSV parse error at line {}: {}", line, self.message),
            None => write!(f, "TSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for LoadError {}

/// Header ids plus records keyed by them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub keys: Vec<String>,
    pub rows: Vec<Record>,
}

pub fn read_table(content: &str) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let keys: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(str::to_string)
        .collect();
    if keys.iter().all(String::is_empty) {
        return Err(LoadError {
            message: "missing header row".to_string(),
            line: Some(1),
        });
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| LoadError {
            message: e.to_string(),
            line: Some(idx + 2),
        })?;
        let row: Record = keys
            .iter()
            .zip(record.iter())
            .filter(|(_, field)| !field.is_empty())
            .map(|(key, field)| (key.clone(), CellValue::text(field)))
            .collect();
        rows.push(row);
    }

    Ok(Table { keys, rows })
}

/// Serialize every row of `store` under `keys`
pub fn write_table(keys: &[String], store: &dyn DataStore) -> Result<String, LoadError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());
    let to_error = |e: csv::Error| LoadError {
        message: e.to_string(),
        line: None,
    };

    writer.write_record(keys).map_err(to_error)?;
    for row in 0..store.row_count() {
        let fields = (0..keys.len()).map(|col| store.get_cell(row, col).to_string());
        writer.write_record(fields).map_err(to_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| LoadError {
        message: e.to_string(),
        line: None,
    })?;
    String::from_utf8(bytes).map_err(|e| LoadError {
        message: e.to_string(),
        line: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::VecStore;

    #[test]
    fn test_read_table() {
        let table = read_table("firstName\tlastName\nElon\tMusk\nJeff\t\n").unwrap();
        assert_eq!(table.keys, vec!["firstName", "lastName"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["lastName"], CellValue::text("Musk"));
        assert!(!table.rows[1].contains_key("lastName"));
    }

    #[test]
    fn test_short_rows_are_allowed() {
        let table = read_table("a\tb\nx\n").unwrap();
        assert_eq!(table.rows[0].len(), 1);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = read_table("").unwrap_err();
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn test_write_table() {
        let table = read_table("a\tb\n1\t2\n\t4\n").unwrap();
        let store = VecStore::new(table.keys.clone(), table.rows);
        let out = write_table(&table.keys, &store).unwrap();
        assert_eq!(out, "a\tb\n1\t2\n\t4\n");
    }
}
