use std::io::Cursor;

use actix_multipart::form::MultipartForm;
use actix_multipart::form::bytes::Bytes as MultipartBytes;
use csv::{StringRecord, Trim};
use thiserror::Error;

/// Result type returned by the CSV upload helpers.
pub type UploadFormResult<T> = Result<T, UploadFormError>;

/// Errors that can occur while parsing a bulk-replace CSV upload.
#[derive(Debug, Error)]
pub enum UploadFormError {
    /// The header row lacks one or more required columns.
    #[error("upload is missing required headers: {}", .missing.join(", "))]
    MissingRequiredHeaders { missing: Vec<&'static str> },
    /// A row left a required column blank.
    #[error("row {row} is missing a value for `{column}`")]
    EmptyCell { row: usize, column: &'static str },
    /// A SKU cell is not an integer.
    #[error("row {row} has invalid SKU `{value}`")]
    InvalidSku { row: usize, value: String },
    /// CSV parsing failures.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Multipart payload carrying a CSV file in the `csv` field.
#[derive(MultipartForm)]
pub struct CsvUploadForm {
    #[multipart(limit = "32 MiB")]
    pub csv: MultipartBytes,
}

impl CsvUploadForm {
    /// Split the multipart field into the client filename and raw bytes.
    pub fn into_parts(self) -> (Option<String>, Vec<u8>) {
        (self.csv.file_name, self.csv.data.to_vec())
    }
}

/// A data row with its values laid out in the order of the requested columns.
pub(crate) struct CsvRow {
    /// 1-based line number, counting the header row.
    pub row: usize,
    pub values: Vec<String>,
}

/// Parse `bytes` as a headed CSV and pull out the `columns`.
///
/// Header matching is case-insensitive and ignores column order and extra
/// columns. Every requested cell must be non-empty.
pub(crate) fn read_required_columns(
    bytes: Vec<u8>,
    columns: &[&'static str],
) -> UploadFormResult<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(Cursor::new(bytes));

    let headers = reader.headers()?.clone();

    let mut indexes = Vec::with_capacity(columns.len());
    let mut missing = Vec::new();
    for column in columns {
        match locate_header(&headers, column) {
            Some(index) => indexes.push(index),
            None => missing.push(*column),
        }
    }

    if !missing.is_empty() {
        return Err(UploadFormError::MissingRequiredHeaders { missing });
    }

    let mut rows = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 2; // account for header row
        let record = record?;

        let mut values = Vec::with_capacity(columns.len());
        for (column, position) in columns.iter().zip(&indexes) {
            let value = record.get(*position).unwrap_or("").trim();
            if value.is_empty() {
                return Err(UploadFormError::EmptyCell {
                    row,
                    column: *column,
                });
            }
            values.push(value.to_string());
        }

        rows.push(CsvRow { row, values });
    }

    Ok(rows)
}

fn locate_header(headers: &StringRecord, expected: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(expected))
}
