use std::io::Cursor;
use std::iter;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use thiserror::Error;

use crate::modules::distribution::core::raw_row::{CellValue, RawRow};

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma separated text.
    Delimited,
    /// Binary workbook (xlsx, xls, xlsb, ods).
    Spreadsheet,
}

impl SourceFormat {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(SourceFormat::Delimited),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Some(SourceFormat::Spreadsheet),
            _ => None,
        }
    }

    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
            SourceFormat::Spreadsheet
        } else {
            SourceFormat::Delimited
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unreadable delimited file: {0}")]
    Delimited(String),

    #[error("unreadable spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("spreadsheet contains no worksheet")]
    NoWorksheet,

    #[error("file contains no rows")]
    Empty,
}

/// Reads every data row of `bytes`, keyed by the first row's headers.
pub fn parse(bytes: &[u8], format: SourceFormat) -> Result<Vec<RawRow>, ParseError> {
    match format {
        SourceFormat::Delimited => parse_delimited(bytes),
        SourceFormat::Spreadsheet => parse_spreadsheet(bytes),
    }
}

fn parse_delimited(bytes: &[u8]) -> Result<Vec<RawRow>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<Option<String>> = reader
        .headers()
        .map_err(|e| ParseError::Delimited(e.to_string()))?
        .iter()
        .map(header_name)
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ParseError::Delimited(e.to_string()))?;
        records.push(record.iter().map(CellValue::from_text).collect());
    }
    collect_rows(&headers, records)
}

fn parse_spreadsheet(bytes: &[u8]) -> Result<Vec<RawRow>, ParseError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| ParseError::Spreadsheet(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ParseError::NoWorksheet)?
        .map_err(|e| ParseError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<Option<String>> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| header_name(&cell.to_string()))
            .collect(),
        None => return Err(ParseError::Empty),
    };
    let records = rows.map(|row| row.iter().map(cell_value).collect());
    collect_rows(&headers, records)
}

fn header_name(raw: &str) -> Option<String> {
    let name = raw.trim_start_matches('\u{feff}');
    (!name.trim().is_empty()).then(|| name.to_string())
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Blank,
        Data::String(text) => CellValue::from_text(text),
        Data::Int(number) => CellValue::Number(*number as f64),
        Data::Float(number) => CellValue::Number(*number),
        Data::Bool(flag) => CellValue::Bool(*flag),
        other => CellValue::from_text(&other.to_string()),
    }
}

// Short records are padded with blanks to the header width and fully blank
// rows are dropped, so delimited and workbook sources agree.
fn collect_rows(
    headers: &[Option<String>],
    records: impl IntoIterator<Item = Vec<CellValue>>,
) -> Result<Vec<RawRow>, ParseError> {
    let rows: Vec<RawRow> = records
        .into_iter()
        .map(|cells| {
            headers
                .iter()
                .zip(cells.into_iter().chain(iter::repeat(CellValue::Blank)))
                .filter_map(|(header, cell)| header.clone().map(|h| (h, cell)))
                .collect::<RawRow>()
        })
        .filter(|row| !row.is_blank())
        .collect();

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(rows)
}
