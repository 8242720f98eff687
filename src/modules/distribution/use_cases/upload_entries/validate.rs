use thiserror::Error;

use crate::modules::distribution::core::entry::EntryDraft;
use crate::modules::distribution::core::raw_row::RawRow;

pub const FIRST_NAME: &str = "FirstName";
pub const PHONE: &str = "Phone";
pub const NOTES: &str = "Notes";

pub const REQUIRED_FIELDS: [&str; 3] = [FIRST_NAME, PHONE, NOTES];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid file structure, missing required fields: {}", .missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

/// Checks the required headers on the first row, then maps every row to a draft.
///
/// Only the first row is checked. Later rows missing a cell map that field to
/// an empty string.
pub fn validate(rows: Vec<RawRow>) -> Result<Vec<EntryDraft>, SchemaError> {
    if let Some(first) = rows.first() {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !first.contains_header(field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError { missing });
        }
    }

    Ok(rows
        .iter()
        .map(|row| EntryDraft {
            first_name: row.text(FIRST_NAME),
            phone: row.text(PHONE),
            notes: row.text(NOTES),
        })
        .collect())
}
