use std::collections::HashMap;
use std::fmt;

/// A single spreadsheet cell as read by the parser, before any coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Blank,
}

impl CellValue {
    pub fn from_text(raw: &str) -> Self {
        if raw.is_empty() {
            CellValue::Blank
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(number) => write!(f, "{number}"),
            CellValue::Bool(flag) => write!(f, "{flag}"),
            CellValue::Blank => Ok(()),
        }
    }
}

/// One data row keyed by the header of the column it was read from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.insert(header.into(), value);
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header)
    }

    pub fn contains_header(&self, header: &str) -> bool {
        self.cells.contains_key(header)
    }

    /// Cell rendered as text; a missing or blank cell yields an empty string.
    pub fn text(&self, header: &str) -> String {
        self.get(header).map(ToString::to_string).unwrap_or_default()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_blank)
    }
}

impl<H: Into<String>> FromIterator<(H, CellValue)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (H, CellValue)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().map(|(h, v)| (h.into(), v)).collect(),
        }
    }
}
