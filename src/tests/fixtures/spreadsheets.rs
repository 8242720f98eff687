// Builders for upload bodies: CSV text and in-memory xlsx workbooks.

use rust_xlsxwriter::Workbook;

pub const HEADER: [&str; 3] = ["FirstName", "Phone", "Notes"];

pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

pub fn numbered_contacts(count: usize) -> Vec<[String; 3]> {
    (0..count)
        .map(|i| {
            [
                format!("Contact {i}"),
                format!("555-{i:04}"),
                format!("note {i}"),
            ]
        })
        .collect()
}

pub fn contacts_csv<S: AsRef<str>>(rows: &[[S; 3]]) -> Vec<u8> {
    let mut text = HEADER.join(",");
    text.push('\n');
    for row in rows {
        let cells: Vec<&str> = row.iter().map(AsRef::as_ref).collect();
        text.push_str(&cells.join(","));
        text.push('\n');
    }
    text.into_bytes()
}

pub fn contacts_workbook<S: AsRef<str>>(rows: &[[S; 3]]) -> Vec<u8> {
    let mut grid: Vec<Vec<Cell>> = vec![HEADER.iter().map(|h| Cell::from(*h)).collect()];
    for row in rows {
        grid.push(row.iter().map(|cell| Cell::from(cell.as_ref())).collect());
    }
    workbook(&grid)
}

/// First worksheet filled row by row; empty text cells are left unwritten.
pub fn workbook(grid: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) if text.is_empty() => {}
                Cell::Text(text) => {
                    worksheet.write_string(r as u32, c as u16, text).unwrap();
                }
                Cell::Number(number) => {
                    worksheet.write_number(r as u32, c as u16, *number).unwrap();
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}
