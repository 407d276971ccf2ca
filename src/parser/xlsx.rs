//! XLSX roster reading via calamine.
//!
//! Reads the first worksheet, treating row 0 as the header row. Cells keep
//! their native type; integral floats collapse to integers so that an
//! employee id stored as `1234.0` reaches the pipeline as `1234`.

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::{json, Map, Value};
use std::path::Path;

use super::{SheetData, SheetFormat};
use crate::error::{SheetError, SheetResult};

/// Parse the first worksheet of an XLSX workbook into a [`SheetData`].
pub fn parse_xlsx_file<P: AsRef<Path>>(path: P) -> SheetResult<SheetData> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SheetError::NoSheets)?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut sheet_rows = range.rows();

    let header_row = sheet_rows.next().ok_or(SheetError::Empty)?;
    let headers: Vec<String> = header_row.iter().map(header_text).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(SheetError::NoHeaders);
    }

    let mut rows = Vec::new();
    for row in sheet_rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let value = row.get(i).map(cell_value).unwrap_or(Value::Null);
            obj.insert(header.clone(), value);
        }
        rows.push(Value::Object(obj));
    }

    Ok(SheetData {
        rows,
        headers,
        format: SheetFormat::Xlsx { sheet: sheet_name },
    })
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Convert a workbook cell to its JSON representation.
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => json!(i),
        Data::Float(f) if f.fract() == 0.0 => json!(*f as i64),
        Data::Float(f) => json!(f),
        Data::Bool(b) => Value::Bool(*b),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn write_fixture(path: &Path) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Roster").unwrap();

        worksheet.write_string(0, 0, "Branch").unwrap();
        worksheet.write_string(0, 1, "Branch ID").unwrap();
        worksheet.write_string(0, 2, "AM Emp ID").unwrap();
        worksheet.write_string(0, 3, "Note").unwrap();

        worksheet.write_string(1, 0, "X1").unwrap();
        worksheet.write_number(1, 1, 10.0).unwrap();
        worksheet.write_number(1, 2, 1234.0).unwrap();
        // Note cell left blank

        worksheet.write_string(2, 0, "X2").unwrap();
        worksheet.write_number(2, 1, 11.0).unwrap();
        worksheet.write_number(2, 2, 9.5).unwrap();
        worksheet.write_string(2, 3, "-").unwrap();

        workbook.save(path).unwrap();
    }

    #[test]
    fn test_xlsx_roundtrip_cell_coercion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.xlsx");
        write_fixture(&path);

        let sheet = parse_xlsx_file(&path).unwrap();
        assert!(matches!(sheet.format, SheetFormat::Xlsx { sheet: ref name } if name == "Roster"));
        assert_eq!(sheet.headers, vec!["Branch", "Branch ID", "AM Emp ID", "Note"]);
        assert_eq!(sheet.rows.len(), 2);

        // Integral floats collapse to integers
        assert_eq!(sheet.rows[0]["Branch ID"], json!(10));
        assert_eq!(sheet.rows[0]["AM Emp ID"], json!(1234));
        // Blank cell is null
        assert_eq!(sheet.rows[0]["Note"], Value::Null);
        // Non-integral floats stay floats
        assert_eq!(sheet.rows[1]["AM Emp ID"], json!(9.5));
        assert_eq!(sheet.rows[1]["Note"], "-");
    }

    #[test]
    fn test_missing_file() {
        let result = parse_xlsx_file("/nonexistent/roster.xlsx");
        assert!(result.is_err());
    }
}
