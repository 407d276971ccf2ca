//! Output serialization: assignment tables to XLSX, CSV files, or CSV text.
//!
//! Column order always follows [`OUTPUT_COLUMNS`].

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::ExportResult;
use crate::models::{Assignment, OUTPUT_COLUMNS};

/// Worksheet name of the generated workbook.
const SHEET_NAME: &str = "Mapping";

/// Write assignments to an XLSX workbook with a single `Mapping` worksheet.
pub fn write_assignments_xlsx<P: AsRef<Path>>(
    assignments: &[Assignment],
    path: P,
) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in OUTPUT_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }

    for (idx, assignment) in assignments.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, cell) in record(assignment).into_iter().enumerate() {
            worksheet.write_string(row, col as u16, cell)?;
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

/// Write assignments as CSV to any writer.
pub fn write_assignments_csv<W: Write>(assignments: &[Assignment], writer: W) -> ExportResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(OUTPUT_COLUMNS)?;
    for assignment in assignments {
        wtr.write_record(record(assignment))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write assignments as a CSV file.
pub fn write_assignments_csv_file<P: AsRef<Path>>(
    assignments: &[Assignment],
    path: P,
) -> ExportResult<()> {
    let file = std::fs::File::create(path)?;
    write_assignments_csv(assignments, file)
}

/// Render assignments as a CSV string, for stdout display.
pub fn assignments_to_csv_string(assignments: &[Assignment]) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_assignments_csv(assignments, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// One output record in [`OUTPUT_COLUMNS`] order.
fn record(a: &Assignment) -> [&str; 8] {
    [
        &a.branch,
        &a.branch_id,
        &a.state,
        &a.name,
        &a.emp_id,
        a.role.as_code(),
        &a.role_emp_id,
        &a.unique_code,
    ]
}
