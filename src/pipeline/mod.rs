//! The reshape pipeline: wide roster in, long assignment table out.
//!
//! ```text
//! ┌───────────────┐    ┌──────┐    ┌────────┐    ┌─────────────────┐
//! │  Wide roster  │───▶│ Melt │───▶│ Filter │───▶│ Keys + collapse │──▶ Vec<Assignment>
//! │ (SheetData)   │    └──────┘    └────────┘    └─────────────────┘
//! └───────────────┘
//! ```
//!
//! Linear and stateless: every melted row is processed independently. The
//! only failure modes are structural (missing columns, empty sheet); a
//! missing or non-numeric employee id just drops its row.

use log::debug;

pub mod melt;
pub mod normalize;

pub use melt::{melt, MeltedRow};
pub use normalize::normalize_emp_id;

use crate::error::{PipelineError, PipelineResult};
use crate::models::{required_columns, Assignment, EMP_ID_PREFIX};
use crate::parser::SheetData;
use melt::cell_text;

/// Result of one pipeline run.
///
/// `assignments` is the output table; the counters describe what happened to
/// the melted rows. Dropped rows are expected data cleaning, not failures:
/// callers display the counts, never warnings.
#[derive(Debug, Clone)]
pub struct MapResult {
    /// The long-format output table.
    pub assignments: Vec<Assignment>,
    /// Number of input roster rows.
    pub input_rows: usize,
    /// Number of melted (input row, role) combinations.
    pub melted_rows: usize,
    /// Melted rows dropped for a missing or non-numeric employee id.
    pub dropped_rows: usize,
}

/// Run the full reshape pipeline on a parsed roster sheet.
///
/// Fails on structural problems only: absent required columns (all missing
/// labels are reported at once) or a sheet with no data rows.
pub fn map_roster(sheet: &SheetData) -> PipelineResult<MapResult> {
    let missing = missing_columns(&sheet.headers);
    if !missing.is_empty() {
        return Err(PipelineError::MissingColumns { columns: missing });
    }
    if sheet.rows.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let melted = melt(&sheet.rows);
    debug!(
        "melted {} roster rows into {} role rows",
        sheet.rows.len(),
        melted.len()
    );

    let melted_rows = melted.len();
    let mut assignments = Vec::new();
    let mut dropped_rows = 0;

    for row in melted {
        match normalize_emp_id(&row.emp_id) {
            Some(emp_id) if is_all_digits(&emp_id) => {
                assignments.push(synthesize(row, emp_id));
            }
            _ => dropped_rows += 1,
        }
    }

    debug!(
        "kept {} assignments, dropped {} rows without a usable employee id",
        assignments.len(),
        dropped_rows
    );

    Ok(MapResult {
        assignments,
        input_rows: sheet.rows.len(),
        melted_rows,
        dropped_rows,
    })
}

/// Required column labels absent from `headers`, in canonical order.
pub fn missing_columns(headers: &[String]) -> Vec<String> {
    required_columns()
        .into_iter()
        .filter(|required| !headers.iter().any(|h| h == required))
        .map(String::from)
        .collect()
}

/// Authoritative gate for the filter stage: normalization already yields
/// digit strings for everything except negative ids, whose sign is rejected
/// here.
fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Build the output row: compose `Role_Emp_ID` and `Unique code`, then
/// collapse the ZH slot into the ZM output bucket.
fn synthesize(row: MeltedRow, emp_id: String) -> Assignment {
    let branch_id = cell_text(Some(&row.branch_id));
    let role_emp_id = format!("{EMP_ID_PREFIX}{emp_id}");
    let unique_code = format!("{role_emp_id}{branch_id}");

    Assignment {
        branch: row.branch,
        branch_id,
        state: row.state,
        name: row.name,
        emp_id,
        role: row.role.collapse(),
        role_emp_id,
        unique_code,
    }
}
