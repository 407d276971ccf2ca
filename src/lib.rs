//! # Rolemap - branch roster reshaping
//!
//! Rolemap reshapes a wide-format branch roster spreadsheet (one row per
//! branch, one name/id column pair per organizational role) into a
//! long-format assignment table (one row per branch, role, person), ready to
//! join against an HR or reporting system.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Roster file  │────▶│   Parser   │────▶│   Pipeline   │────▶│   Export     │
//! │ (xlsx / csv) │     │ (auto-enc) │     │ (melt+keys)  │     │ (xlsx / csv) │
//! └──────────────┘     └────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The pipeline itself is a pure function from table to table; the parser and
//! export modules are thin collaborators around it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rolemap::{map_roster, parse_sheet_file};
//!
//! fn main() {
//!     let sheet = parse_sheet_file("roster.xlsx").unwrap();
//!     let result = map_roster(&sheet).unwrap();
//!     println!("{} assignments", result.assignments.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Role, Assignment, column constants)
//! - [`parser`] - CSV/XLSX parsing with auto-detection
//! - [`pipeline`] - Melt, filter, key synthesis, role collapse
//! - [`export`] - XLSX/CSV output

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod pipeline;

// Output
pub mod export;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ExportError, PipelineError, SheetError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{required_columns, Assignment, Role, EMP_ID_PREFIX, OUTPUT_COLUMNS};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    detect_delimiter, detect_encoding, parse_csv_bytes, parse_sheet_bytes, parse_sheet_file,
    parse_xlsx_file, SheetData, SheetFormat,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{map_roster, melt, missing_columns, normalize_emp_id, MapResult, MeltedRow};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{
    assignments_to_csv_string, write_assignments_csv, write_assignments_csv_file,
    write_assignments_xlsx,
};
