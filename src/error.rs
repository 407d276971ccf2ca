//! Error types for the rolemap pipeline.
//!
//! This module defines the error hierarchy used across the crate:
//!
//! - [`SheetError`] - input sheet reading and parsing errors
//! - [`PipelineError`] - top-level reshape errors (structural failures)
//! - [`ExportError`] - output serialization errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Sheet Reading Errors
// =============================================================================

/// Errors while reading or parsing an input sheet (CSV or XLSX).
#[derive(Debug, Error)]
pub enum SheetError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode content.
    #[error("Failed to decode content as {0}")]
    Encoding(String),

    /// Failed to open or read a workbook.
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// Workbook contains no worksheets.
    #[error("Workbook has no worksheets")]
    NoSheets,

    /// Sheet has no rows at all.
    #[error("Sheet is empty")]
    Empty,

    /// Header row contains no usable labels.
    #[error("No headers found in sheet")]
    NoHeaders,
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level reshape pipeline errors.
///
/// This is the error type returned by [`crate::pipeline::map_roster`].
/// A missing or invalid employee id is NOT an error; those rows are
/// filtered out. Only structural problems surface here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input sheet could not be read.
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// One or more required roster columns are absent.
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The roster has a header but no data rows.
    #[error("Roster has no data rows")]
    EmptyInput,
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing the output table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook writer error.
    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV writer error.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for sheet reading operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
