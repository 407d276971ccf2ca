//! Sheet parsing: CSV and XLSX rosters into in-memory rows.
//!
//! Each row becomes a JSON object keyed by header label. CSV input gets
//! encoding and delimiter auto-detection; XLSX input keeps native cell types.
//! No roster-specific logic here; the pipeline does not care where the
//! rows came from.

use log::debug;
use serde_json::{json, Map, Value};
use std::path::Path;

use crate::error::{SheetError, SheetResult};

mod xlsx;

pub use xlsx::parse_xlsx_file;

/// A fully materialized input sheet.
#[derive(Debug, Clone)]
pub struct SheetData {
    /// Parsed rows as JSON objects, one per non-empty data line.
    pub rows: Vec<Value>,
    /// Column headers in source order.
    pub headers: Vec<String>,
    /// How the sheet was read.
    pub format: SheetFormat,
}

/// Source format metadata, for display and diagnostics only.
#[derive(Debug, Clone)]
pub enum SheetFormat {
    Csv { encoding: String, delimiter: char },
    Xlsx { sheet: String },
}

impl SheetFormat {
    /// Short human-readable description for status output.
    pub fn describe(&self) -> String {
        match self {
            SheetFormat::Csv { encoding, delimiter } => {
                let delim = match delimiter {
                    '\t' => "\\t".to_string(),
                    c => c.to_string(),
                };
                format!("CSV ({encoding}, delimiter '{delim}')")
            }
            SheetFormat::Xlsx { sheet } => format!("XLSX (sheet '{sheet}')"),
        }
    }
}

/// Parse a roster file, dispatching on extension: `.xlsx`/`.xlsm` are read as
/// workbooks, everything else goes through the CSV auto-detection path.
pub fn parse_sheet_file<P: AsRef<Path>>(path: P) -> SheetResult<SheetData> {
    let path = path.as_ref();
    let is_workbook = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "xlsx" | "xlsm"))
        .unwrap_or(false);

    if is_workbook {
        parse_xlsx_file(path)
    } else {
        let bytes = std::fs::read(path)?;
        parse_sheet_bytes(&bytes)
    }
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_sheet_bytes(bytes: &[u8]) -> SheetResult<SheetData> {
    parse_csv_bytes(bytes, None)
}

/// Parse CSV bytes; `delimiter` overrides auto-detection when given.
pub fn parse_csv_bytes(bytes: &[u8], delimiter: Option<char>) -> SheetResult<SheetData> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    debug!("detected encoding {encoding}, delimiter {delimiter:?}");

    let (headers, rows) = parse_csv_str(&content, delimiter)?;
    Ok(SheetData {
        rows,
        headers,
        format: SheetFormat::Csv { encoding, delimiter },
    })
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the detected encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> SheetResult<String> {
    let decoded = match encoding.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => String::from_utf8_lossy(bytes),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0,
        other => return Err(SheetError::Encoding(other.to_string())),
    };
    Ok(decoded.to_string())
}

/// Detect the delimiter by counting candidate occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let candidates = [',', ';', '\t', '|'];
    let mut best = ',';
    let mut best_count = 0;

    for &sep in &candidates {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best = sep;
        }
    }

    best
}

/// Parse decoded CSV content: header line, then one JSON object per non-empty
/// data line. Missing trailing cells become empty strings; surplus cells are
/// ignored.
fn parse_csv_str(content: &str, delimiter: char) -> SheetResult<(Vec<String>, Vec<Value>)> {
    let mut lines = content.lines();

    let header_line = lines.next().ok_or(SheetError::Empty)?;
    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|s| s.trim().trim_matches('"').to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(SheetError::NoHeaders);
    }

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(delimiter).collect();
        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let cell = cells
                .get(i)
                .map(|s| s.trim().trim_matches('"'))
                .unwrap_or("");
            obj.insert(header.clone(), json!(cell));
        }
        rows.push(Value::Object(obj));
    }

    Ok((headers, rows))
}
