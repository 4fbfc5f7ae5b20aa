//! CSV decoding with delimiter auto-detection.
//!
//! Produces headers plus string rows; schema mapping and per-row validation
//! happen in the import service.

use csv::ReaderBuilder;

use crate::errors::{Error, Result, ValidationError};

use super::ImportWarning;

/// A decoded tabular document: trimmed headers plus string data rows.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Structural problems that didn't prevent decoding (ragged rows,
    /// unreadable records, lossy re-encoding)
    pub warnings: Vec<ImportWarning>,
}

/// Decodes CSV bytes into headers and rows.
///
/// Handles a UTF-8 BOM, auto-detects the delimiter (`,`, `;` or tab),
/// drops fully-empty rows and normalizes ragged rows to the header width.
/// The first non-empty row is the header. Input with no rows at all is a
/// [`ValidationError::InvalidInput`].
pub fn read_table(content: &[u8]) -> Result<RawTable> {
    let mut warnings = Vec::new();

    let text = decode_utf8(content, &mut warnings);
    let delimiter = detect_delimiter(&text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false) // headers handled manually
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                records.push(row);
            }
            Err(e) => {
                warnings.push(ImportWarning::general(format!(
                    "unreadable record {}: {}",
                    idx + 1,
                    e
                )));
            }
        }
    }

    if records.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "CSV document is empty or contains no readable rows".to_string(),
        )));
    }

    let mut rows = records;
    let headers: Vec<String> = rows.remove(0).iter().map(|h| h.trim().to_string()).collect();

    // Normalize row widths to the header count
    let width = headers.len();
    for (idx, row) in rows.iter_mut().enumerate() {
        if row.len() < width {
            row.resize(width, String::new());
        } else if row.len() > width {
            warnings.push(ImportWarning::for_row(
                idx + 1,
                format!(
                    "row has {} columns, expected {}; extra columns ignored",
                    row.len(),
                    width
                ),
            ));
            row.truncate(width);
        }
    }

    Ok(RawTable {
        headers,
        rows,
        warnings,
    })
}

/// Strips a UTF-8 BOM and decodes, falling back to lossy conversion with a
/// collected warning.
fn decode_utf8(content: &[u8], warnings: &mut Vec<ImportWarning>) -> String {
    let content = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);
    match std::str::from_utf8(content) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warnings.push(ImportWarning::general(format!(
                "invalid UTF-8 at byte {}; some characters were replaced",
                e.valid_up_to()
            )));
            String::from_utf8_lossy(content).into_owned()
        }
    }
}

/// Picks the candidate delimiter with the most consistent column counts
/// across the first lines of the document.
fn detect_delimiter(text: &str) -> u8 {
    let lines: Vec<&str> = text.lines().take(10).collect();

    let mut best = b',';
    let mut best_score = 0usize;
    for candidate in [b',', b';', b'\t'] {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.matches(candidate as char).count())
            .collect();
        let first = counts.first().copied().unwrap_or(0);
        if first == 0 {
            continue;
        }
        let consistent = counts.iter().filter(|&&c| c == first).count();
        let score = first * consistent;
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }
    best
}
