//! Holding import: header mapping and per-row validation.
//!
//! Header-level failures (missing Symbol/Shares columns) abort the import
//! with no partial result. Everything row-level is skipped with a collected
//! warning instead.

use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

use super::csv_parser::read_table;
use super::{HoldingInput, ImportResult, ImportWarning};

/// Required header column for the ticker symbol (matched case-insensitively).
pub const SYMBOL_COLUMN: &str = "Symbol";
/// Required header column for the share quantity (matched case-insensitively).
pub const SHARES_COLUMN: &str = "Shares";

/// Service that turns raw CSV bytes into validated holding inputs.
#[derive(Debug, Clone, Default)]
pub struct HoldingImportService;

impl HoldingImportService {
    pub fn new() -> Self {
        Self
    }

    /// Imports one CSV document.
    ///
    /// Returns the holdings in input order plus a warning for every skipped
    /// row. Fails only on header-level problems (unreadable/empty document,
    /// missing required columns).
    pub fn import(&self, content: &[u8]) -> Result<ImportResult> {
        let table = read_table(content)?;

        let missing: Vec<&str> = [SYMBOL_COLUMN, SHARES_COLUMN]
            .into_iter()
            .filter(|name| find_column(&table.headers, name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingColumn(missing.join(", ")).into());
        }
        // Presence checked above
        let symbol_idx = find_column(&table.headers, SYMBOL_COLUMN).unwrap_or(0);
        let shares_idx = find_column(&table.headers, SHARES_COLUMN).unwrap_or(0);

        let mut warnings = table.warnings;
        let mut holdings = Vec::with_capacity(table.rows.len());

        for (idx, row) in table.rows.iter().enumerate() {
            let row_no = idx + 1;

            let symbol = row
                .get(symbol_idx)
                .map(|s| s.trim().to_uppercase())
                .unwrap_or_default();
            if symbol.is_empty() {
                warnings.push(ImportWarning::for_row(row_no, "empty symbol"));
                continue;
            }

            let raw_shares = row.get(shares_idx).map(|s| s.trim()).unwrap_or_default();
            match parse_shares(raw_shares) {
                Some(shares) if shares > Decimal::ZERO => {
                    holdings.push(HoldingInput { symbol, shares });
                }
                Some(shares) => {
                    warnings.push(ImportWarning::for_row(
                        row_no,
                        format!("share count {} is not positive", shares),
                    ));
                }
                None => {
                    warnings.push(ImportWarning::for_row(
                        row_no,
                        format!("invalid share count '{}'", raw_shares),
                    ));
                }
            }
        }

        debug!(
            "Imported {} holdings ({} rows skipped)",
            holdings.len(),
            warnings.len()
        );

        Ok(ImportResult { holdings, warnings })
    }
}

/// Case-insensitive header lookup.
fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/// Parses a share count, tolerating scientific notation and thousands
/// separators.
fn parse_shares(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    raw.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
        .or_else(|| {
            let cleaned = raw.replace(',', "");
            if cleaned == raw {
                None
            } else {
                cleaned.parse::<Decimal>().ok()
            }
        })
}
