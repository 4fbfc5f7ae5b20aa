//! Import domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One validated CSV row: a position in a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingInput {
    /// Trimmed, uppercased ticker or option contract symbol
    pub symbol: String,
    /// Number of shares, strictly positive
    pub shares: Decimal,
}

/// A row (or structural issue) skipped during import.
///
/// Warnings are accumulated and surfaced alongside the report; they never
/// abort the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportWarning {
    /// 1-based data row index, when the issue maps to a single row
    pub row: Option<usize>,
    /// Why the row was skipped
    pub reason: String,
}

impl ImportWarning {
    pub fn for_row(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            reason: reason.into(),
        }
    }

    pub fn general(reason: impl Into<String>) -> Self {
        Self {
            row: None,
            reason: reason.into(),
        }
    }
}

/// Outcome of a successful import: ordered holdings plus skipped-row
/// warnings.
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub holdings: Vec<HoldingInput>,
    pub warnings: Vec<ImportWarning>,
}
