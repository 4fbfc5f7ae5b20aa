//! Report models - the terminal artifact of one pipeline run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::imports::ImportWarning;
use crate::portfolio::valuation::ValuedHolding;

/// Summary statistics over the valued portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Number of distinct positions
    pub positions: usize,
    /// Total portfolio value
    pub total_value: Decimal,
    /// total_value / positions, 0 for an empty portfolio
    pub average_value: Decimal,
}

/// Complete result of one pipeline run.
///
/// Holdings stay in first-seen symbol order. Every skipped row and every
/// unpriced symbol from the run is carried here; nothing is silently
/// dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub holdings: Vec<ValuedHolding>,
    pub total_value: Decimal,
    /// Symbols whose price could not be resolved, in first-seen order
    pub failed_symbols: Vec<String>,
    /// Rows skipped during import
    pub warnings: Vec<ImportWarning>,
    pub summary: PortfolioSummary,
}

/// One formatted row of the on-screen breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub symbol: String,
    pub shares: String,
    /// "$150.00", or "N/A" when the price is unresolved
    pub price: String,
    pub value: String,
    pub percentage: String,
}
