//! Aggregated holding model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One symbol's combined position after merging duplicate input rows.
///
/// Invariant: one record per distinct symbol; `total_shares` is positive
/// because every contributing row was validated to be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedHolding {
    /// Uppercase ticker or option contract symbol, unique in the run
    pub symbol: String,
    /// Exact sum of shares across all input rows with this symbol
    pub total_shares: Decimal,
}
