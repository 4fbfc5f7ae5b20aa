//! Allocation model for the proportional (pie) view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the proportional allocation view.
///
/// Slices are grouped by underlying ticker, so option positions merge with
/// their underlying equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    /// Grouping label: the underlying ticker
    pub label: String,
    /// Combined market value for the group
    pub value: Decimal,
    /// Share of total portfolio value (0-100), rounded to 2 decimal places
    pub percentage: Decimal,
}
