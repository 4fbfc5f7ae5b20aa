//! Price quote model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A current unit price for one instrument.
///
/// For option contracts the price already includes the 100-share contract
/// multiplier, so `shares x price` is the position value for both equities
/// and options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Timestamp of the quote
    pub timestamp: DateTime<Utc>,

    /// Current unit price (required, positive)
    pub price: Decimal,

    /// Quote currency
    pub currency: String,

    /// Provider that produced the quote (e.g. "YAHOO", "FIXED")
    pub source: String,
}
