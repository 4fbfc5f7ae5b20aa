//! Valuation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holding with its resolved price, value and share of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuedHolding {
    pub symbol: String,
    pub total_shares: Decimal,
    /// None when price resolution failed. Kept distinct from a zero price
    /// so an unpriced holding is never mistaken for a worthless one.
    pub unit_price: Option<Decimal>,
    /// total_shares x unit_price, 0 when the price is unresolved
    pub market_value: Decimal,
    /// Share of total portfolio value in percent; 0 when the total is 0
    pub percentage: Decimal,
}

/// Valuation outcome for the whole portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    /// Holdings in first-seen symbol order
    pub holdings: Vec<ValuedHolding>,
    /// Exact sum of holding values (unpriced holdings contribute 0)
    pub total_value: Decimal,
    /// Symbols whose price could not be resolved, in first-seen order
    pub failed_symbols: Vec<String>,
}
