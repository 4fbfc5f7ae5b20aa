//! Fixed-price provider for tests and offline runs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::PriceQuote;
use crate::provider::PriceProvider;

/// A provider backed by a static symbol -> price map.
///
/// Unknown symbols fail with [`MarketDataError::SymbolNotFound`], which makes
/// this a convenient stand-in for exercising partial-failure paths.
#[derive(Debug, Clone, Default)]
pub struct FixedPriceProvider {
    prices: HashMap<String, Decimal>,
}

impl FixedPriceProvider {
    pub fn new(prices: HashMap<String, Decimal>) -> Self {
        Self { prices }
    }

    /// Adds or replaces a price entry. Symbols are stored uppercase.
    pub fn with_price(mut self, symbol: &str, price: Decimal) -> Self {
        self.prices.insert(symbol.to_uppercase(), price);
        self
    }
}

#[async_trait]
impl PriceProvider for FixedPriceProvider {
    fn id(&self) -> &'static str {
        "FIXED"
    }

    async fn latest_price(&self, symbol: &str) -> Result<PriceQuote, MarketDataError> {
        match self.prices.get(symbol) {
            Some(price) => Ok(PriceQuote {
                timestamp: Utc::now(),
                price: *price,
                currency: "USD".to_string(),
                source: self.id().to_string(),
            }),
            None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        }
    }
}
