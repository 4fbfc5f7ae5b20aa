//! Price provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceQuote;

/// Trait for price providers.
///
/// Implement this trait to add support for a new price source. The provider
/// receives the raw uppercase symbol as imported (equity ticker or option
/// contract text) and is responsible for its own classification, timeouts
/// and retries. Failures are reported per symbol; the resolver never treats
/// them as fatal for the run.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// A constant string like "YAHOO" or "FIXED", used for logging and as
    /// the `source` on quotes.
    fn id(&self) -> &'static str;

    /// Fetch the current unit price for a symbol.
    ///
    /// Option contract prices must include the 100-share contract
    /// multiplier.
    async fn latest_price(&self, symbol: &str) -> Result<PriceQuote, MarketDataError>;
}
