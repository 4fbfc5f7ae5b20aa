//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching prices.
///
/// All variants are per-symbol failures from the pipeline's point of view:
/// the resolver records them against the offending symbol and the run
/// continues with the remaining holdings.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider does not know the requested symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but the provider returned no usable quote.
    #[error("No quote data available for {0}")]
    NoQuoteData(String),

    /// The symbol looks like an option contract but its fields don't parse.
    #[error("Invalid option symbol: {0}")]
    InvalidOptionSymbol(String),

    /// The option chain was fetched but the requested contract is missing
    /// or carries no usable price.
    #[error("Option contract not found: {symbol} ({detail})")]
    OptionNotFound {
        /// The full option symbol as imported
        symbol: String,
        /// What exactly was missing (strike, expiration, price data)
        detail: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
