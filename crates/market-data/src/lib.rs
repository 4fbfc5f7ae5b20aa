//! Folioscope Market Data Crate
//!
//! Provider-agnostic price fetching for the portfolio pipeline.
//!
//! # Overview
//!
//! The pipeline hands this crate a set of distinct uppercase symbols and
//! gets back a deterministic symbol -> price-or-failure mapping:
//!
//! ```text
//! +------------------+     +------------------+
//! |   Symbol set     | --> |    Instrument    |  (equity | option contract)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  PriceResolver   |  (one lookup per symbol)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  PriceProvider   |  (Yahoo, fixed fixture)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ResolvedPrices  |  (prices + failures)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Instrument`] - parsed symbol: equity ticker or option contract
//! - [`PriceQuote`] - a current unit price with source metadata
//! - [`PriceProvider`] - trait a price source implements
//! - [`PriceResolverTrait`] / [`PriceResolver`] - symbol-set resolution
//! - [`ResolvedPrices`] - merged per-symbol outcome

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::MarketDataError;
pub use models::{Instrument, OptionKind, PriceQuote};
pub use provider::{FixedPriceProvider, PriceProvider, YahooProvider};
pub use resolver::{PriceResolver, PriceResolverTrait, ResolvedPrices};
