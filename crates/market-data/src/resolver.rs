//! Fan-out price resolution for a set of distinct symbols.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::models::PriceQuote;
use crate::provider::PriceProvider;

/// Outcome of resolving a set of distinct symbols.
///
/// Every requested symbol lands in exactly one of the two maps. Results are
/// merged by symbol, never by arrival order, so downstream output is
/// deterministic regardless of response timing.
#[derive(Debug, Clone, Default)]
pub struct ResolvedPrices {
    prices: HashMap<String, PriceQuote>,
    failures: BTreeMap<String, String>,
}

impl ResolvedPrices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_quote(&mut self, symbol: String, quote: PriceQuote) {
        self.prices.insert(symbol, quote);
    }

    pub fn insert_failure(&mut self, symbol: String, reason: String) {
        self.failures.insert(symbol, reason);
    }

    /// The resolved quote for a symbol, if resolution succeeded.
    pub fn quote(&self, symbol: &str) -> Option<&PriceQuote> {
        self.prices.get(symbol)
    }

    /// The failure reason for a symbol, if resolution failed.
    pub fn failure(&self, symbol: &str) -> Option<&str> {
        self.failures.get(symbol).map(String::as_str)
    }

    /// Symbol -> reason for every failed resolution, ordered by symbol.
    pub fn failures(&self) -> &BTreeMap<String, String> {
        &self.failures
    }

    pub fn resolved_count(&self) -> usize {
        self.prices.len()
    }
}

/// Trait for price resolution over a symbol set.
///
/// The pipeline depends on this trait rather than a concrete resolver so
/// tests can substitute deterministic fixtures.
#[async_trait]
pub trait PriceResolverTrait: Send + Sync {
    /// Resolves current prices for the given distinct symbols.
    ///
    /// One provider lookup per symbol. Per-symbol failures are recorded,
    /// not propagated; total failure simply yields all-failures.
    async fn resolve(&self, symbols: &[String]) -> ResolvedPrices;
}

/// Resolver that fans lookups out to a single [`PriceProvider`].
///
/// Lookups for distinct symbols run concurrently; this is a latency
/// optimization only, the merged result does not depend on completion order.
pub struct PriceResolver {
    provider: Arc<dyn PriceProvider>,
}

impl PriceResolver {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl PriceResolverTrait for PriceResolver {
    async fn resolve(&self, symbols: &[String]) -> ResolvedPrices {
        let lookups = symbols.iter().map(|symbol| {
            let provider = Arc::clone(&self.provider);
            async move {
                let outcome = provider.latest_price(symbol).await;
                (symbol.clone(), outcome)
            }
        });

        let mut resolved = ResolvedPrices::new();
        for (symbol, outcome) in join_all(lookups).await {
            match outcome {
                Ok(quote) => resolved.insert_quote(symbol, quote),
                Err(e) => {
                    warn!("Price resolution failed for {}: {}", symbol, e);
                    resolved.insert_failure(symbol, e.to_string());
                }
            }
        }

        debug!(
            "Resolved {} of {} symbols",
            resolved.resolved_count(),
            symbols.len()
        );
        resolved
    }
}
