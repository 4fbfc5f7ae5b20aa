//! End-to-end pipeline: parse -> aggregate -> resolve -> value -> report.

use std::sync::Arc;

use log::debug;

use folioscope_market_data::PriceResolverTrait;

use crate::errors::Result;
use crate::imports::HoldingImportService;
use crate::portfolio::holdings::aggregate;
use crate::portfolio::valuation::value_holdings;
use crate::reports::{build_report, PortfolioReport};

/// Runs the whole pipeline over one CSV document.
///
/// The price resolver is injected so runs are reproducible in tests.
/// Each call is one self-contained run; no state survives between calls.
pub struct PortfolioAnalyzer {
    import_service: HoldingImportService,
    resolver: Arc<dyn PriceResolverTrait>,
}

impl PortfolioAnalyzer {
    pub fn new(resolver: Arc<dyn PriceResolverTrait>) -> Self {
        Self {
            import_service: HoldingImportService::new(),
            resolver,
        }
    }

    /// Analyzes one uploaded CSV document.
    ///
    /// Header-level validation failures abort with an error before any
    /// price lookup. Row-level skips and per-symbol price failures surface
    /// on the returned report; a report is always produced once the header
    /// validates, even if every row or price failed.
    pub async fn analyze(&self, csv: &[u8]) -> Result<PortfolioReport> {
        let import = self.import_service.import(csv)?;
        let aggregated = aggregate(&import.holdings);

        // One resolution per distinct symbol, not per row
        let symbols: Vec<String> = aggregated.iter().map(|h| h.symbol.clone()).collect();
        debug!("Resolving prices for {} distinct symbols", symbols.len());
        let prices = self.resolver.resolve(&symbols).await;

        let valuation = value_holdings(&aggregated, &prices);
        Ok(build_report(valuation, import.warnings))
    }
}
