//! Attaches resolved prices to aggregated holdings and computes value and
//! percentage share.

use log::debug;
use rust_decimal::Decimal;

use folioscope_market_data::ResolvedPrices;

use crate::portfolio::holdings::AggregatedHolding;

use super::{PortfolioValuation, ValuedHolding};

/// Values the aggregated holdings against the resolved price map.
///
/// Cannot fail: resolution failures were already recorded per symbol and
/// simply produce unpriced holdings with value 0. Percentages are left at 0
/// when the portfolio total is 0, so an all-failed run still yields a
/// well-formed result.
pub fn value_holdings(
    aggregated: &[AggregatedHolding],
    prices: &ResolvedPrices,
) -> PortfolioValuation {
    let mut failed_symbols = Vec::new();

    let mut holdings: Vec<ValuedHolding> = aggregated
        .iter()
        .map(|holding| match prices.quote(&holding.symbol) {
            Some(quote) => ValuedHolding {
                symbol: holding.symbol.clone(),
                total_shares: holding.total_shares,
                unit_price: Some(quote.price),
                market_value: holding.total_shares * quote.price,
                percentage: Decimal::ZERO,
            },
            None => {
                failed_symbols.push(holding.symbol.clone());
                ValuedHolding {
                    symbol: holding.symbol.clone(),
                    total_shares: holding.total_shares,
                    unit_price: None,
                    market_value: Decimal::ZERO,
                    percentage: Decimal::ZERO,
                }
            }
        })
        .collect();

    let total_value: Decimal = holdings.iter().map(|h| h.market_value).sum();

    if total_value > Decimal::ZERO {
        for holding in &mut holdings {
            holding.percentage = holding.market_value / total_value * Decimal::ONE_HUNDRED;
        }
    }

    debug!(
        "Valued {} holdings, total {} ({} unpriced)",
        holdings.len(),
        total_value,
        failed_symbols.len()
    );

    PortfolioValuation {
        holdings,
        total_value,
        failed_symbols,
    }
}
