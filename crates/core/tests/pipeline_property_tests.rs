//! Property-based integration tests for the portfolio pipeline.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use chrono::Utc;
use proptest::collection::vec;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

use folioscope_core::imports::HoldingInput;
use folioscope_core::portfolio::{aggregate, value_holdings};
use folioscope_market_data::{PriceQuote, ResolvedPrices};

// =============================================================================
// Generators
// =============================================================================

const SYMBOLS: &[&str] = &["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "QQQ", "SPY"];

/// Generates a random holding row: a symbol from a small pool and a
/// positive share count with two decimal places.
fn arb_holding() -> impl Strategy<Value = HoldingInput> {
    (0..SYMBOLS.len(), 1u64..1_000_000).prop_map(|(idx, cents)| HoldingInput {
        symbol: SYMBOLS[idx].to_string(),
        shares: Decimal::new(cents as i64, 2),
    })
}

/// Generates a positive price with two decimal places.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1u64..10_000_00).prop_map(|cents| Decimal::new(cents as i64, 2))
}

fn quote(price: Decimal) -> PriceQuote {
    PriceQuote {
        timestamp: Utc::now(),
        price,
        currency: "USD".to_string(),
        source: "FIXED".to_string(),
    }
}

/// Resolves every distinct symbol with a generated price.
fn resolve_all(inputs: &[HoldingInput], prices: &[Decimal]) -> ResolvedPrices {
    let mut resolved = ResolvedPrices::new();
    let mut next = 0usize;
    for input in inputs {
        if resolved.quote(&input.symbol).is_none() {
            let price = prices[next % prices.len()];
            resolved.insert_quote(input.symbol.clone(), quote(price));
            next += 1;
        }
    }
    resolved
}

/// Resolves nothing: every symbol fails.
fn resolve_none(inputs: &[HoldingInput]) -> ResolvedPrices {
    let mut resolved = ResolvedPrices::new();
    for input in inputs {
        resolved.insert_failure(
            input.symbol.clone(),
            format!("Symbol not found: {}", input.symbol),
        );
    }
    resolved
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Aggregated totals equal the per-symbol sums over the input rows.
    #[test]
    fn aggregation_preserves_share_sums(inputs in vec(arb_holding(), 0..40)) {
        let aggregated = aggregate(&inputs);

        let mut expected: HashMap<&str, Decimal> = HashMap::new();
        for input in &inputs {
            *expected.entry(input.symbol.as_str()).or_default() += input.shares;
        }

        prop_assert_eq!(aggregated.len(), expected.len());
        for holding in &aggregated {
            prop_assert_eq!(holding.total_shares, expected[holding.symbol.as_str()]);
        }
    }

    /// Each symbol appears exactly once, in first-seen order.
    #[test]
    fn aggregation_keeps_first_seen_order(inputs in vec(arb_holding(), 0..40)) {
        let aggregated = aggregate(&inputs);

        let mut seen = Vec::new();
        for input in &inputs {
            if !seen.contains(&input.symbol.as_str()) {
                seen.push(input.symbol.as_str());
            }
        }
        let symbols: Vec<&str> = aggregated.iter().map(|h| h.symbol.as_str()).collect();
        prop_assert_eq!(symbols, seen);
    }

    /// With every price resolved, percentages sum to 100 within tolerance.
    #[test]
    fn percentages_sum_to_one_hundred(
        inputs in vec(arb_holding(), 1..40),
        prices in vec(arb_price(), 1..8),
    ) {
        let aggregated = aggregate(&inputs);
        let valuation = value_holdings(&aggregated, &resolve_all(&inputs, &prices));

        prop_assert!(valuation.total_value > Decimal::ZERO);
        let sum: Decimal = valuation.holdings.iter().map(|h| h.percentage).sum();
        let deviation = (sum - Decimal::ONE_HUNDRED).abs();
        prop_assert!(deviation < Decimal::new(1, 4), "sum was {}", sum);
    }

    /// With every price failed, the total is 0 and every percentage is 0.
    #[test]
    fn total_failure_yields_all_zero_percentages(inputs in vec(arb_holding(), 0..40)) {
        let aggregated = aggregate(&inputs);
        let valuation = value_holdings(&aggregated, &resolve_none(&inputs));

        prop_assert_eq!(valuation.total_value, Decimal::ZERO);
        prop_assert_eq!(valuation.failed_symbols.len(), valuation.holdings.len());
        for holding in &valuation.holdings {
            prop_assert_eq!(holding.percentage, Decimal::ZERO);
        }
    }

    /// Valuing the same input against the same prices twice is
    /// value-identical.
    #[test]
    fn valuation_is_idempotent(
        inputs in vec(arb_holding(), 0..40),
        prices in vec(arb_price(), 1..8),
    ) {
        let aggregated = aggregate(&inputs);
        let resolved = resolve_all(&inputs, &prices);

        let first = value_holdings(&aggregated, &resolved);
        let second = value_holdings(&aggregated, &resolved);

        prop_assert_eq!(first.holdings, second.holdings);
        prop_assert_eq!(first.total_value, second.total_value);
        prop_assert_eq!(first.failed_symbols, second.failed_symbols);
    }
}
