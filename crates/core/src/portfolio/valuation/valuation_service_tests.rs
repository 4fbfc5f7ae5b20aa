//! Unit tests for the valuation service.

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use folioscope_market_data::{PriceQuote, ResolvedPrices};

use crate::portfolio::holdings::AggregatedHolding;

use super::*;

fn holding(symbol: &str, total_shares: Decimal) -> AggregatedHolding {
    AggregatedHolding {
        symbol: symbol.to_string(),
        total_shares,
    }
}

fn quote(price: Decimal) -> PriceQuote {
    PriceQuote {
        timestamp: Utc::now(),
        price,
        currency: "USD".to_string(),
        source: "FIXED".to_string(),
    }
}

fn prices(entries: &[(&str, Decimal)], failures: &[&str]) -> ResolvedPrices {
    let mut resolved = ResolvedPrices::new();
    for (symbol, price) in entries {
        resolved.insert_quote(symbol.to_string(), quote(*price));
    }
    for symbol in failures {
        resolved.insert_failure(symbol.to_string(), format!("Symbol not found: {}", symbol));
    }
    resolved
}

#[test]
fn single_priced_holding_takes_the_whole_portfolio() {
    let valuation = value_holdings(
        &[holding("AAPL", dec!(15))],
        &prices(&[("AAPL", dec!(150))], &[]),
    );

    assert_eq!(valuation.total_value, dec!(2250));
    let aapl = &valuation.holdings[0];
    assert_eq!(aapl.unit_price, Some(dec!(150)));
    assert_eq!(aapl.market_value, dec!(2250));
    assert_eq!(aapl.percentage, dec!(100));
    assert!(valuation.failed_symbols.is_empty());
}

#[test]
fn failed_symbol_is_flagged_and_contributes_zero() {
    let valuation = value_holdings(
        &[holding("AAPL", dec!(10)), holding("GOOGL", dec!(5))],
        &prices(&[("AAPL", dec!(150))], &["GOOGL"]),
    );

    assert_eq!(valuation.total_value, dec!(1500));
    assert_eq!(valuation.failed_symbols, vec!["GOOGL".to_string()]);

    let aapl = &valuation.holdings[0];
    assert_eq!(aapl.market_value, dec!(1500));
    assert_eq!(aapl.percentage, dec!(100));

    let googl = &valuation.holdings[1];
    assert_eq!(googl.unit_price, None);
    assert_eq!(googl.market_value, Decimal::ZERO);
    assert_eq!(googl.percentage, Decimal::ZERO);
}

#[test]
fn all_failures_yield_zero_total_and_zero_percentages() {
    let valuation = value_holdings(
        &[holding("AAPL", dec!(10)), holding("GOOGL", dec!(5))],
        &prices(&[], &["AAPL", "GOOGL"]),
    );

    assert_eq!(valuation.total_value, Decimal::ZERO);
    assert_eq!(valuation.failed_symbols.len(), 2);
    for holding in &valuation.holdings {
        assert_eq!(holding.percentage, Decimal::ZERO);
    }
}

#[test]
fn percentages_sum_to_one_hundred() {
    let valuation = value_holdings(
        &[
            holding("AAPL", dec!(10)),
            holding("GOOGL", dec!(5)),
            holding("MSFT", dec!(7)),
        ],
        &prices(
            &[
                ("AAPL", dec!(150)),
                ("GOOGL", dec!(140)),
                ("MSFT", dec!(310)),
            ],
            &[],
        ),
    );

    let sum: Decimal = valuation.holdings.iter().map(|h| h.percentage).sum();
    assert!(
        (sum - dec!(100)).abs() < dec!(0.0001),
        "percentages sum to {}",
        sum
    );
}

#[test]
fn first_seen_order_is_preserved() {
    let valuation = value_holdings(
        &[holding("ZM", dec!(1)), holding("AAPL", dec!(1))],
        &prices(&[("ZM", dec!(60)), ("AAPL", dec!(150))], &[]),
    );

    let symbols: Vec<&str> = valuation.holdings.iter().map(|h| h.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["ZM", "AAPL"]);
}

#[test]
fn empty_portfolio_values_to_empty() {
    let valuation = value_holdings(&[], &prices(&[], &[]));
    assert!(valuation.holdings.is_empty());
    assert_eq!(valuation.total_value, Decimal::ZERO);
}
