//! Proportional allocation grouped by underlying ticker.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use folioscope_market_data::Instrument;

use crate::portfolio::valuation::PortfolioValuation;

use super::AllocationSlice;

/// Builds the pie-chart slices for a valued portfolio.
///
/// Holdings are grouped by [`Instrument::underlying_ticker`], percentages
/// are recomputed over the grouped values and slices are sorted by value
/// descending. Zero-value slices (unpriced symbols) are included unless
/// `exclude_zero` is set.
pub fn allocate(valuation: &PortfolioValuation, exclude_zero: bool) -> Vec<AllocationSlice> {
    let total = valuation.total_value;

    let mut order: Vec<String> = Vec::new();
    let mut values: HashMap<String, Decimal> = HashMap::new();

    for holding in &valuation.holdings {
        let label = group_label(&holding.symbol);
        match values.entry(label) {
            Entry::Occupied(mut entry) => *entry.get_mut() += holding.market_value,
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(holding.market_value);
            }
        }
    }

    let mut slices: Vec<AllocationSlice> = order
        .into_iter()
        .map(|label| {
            let value = values.remove(&label).unwrap_or_default();
            let percentage = if total > Decimal::ZERO {
                (value / total * dec!(100)).round_dp(2)
            } else {
                Decimal::ZERO
            };
            AllocationSlice {
                label,
                value,
                percentage,
            }
        })
        .collect();

    if exclude_zero {
        slices.retain(|slice| slice.value > Decimal::ZERO);
    }

    // Stable sort keeps first-seen order among equal values
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

/// The underlying ticker for options, the symbol itself otherwise.
/// A malformed option-shaped symbol stays its own group.
fn group_label(symbol: &str) -> String {
    Instrument::parse(symbol)
        .map(|instrument| instrument.underlying_ticker().to_string())
        .unwrap_or_else(|_| symbol.to_string())
}
