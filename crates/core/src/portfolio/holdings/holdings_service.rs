//! Duplicate-symbol aggregation.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::imports::HoldingInput;

use super::AggregatedHolding;

/// Merges input rows sharing a symbol into one position per symbol.
///
/// Output order is the first occurrence of each symbol in the input.
/// Summation is exact; no rounding happens here.
pub fn aggregate(inputs: &[HoldingInput]) -> Vec<AggregatedHolding> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    for input in inputs {
        match totals.entry(input.symbol.clone()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += input.shares,
            Entry::Vacant(entry) => {
                order.push(input.symbol.clone());
                entry.insert(input.shares);
            }
        }
    }

    order
        .into_iter()
        .map(|symbol| {
            let total_shares = totals.remove(&symbol).unwrap_or_default();
            AggregatedHolding {
                symbol,
                total_shares,
            }
        })
        .collect()
}
