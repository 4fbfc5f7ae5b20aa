//! Holdings aggregation - one combined position per distinct symbol.

mod holdings_model;
mod holdings_service;

pub use holdings_model::AggregatedHolding;
pub use holdings_service::aggregate;
