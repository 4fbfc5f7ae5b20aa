//! Portfolio pipeline stages: aggregation, valuation, allocation and the
//! end-to-end analyzer.

pub mod allocation;
pub mod analyzer;
pub mod holdings;
pub mod valuation;

pub use allocation::{allocate, AllocationSlice};
pub use analyzer::PortfolioAnalyzer;
pub use holdings::{aggregate, AggregatedHolding};
pub use valuation::{value_holdings, PortfolioValuation, ValuedHolding};
