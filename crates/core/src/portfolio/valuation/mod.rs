//! Valuation - combines aggregated quantities with resolved prices.

mod valuation_model;
mod valuation_service;

#[cfg(test)]
mod valuation_service_tests;

pub use valuation_model::{PortfolioValuation, ValuedHolding};
pub use valuation_service::value_holdings;
