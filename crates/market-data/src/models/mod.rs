//! Market data models.
//!
//! - [`Instrument`]: parsed form of a raw symbol (equity or option contract)
//! - [`PriceQuote`]: a current unit price from a provider

mod instrument;
mod quote;

pub use instrument::{Instrument, OptionKind};
pub use quote::PriceQuote;
