//! Instrument classification for raw portfolio symbols.
//!
//! An imported symbol is either a plain equity ticker ("AAPL") or an option
//! contract written in the broker text format "TICKER MM/DD/YYYY STRIKE C"
//! (call) / "TICKER MM/DD/YYYY STRIKE P" (put).

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

lazy_static! {
    /// Shape of an option contract symbol: TICKER MM/DD/YYYY STRIKE C|P
    static ref OPTION_SYMBOL: Regex =
        Regex::new(r"^[A-Z]+\s+\d{2}/\d{2}/\d{4}\s+\d+\.?\d*\s+[CP]$")
            .expect("option symbol regex is valid");
}

/// Call or put side of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionKind {
    Call,
    Put,
}

/// Parsed form of a raw symbol string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instrument {
    /// Exchange-traded security, identified by its ticker.
    Equity {
        /// Uppercase ticker symbol (e.g. "AAPL")
        symbol: String,
    },
    /// Listed option contract on an equity underlying.
    OptionContract {
        /// Uppercase underlying ticker (e.g. "QQQ")
        underlying: String,
        /// Contract expiration date
        expiration: NaiveDate,
        /// Strike price
        strike: Decimal,
        /// Call or put
        kind: OptionKind,
    },
}

impl Instrument {
    /// Classifies a raw symbol string.
    ///
    /// Anything not matching the option contract shape is treated as an
    /// equity ticker. A symbol that matches the shape but carries an invalid
    /// calendar date or strike fails with [`MarketDataError::InvalidOptionSymbol`].
    pub fn parse(raw: &str) -> Result<Self, MarketDataError> {
        let raw = raw.trim();
        if !OPTION_SYMBOL.is_match(raw) {
            return Ok(Instrument::Equity {
                symbol: raw.to_string(),
            });
        }

        let mut parts = raw.split_whitespace();
        let underlying = parts.next().unwrap_or_default().to_string();
        let date_str = parts.next().unwrap_or_default();
        let strike_str = parts.next().unwrap_or_default();
        let side = parts.next().unwrap_or_default();

        let expiration = NaiveDate::parse_from_str(date_str, "%m/%d/%Y")
            .map_err(|_| MarketDataError::InvalidOptionSymbol(raw.to_string()))?;
        let strike = strike_str
            .parse::<Decimal>()
            .map_err(|_| MarketDataError::InvalidOptionSymbol(raw.to_string()))?;
        let kind = match side {
            "C" => OptionKind::Call,
            "P" => OptionKind::Put,
            _ => return Err(MarketDataError::InvalidOptionSymbol(raw.to_string())),
        };

        Ok(Instrument::OptionContract {
            underlying,
            expiration,
            strike,
            kind,
        })
    }

    /// Grouping key for allocation views: the underlying ticker for options,
    /// the symbol itself for equities.
    pub fn underlying_ticker(&self) -> &str {
        match self {
            Instrument::Equity { symbol } => symbol,
            Instrument::OptionContract { underlying, .. } => underlying,
        }
    }

    /// Whether this instrument is an option contract.
    pub fn is_option(&self) -> bool {
        matches!(self, Instrument::OptionContract { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn plain_ticker_is_equity() {
        let instrument = Instrument::parse("AAPL").unwrap();
        assert_eq!(
            instrument,
            Instrument::Equity {
                symbol: "AAPL".to_string()
            }
        );
        assert_eq!(instrument.underlying_ticker(), "AAPL");
        assert!(!instrument.is_option());
    }

    #[test]
    fn option_symbol_parses() {
        let instrument = Instrument::parse("QQQ 01/15/2027 380.00 C").unwrap();
        assert_eq!(
            instrument,
            Instrument::OptionContract {
                underlying: "QQQ".to_string(),
                expiration: NaiveDate::from_ymd_opt(2027, 1, 15).unwrap(),
                strike: dec!(380.00),
                kind: OptionKind::Call,
            }
        );
        assert_eq!(instrument.underlying_ticker(), "QQQ");
        assert!(instrument.is_option());
    }

    #[test]
    fn put_side_parses() {
        let instrument = Instrument::parse("SPY 06/20/2026 450 P").unwrap();
        match instrument {
            Instrument::OptionContract { kind, .. } => assert_eq!(kind, OptionKind::Put),
            other => panic!("expected option contract, got {:?}", other),
        }
    }

    #[test]
    fn invalid_calendar_date_is_rejected() {
        let err = Instrument::parse("QQQ 13/45/2027 380.00 C").unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidOptionSymbol(_)));
    }

    #[test]
    fn near_miss_shapes_fall_back_to_equity() {
        // Lowercase side letter or missing strike doesn't match the shape
        for raw in ["QQQ 01/15/2027 380.00 X", "BRK.B", "BTC-USD"] {
            assert!(!Instrument::parse(raw).unwrap().is_option(), "{}", raw);
        }
    }
}
