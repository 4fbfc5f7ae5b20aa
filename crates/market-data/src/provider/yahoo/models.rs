//! Yahoo Finance API response models.
//!
//! These models parse the v7 options-chain endpoint responses. Only the
//! fields the provider reads are declared; the endpoint returns many more.

use serde::Deserialize;

/// Top-level response from `/v7/finance/options/{symbol}`.
#[derive(Debug, Deserialize)]
pub(crate) struct OptionChainResponse {
    #[serde(rename = "optionChain")]
    pub option_chain: OptionChainEnvelope,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OptionChainEnvelope {
    #[serde(default)]
    pub result: Vec<OptionChainResult>,
}

/// Option chain for one underlying.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptionChainResult {
    /// All listed expirations, as unix timestamps
    #[serde(default)]
    pub expiration_dates: Vec<i64>,
    /// Contract quotes for the requested (or nearest) expiration
    #[serde(default)]
    pub options: Vec<OptionQuoteSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptionQuoteSet {
    pub expiration_date: i64,
    #[serde(default)]
    pub calls: Vec<ContractQuote>,
    #[serde(default)]
    pub puts: Vec<ContractQuote>,
}

/// A single listed contract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContractQuote {
    pub strike: f64,
    pub last_price: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
}

impl ContractQuote {
    /// Last traded price when present and positive, otherwise the bid/ask
    /// midpoint, otherwise whichever side is quoted.
    pub(crate) fn usable_price(&self) -> Option<f64> {
        if let Some(last) = self.last_price {
            if last > 0.0 {
                return Some(last);
            }
        }
        let bid = self.bid.unwrap_or(0.0);
        let ask = self.ask.unwrap_or(0.0);
        if bid > 0.0 && ask > 0.0 {
            Some((bid + ask) / 2.0)
        } else if bid > 0.0 {
            Some(bid)
        } else if ask > 0.0 {
            Some(ask)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(last: Option<f64>, bid: Option<f64>, ask: Option<f64>) -> ContractQuote {
        ContractQuote {
            strike: 100.0,
            last_price: last,
            bid,
            ask,
        }
    }

    #[test]
    fn prefers_last_traded_price() {
        assert_eq!(
            contract(Some(3.5), Some(3.0), Some(4.0)).usable_price(),
            Some(3.5)
        );
    }

    #[test]
    fn zero_last_price_falls_back_to_midpoint() {
        assert_eq!(
            contract(Some(0.0), Some(3.0), Some(4.0)).usable_price(),
            Some(3.5)
        );
    }

    #[test]
    fn one_sided_quote_is_used() {
        assert_eq!(contract(None, Some(2.0), None).usable_price(), Some(2.0));
        assert_eq!(contract(None, None, Some(2.5)).usable_price(), Some(2.5));
    }

    #[test]
    fn no_price_data_is_none() {
        assert_eq!(contract(None, None, None).usable_price(), None);
        assert_eq!(contract(Some(0.0), None, Some(0.0)).usable_price(), None);
    }
}
