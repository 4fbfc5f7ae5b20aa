//! Yahoo Finance price provider.
//!
//! Equity quotes go through the `yahoo_finance_api` library. Option
//! contracts are priced from the Yahoo options-chain HTTP endpoint, which
//! requires the cookie/crumb authentication dance; the session is cached
//! process-wide.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use lazy_static::lazy_static;
use reqwest::header;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{Instrument, OptionKind, PriceQuote};
use crate::provider::PriceProvider;

use models::{OptionChainResponse, OptionChainResult};

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Cached Yahoo authentication session.
#[derive(Debug, Clone)]
struct CrumbSession {
    cookie: String,
    crumb: String,
}

lazy_static! {
    static ref CRUMB_SESSION: RwLock<Option<CrumbSession>> = RwLock::default();
}

/// Yahoo Finance price provider for equities and listed option contracts.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    http: reqwest::Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to initialize Yahoo connector: {}", e),
        })?;
        Ok(Self {
            connector,
            http: reqwest::Client::new(),
        })
    }

    // ========================================================================
    // Equity quotes
    // ========================================================================

    async fn fetch_equity_quote(&self, ticker: &str) -> Result<PriceQuote, MarketDataError> {
        let response = self
            .connector
            .get_latest_quotes(ticker, "1d")
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(ticker.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        let quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", ticker, e);
            MarketDataError::NoQuoteData(ticker.to_string())
        })?;

        let timestamp = Utc
            .timestamp_opt(quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", quote.timestamp),
            })?;

        let price = Decimal::from_f64_retain(quote.close)
            .filter(|p| *p > Decimal::ZERO)
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid close price {} for {}", quote.close, ticker),
            })?;

        Ok(PriceQuote {
            timestamp,
            price,
            currency: "USD".to_string(),
            source: PROVIDER_ID.to_string(),
        })
    }

    // ========================================================================
    // Option contract quotes
    // ========================================================================

    async fn fetch_option_quote(
        &self,
        symbol: &str,
        underlying: &str,
        expiration: NaiveDate,
        strike: Decimal,
        kind: OptionKind,
    ) -> Result<PriceQuote, MarketDataError> {
        let target = expiration.and_time(NaiveTime::MIN).and_utc().timestamp();

        debug!("Fetching option chain for {} ({})", underlying, symbol);
        let chain = self.fetch_option_chain(underlying, None).await?;

        // The exact expiration may not be listed; fall back to the closest one
        let picked = closest_expiration(&chain.expiration_dates, target).ok_or_else(|| {
            MarketDataError::OptionNotFound {
                symbol: symbol.to_string(),
                detail: format!("no listed expirations for {}", underlying),
            }
        })?;

        let already_loaded = chain
            .options
            .first()
            .map(|set| set.expiration_date == picked)
            .unwrap_or(false);
        let chain = if already_loaded {
            chain
        } else {
            self.fetch_option_chain(underlying, Some(picked)).await?
        };

        let quote_set =
            chain
                .options
                .into_iter()
                .next()
                .ok_or_else(|| MarketDataError::OptionNotFound {
                    symbol: symbol.to_string(),
                    detail: "empty option chain".to_string(),
                })?;

        let pool = match kind {
            OptionKind::Call => quote_set.calls,
            OptionKind::Put => quote_set.puts,
        };

        // Strikes come back as floats; match with a small tolerance
        let tolerance = Decimal::new(1, 2);
        let contract = pool
            .iter()
            .find(|c| {
                Decimal::from_f64_retain(c.strike)
                    .map(|s| (s - strike).abs() <= tolerance)
                    .unwrap_or(false)
            })
            .ok_or_else(|| MarketDataError::OptionNotFound {
                symbol: symbol.to_string(),
                detail: format!("strike {} not listed", strike),
            })?;

        let raw_price =
            contract
                .usable_price()
                .ok_or_else(|| MarketDataError::OptionNotFound {
                    symbol: symbol.to_string(),
                    detail: "no price data for contract".to_string(),
                })?;

        let unit_price = Decimal::from_f64_retain(raw_price)
            .filter(|p| *p > Decimal::ZERO)
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid contract price {} for {}", raw_price, symbol),
            })?;

        // One contract covers 100 shares of the underlying
        Ok(PriceQuote {
            timestamp: Utc::now(),
            price: unit_price * Decimal::ONE_HUNDRED,
            currency: "USD".to_string(),
            source: PROVIDER_ID.to_string(),
        })
    }

    async fn fetch_option_chain(
        &self,
        underlying: &str,
        date: Option<i64>,
    ) -> Result<OptionChainResult, MarketDataError> {
        let session = self.session().await?;

        let mut url = format!(
            "https://query2.finance.yahoo.com/v7/finance/options/{}?crumb={}",
            underlying, session.crumb
        );
        if let Some(epoch) = date {
            url.push_str(&format!("&date={}", epoch));
        }

        let response = self
            .http
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &session.cookie)
            .send()
            .await?;

        if !response.status().is_success() {
            // Stale crumb or cookie; drop the session so the next call
            // re-authenticates
            let status = response.status();
            clear_session();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!(
                    "option chain request for {} failed with status {}",
                    underlying, status
                ),
            });
        }

        let parsed: OptionChainResponse = response.json().await?;
        parsed
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(underlying.to_string()))
    }

    // ========================================================================
    // Cookie/crumb authentication
    // ========================================================================

    async fn session(&self) -> Result<CrumbSession, MarketDataError> {
        {
            let guard = CRUMB_SESSION.read().unwrap();
            if let Some(session) = guard.as_ref() {
                return Ok(session.clone());
            }
        }
        self.refresh_session().await
    }

    async fn refresh_session(&self) -> Result<CrumbSession, MarketDataError> {
        debug!("Refreshing Yahoo crumb session");

        let response = self.http.get("https://fc.yahoo.com").send().await?;
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        let crumb = self
            .http
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await?
            .text()
            .await?;

        let session = CrumbSession { cookie, crumb };
        let mut guard = CRUMB_SESSION.write().unwrap();
        *guard = Some(session.clone());
        Ok(session)
    }
}

/// Drop the cached session (used when a request comes back unauthorized).
fn clear_session() {
    let mut guard = CRUMB_SESSION.write().unwrap();
    *guard = None;
}

/// The listed expiration closest to the requested one.
fn closest_expiration(listed: &[i64], target: i64) -> Option<i64> {
    listed.iter().copied().min_by_key(|e| (e - target).abs())
}

#[async_trait]
impl PriceProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_price(&self, symbol: &str) -> Result<PriceQuote, MarketDataError> {
        match Instrument::parse(symbol)? {
            Instrument::Equity { symbol: ticker } => self.fetch_equity_quote(&ticker).await,
            Instrument::OptionContract {
                underlying,
                expiration,
                strike,
                kind,
            } => {
                self.fetch_option_quote(symbol, &underlying, expiration, strike, kind)
                    .await
            }
        }
    }
}
