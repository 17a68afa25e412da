//! Trading endpoints: pairs, quotes, swaps, trade history

use crate::cache::TtlCache;
use crate::endpoints::currencies::CurrencyEndpoints;
use crate::error::RestResult;
use crate::transport::Transport;
use obiex_types::{Currency, Paginated, Quote, TradePair, TradePairSummary, TradeSide};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

/// Trading endpoints
pub struct TradingEndpoints<'a> {
    transport: &'a Transport,
    cache: &'a TtlCache<Vec<Currency>>,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport, cache: &'a TtlCache<Vec<Currency>>) -> Self {
        Self { transport, cache }
    }

    fn currencies(&self) -> CurrencyEndpoints<'a> {
        CurrencyEndpoints::new(self.transport, self.cache)
    }

    /// Get all tradeable pairs
    #[instrument(skip(self))]
    pub async fn get_trade_pairs(&self) -> RestResult<Vec<TradePairSummary>> {
        let pairs: Vec<TradePair> = self.transport.get("/v1/trades/pairs", Vec::new()).await?;
        Ok(pairs.into_iter().map(TradePairSummary::from).collect())
    }

    /// Create a quote for a prospective trade
    ///
    /// `source` and `target` are currency codes (BTC in BTC/USDT is the
    /// source); both are resolved through the cached currency list and an
    /// unknown code fails locally with
    /// [`RestError::UnknownCurrency`](crate::error::RestError::UnknownCurrency)
    /// rather than sending a request the server would reject.
    #[instrument(skip(self))]
    pub async fn create_quote(
        &self,
        source: &str,
        target: &str,
        side: TradeSide,
        amount: Decimal,
    ) -> RestResult<Quote> {
        let source_currency = self.currencies().require_currency(source).await?;
        let target_currency = self.currencies().require_currency(target).await?;

        let request = QuoteRequest {
            source_id: source_currency.id,
            target_id: target_currency.id,
            side,
            amount,
        };

        self.transport.post("/v1/trades/quote", &request).await
    }

    /// Accept a previously created quote
    #[instrument(skip(self))]
    pub async fn accept_quote(&self, quote_id: &str) -> RestResult<()> {
        self.transport
            .post_empty(&format!("/v1/trades/quote/{}", quote_id))
            .await
    }

    /// Swap in one step: create a quote and accept it immediately
    ///
    /// Use [`create_quote`](Self::create_quote) +
    /// [`accept_quote`](Self::accept_quote) separately if you want to
    /// inspect the rate first.
    #[instrument(skip(self))]
    pub async fn trade(
        &self,
        source: &str,
        target: &str,
        side: TradeSide,
        amount: Decimal,
    ) -> RestResult<Quote> {
        let quote = self.create_quote(source, target, side, amount).await?;
        self.accept_quote(&quote.id).await?;
        Ok(quote)
    }

    /// Get the caller's trade history
    ///
    /// Defaults: page 1, 30 items per page. Entries are returned as raw
    /// JSON; the upstream contract defines no shape for them.
    #[instrument(skip(self))]
    pub async fn get_trade_history(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Paginated<Value>> {
        self.transport
            .get_paginated(
                "/v1/trades/me",
                vec![
                    ("page", json!(page.unwrap_or(1))),
                    ("pageSize", json!(page_size.unwrap_or(30))),
                ],
            )
            .await
    }
}

// Request types specific to trading endpoints

/// Body for POST /v1/trades/quote
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRequest {
    source_id: String,
    target_id: String,
    side: TradeSide,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_request_wire_shape() {
        let request = QuoteRequest {
            source_id: "c-1".to_string(),
            target_id: "c-2".to_string(),
            side: TradeSide::Buy,
            amount: dec!(0.5),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sourceId"], "c-1");
        assert_eq!(json["targetId"], "c-2");
        assert_eq!(json["side"], "BUY");
        // Amounts go over the wire as JSON numbers
        assert_eq!(json["amount"], serde_json::json!(0.5));
    }
}
