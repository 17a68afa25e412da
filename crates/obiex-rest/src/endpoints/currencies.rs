//! Currency catalogue endpoints
//!
//! The currency list changes rarely and the backing endpoint is expensive,
//! so it is memoized under the `"currencies"` key for 24 hours. All
//! code-to-record resolution goes through that cached list.

use crate::cache::TtlCache;
use crate::error::{RestError, RestResult};
use crate::transport::Transport;
use obiex_types::{ActiveNetworkMap, Currency, Network, TradePair, TradePairSummary};
use std::time::Duration;
use tracing::{debug, instrument};

/// Cache key for the currency list
pub(crate) const CURRENCIES_CACHE_KEY: &str = "currencies";
/// The list is refetched at most once per day
pub(crate) const CURRENCIES_TTL: Duration = Duration::from_secs(86_400);

/// Currency catalogue endpoints
pub struct CurrencyEndpoints<'a> {
    transport: &'a Transport,
    cache: &'a TtlCache<Vec<Currency>>,
}

impl<'a> CurrencyEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport, cache: &'a TtlCache<Vec<Currency>>) -> Self {
        Self { transport, cache }
    }

    /// Get all supported currencies
    ///
    /// Served from the client's cache when fresh; at most one upstream
    /// fetch is in flight at a time.
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Vec<Currency>> {
        let transport = self.transport;
        self.cache
            .get_or_set(CURRENCIES_CACHE_KEY, CURRENCIES_TTL, move || async move {
                debug!("fetching currency list");
                transport.get("/v1/currencies", Vec::new()).await
            })
            .await
    }

    /// Look up a currency by its code (e.g. "BTC")
    ///
    /// A miss is `Ok(None)`, not an error.
    #[instrument(skip(self))]
    pub async fn get_currency_by_code(&self, code: &str) -> RestResult<Option<Currency>> {
        let currencies = self.get_currencies().await?;
        Ok(currencies.into_iter().find(|c| c.code == code))
    }

    /// Resolve a code that the caller requires to exist
    pub(crate) async fn require_currency(&self, code: &str) -> RestResult<Currency> {
        self.get_currency_by_code(code)
            .await?
            .ok_or_else(|| RestError::UnknownCurrency(code.to_string()))
    }

    /// Get the networks a currency settles on
    ///
    /// Fails with [`RestError::UnknownCurrency`] if the code does not
    /// resolve.
    #[instrument(skip(self))]
    pub async fn get_networks(&self, currency_code: &str) -> RestResult<Vec<Network>> {
        let currency = self.require_currency(currency_code).await?;
        self.transport
            .get(&format!("/v1/currencies/{}/networks", currency.id), Vec::new())
            .await
    }

    /// Get all currently active networks, grouped by currency
    #[instrument(skip(self))]
    pub async fn get_active_networks(&self) -> RestResult<Vec<ActiveNetworkMap>> {
        self.transport
            .get("/v1/currencies/networks/active", Vec::new())
            .await
    }

    /// Get the tradeable pairs involving a currency
    #[instrument(skip(self))]
    pub async fn get_trade_pairs_by_currency(
        &self,
        currency_id: &str,
    ) -> RestResult<Vec<TradePairSummary>> {
        let pairs: Vec<TradePair> = self
            .transport
            .get(&format!("/v1/currencies/{}/pairs", currency_id), Vec::new())
            .await?;

        Ok(pairs.into_iter().map(TradePairSummary::from).collect())
    }
}
