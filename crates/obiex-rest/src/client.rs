//! Main REST client implementation

use crate::auth::Credentials;
use crate::cache::TtlCache;
use crate::endpoints::{
    CurrencyEndpoints, DepositAddress, FundingEndpoints, PaymentEndpoints, TradingEndpoints,
    TransactionEndpoints,
};
use crate::error::RestResult;
use crate::transport::{Transport, PRODUCTION_URL, SANDBOX_URL};
use obiex_types::{
    ActiveNetworkMap, Bank, BankAccountPayout, BankDepositRequest, CryptoAccountPayout, Currency,
    FiatBankAccount, FiatMerchant, NairaPayment, Network, Paginated, Quote, TradePairSummary,
    TradeSide, TransactionCategory, Wallet,
};
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Obiex REST API client
///
/// Every request is signed with the supplied credentials. Each client owns
/// its own currency cache; clients do not share state.
///
/// # Example
///
/// ```no_run
/// use obiex_rest::{Credentials, ObiexClient};
/// use obiex_types::TradeSide;
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = ObiexClient::new(creds);
///
///     let pairs = client.get_trade_pairs().await?;
///     println!("{} pairs", pairs.len());
///
///     let quote = client
///         .create_quote("BTC", "USDT", TradeSide::Sell, Decimal::new(25, 2))
///         .await?;
///     client.accept_quote(&quote.id).await?;
///
///     Ok(())
/// }
/// ```
pub struct ObiexClient {
    transport: Transport,
    currency_cache: TtlCache<Vec<Currency>>,
    sandbox_mode: bool,
}

impl ObiexClient {
    /// Create a client against the production API
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client against the staging API
    pub fn sandbox(credentials: Credentials) -> Self {
        Self::with_config(credentials, ClientConfig::default().with_sandbox_mode(true))
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("obiex-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = if config.sandbox_mode {
            SANDBOX_URL
        } else {
            PRODUCTION_URL
        };

        info!(sandbox = config.sandbox_mode, "Created Obiex REST client");

        Self {
            transport: Transport::new(http, base_url, credentials),
            currency_cache: TtlCache::new(),
            sandbox_mode: config.sandbox_mode,
        }
    }

    /// Whether this client talks to the staging API
    pub fn is_sandbox(&self) -> bool {
        self.sandbox_mode
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Currency catalogue endpoints
    pub fn currencies(&self) -> CurrencyEndpoints<'_> {
        CurrencyEndpoints::new(&self.transport, &self.currency_cache)
    }

    /// Trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.transport, &self.currency_cache)
    }

    /// Funding endpoints
    pub fn funding(&self) -> FundingEndpoints<'_> {
        FundingEndpoints::new(&self.transport)
    }

    /// NGN payment endpoints
    pub fn payments(&self) -> PaymentEndpoints<'_> {
        PaymentEndpoints::new(&self.transport)
    }

    /// Transaction history endpoints
    pub fn transactions(&self) -> TransactionEndpoints<'_> {
        TransactionEndpoints::new(&self.transport)
    }

    // ========================================================================
    // Currencies
    // ========================================================================

    /// Get all supported currencies (cached for 24 hours)
    pub async fn get_currencies(&self) -> RestResult<Vec<Currency>> {
        self.currencies().get_currencies().await
    }

    /// Look up a currency by code; a miss is `Ok(None)`
    pub async fn get_currency_by_code(&self, code: &str) -> RestResult<Option<Currency>> {
        self.currencies().get_currency_by_code(code).await
    }

    /// Get the networks a currency settles on
    pub async fn get_networks(&self, currency_code: &str) -> RestResult<Vec<Network>> {
        self.currencies().get_networks(currency_code).await
    }

    /// Get all currently active networks, grouped by currency
    pub async fn get_active_networks(&self) -> RestResult<Vec<ActiveNetworkMap>> {
        self.currencies().get_active_networks().await
    }

    /// Get the tradeable pairs involving a currency
    pub async fn get_trade_pairs_by_currency(
        &self,
        currency_id: &str,
    ) -> RestResult<Vec<TradePairSummary>> {
        self.currencies().get_trade_pairs_by_currency(currency_id).await
    }

    // ========================================================================
    // Trading
    // ========================================================================

    /// Get all tradeable pairs
    pub async fn get_trade_pairs(&self) -> RestResult<Vec<TradePairSummary>> {
        self.trading().get_trade_pairs().await
    }

    /// Create a quote for a prospective trade
    pub async fn create_quote(
        &self,
        source: &str,
        target: &str,
        side: TradeSide,
        amount: Decimal,
    ) -> RestResult<Quote> {
        self.trading().create_quote(source, target, side, amount).await
    }

    /// Accept a previously created quote
    pub async fn accept_quote(&self, quote_id: &str) -> RestResult<()> {
        self.trading().accept_quote(quote_id).await
    }

    /// Swap in one step: create a quote and accept it immediately
    pub async fn trade(
        &self,
        source: &str,
        target: &str,
        side: TradeSide,
        amount: Decimal,
    ) -> RestResult<Quote> {
        self.trading().trade(source, target, side, amount).await
    }

    /// Get the caller's trade history
    pub async fn get_trade_history(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Paginated<Value>> {
        self.trading().get_trade_history(page, page_size).await
    }

    // ========================================================================
    // Funding
    // ========================================================================

    /// Generate a deposit address for a currency on a network
    pub async fn get_deposit_address(
        &self,
        currency: &str,
        network: &str,
        identifier: &str,
    ) -> RestResult<DepositAddress> {
        self.funding()
            .get_deposit_address(currency, network, identifier)
            .await
    }

    /// Withdraw crypto to an external wallet
    pub async fn withdraw_crypto(
        &self,
        currency_code: &str,
        amount: Decimal,
        destination: CryptoAccountPayout,
    ) -> RestResult<Value> {
        self.funding()
            .withdraw_crypto(currency_code, amount, destination)
            .await
    }

    /// Withdraw naira to a bank account
    pub async fn withdraw_naira(
        &self,
        amount: Decimal,
        account: BankAccountPayout,
    ) -> RestResult<Value> {
        self.funding().withdraw_naira(amount, account).await
    }

    /// Get (creating on first use) the wallets for a currency code
    pub async fn get_or_create_wallet(&self, currency_code: &str) -> RestResult<Vec<Wallet>> {
        self.funding().get_or_create_wallet(currency_code).await
    }

    // ========================================================================
    // NGN payments
    // ========================================================================

    /// List the banks the payment rail can pay out to
    pub async fn get_banks(&self) -> RestResult<Vec<Bank>> {
        self.payments().get_banks().await
    }

    /// List fiat merchants that can receive naira deposits
    pub async fn get_naira_merchants(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Vec<FiatMerchant>> {
        self.payments().get_naira_merchants(page, page_size).await
    }

    /// Request a bank account to deposit naira into
    pub async fn request_naira_deposit(
        &self,
        request: &BankDepositRequest,
    ) -> RestResult<NairaPayment> {
        self.payments().request_naira_deposit(request).await
    }

    /// Verify a naira deposit by its reference
    pub async fn verify_naira_deposit(&self, reference: &str) -> RestResult<Value> {
        self.payments().verify_naira_deposit(reference).await
    }

    /// Verify a naira withdrawal by its reference
    pub async fn verify_naira_withdrawal(&self, reference: &str) -> RestResult<Value> {
        self.payments().verify_naira_withdrawal(reference).await
    }

    /// Resolve a bank account number to its account name
    pub async fn resolve_naira_bank_account(
        &self,
        bank_id: &str,
        account_number: &str,
    ) -> RestResult<Vec<FiatBankAccount>> {
        self.payments()
            .resolve_naira_bank_account(bank_id, account_number)
            .await
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Get the caller's transaction history
    pub async fn get_transaction_history(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
        category: Option<TransactionCategory>,
    ) -> RestResult<Paginated<Value>> {
        self.transactions()
            .get_transaction_history(page, page_size, category)
            .await
    }

    /// Get a single transaction by id
    pub async fn get_transaction_by_id(&self, transaction_id: &str) -> RestResult<Value> {
        self.transactions().get_transaction_by_id(transaction_id).await
    }
}

impl std::fmt::Debug for ObiexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObiexClient")
            .field("sandbox_mode", &self.sandbox_mode)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Use the staging API instead of production
    pub sandbox_mode: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sandbox_mode: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the staging base URL
    pub fn with_sandbox_mode(mut self, sandbox_mode: bool) -> Self {
        self.sandbox_mode = sandbox_mode;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("test_api_key", "test_api_secret")
    }

    #[test]
    fn test_production_base_url() {
        let client = ObiexClient::new(creds());
        assert!(!client.is_sandbox());
        assert_eq!(client.transport.base_url(), PRODUCTION_URL);
    }

    #[test]
    fn test_sandbox_base_url() {
        let client = ObiexClient::sandbox(creds());
        assert!(client.is_sandbox());
        assert_eq!(client.transport.base_url(), SANDBOX_URL);
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_sandbox_mode(true);

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert!(config.sandbox_mode);
    }

    #[test]
    fn test_debug_has_no_secrets() {
        let client = ObiexClient::new(creds());
        let debug = format!("{:?}", client);
        assert!(!debug.contains("test_api_secret"));
    }
}
