//! NGN payment rail endpoints: banks, merchants, deposits, withdrawals

use crate::error::RestResult;
use crate::transport::Transport;
use obiex_types::{Bank, BankDepositRequest, FiatBankAccount, FiatMerchant, NairaPayment};
use serde_json::{json, Value};
use tracing::instrument;

/// NGN payment endpoints
pub struct PaymentEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> PaymentEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List the banks the payment rail can pay out to
    #[instrument(skip(self))]
    pub async fn get_banks(&self) -> RestResult<Vec<Bank>> {
        self.transport.get("/v1/ngn-payments/banks", Vec::new()).await
    }

    /// List fiat merchants that can receive naira deposits
    ///
    /// Defaults: page 1, 30 items per page.
    #[instrument(skip(self))]
    pub async fn get_naira_merchants(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Vec<FiatMerchant>> {
        self.transport
            .get(
                "/v1/ngn-payments/merchants",
                vec![
                    ("page", json!(page.unwrap_or(1))),
                    ("pageSize", json!(page_size.unwrap_or(30))),
                ],
            )
            .await
    }

    /// Request a bank account to deposit naira into
    #[instrument(skip(self, request))]
    pub async fn request_naira_deposit(
        &self,
        request: &BankDepositRequest,
    ) -> RestResult<NairaPayment> {
        self.transport.post("/v1/ngn-payments/deposits", request).await
    }

    /// Verify a naira deposit by its reference
    #[instrument(skip(self))]
    pub async fn verify_naira_deposit(&self, reference: &str) -> RestResult<Value> {
        self.transport
            .put(&format!("/v1/ngn-payments/deposits/{}", reference))
            .await
    }

    /// Verify a naira withdrawal by its reference
    #[instrument(skip(self))]
    pub async fn verify_naira_withdrawal(&self, reference: &str) -> RestResult<Value> {
        self.transport
            .put(&format!("/v1/ngn-payments/withdrawals/{}", reference))
            .await
    }

    /// Resolve a bank account number to its account name
    #[instrument(skip(self))]
    pub async fn resolve_naira_bank_account(
        &self,
        bank_id: &str,
        account_number: &str,
    ) -> RestResult<Vec<FiatBankAccount>> {
        self.transport
            .get(
                "/v1/ngn-payments/accounts/resolve",
                vec![
                    ("bankId", json!(bank_id)),
                    ("accountNumber", json!(account_number)),
                ],
            )
            .await
    }
}
