//! Transaction history endpoints

use crate::error::RestResult;
use crate::transport::Transport;
use obiex_types::{Paginated, TransactionCategory};
use serde_json::{json, Value};
use tracing::instrument;

/// Transaction history endpoints
pub struct TransactionEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> TransactionEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Get the caller's transaction history
    ///
    /// Defaults: page 1, 30 items per page. An absent `category` is
    /// stripped from the query before signing. Entries are returned as raw
    /// JSON; the upstream contract defines no shape for them.
    #[instrument(skip(self))]
    pub async fn get_transaction_history(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
        category: Option<TransactionCategory>,
    ) -> RestResult<Paginated<Value>> {
        self.transport
            .get_paginated(
                "/v1/transactions/me",
                vec![
                    ("page", json!(page.unwrap_or(1))),
                    ("pageSize", json!(page_size.unwrap_or(30))),
                    ("category", json!(category)),
                ],
            )
            .await
    }

    /// Get a single transaction by id
    #[instrument(skip(self))]
    pub async fn get_transaction_by_id(&self, transaction_id: &str) -> RestResult<Value> {
        self.transport
            .get(&format!("/v1/transactions/{}", transaction_id), Vec::new())
            .await
    }
}
