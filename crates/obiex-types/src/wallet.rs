//! Wallet and crypto payout types

use crate::currency::Currency;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An exchange-side wallet for one currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
    pub available_balance: Decimal,
    pub pending_balance: Decimal,
    pub pending_swap_balance: Decimal,
    pub locked_balance: Decimal,
    pub total_swappable_balance: Decimal,
    pub total_pending_balance: Decimal,
    pub user_id: String,
    pub currency: Currency,
}

/// Destination for a crypto withdrawal
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAccountPayout {
    pub address: String,
    /// Network code, e.g. "TRX" for USDT on Tron
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}
