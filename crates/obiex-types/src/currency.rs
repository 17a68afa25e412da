//! Currency catalogue types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A currency supported by the exchange
///
/// The exchange addresses currencies by opaque `id`; callers usually hold
/// the human `code` (e.g. "BTC", "USDT") and resolve it through the cached
/// currency list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub name: String,
    pub code: String,
    pub receivable: bool,
    pub withdrawable: bool,
    pub transferrable: bool,
    pub minimum_deposit: Decimal,
    /// Only applies when above 0
    #[serde(default)]
    pub maximum_deposit: Decimal,
    /// Only applies when above 0
    #[serde(default)]
    pub maximum_daily_deposit_limit: Decimal,
    pub maximum_decimal_places: u32,
}

/// A blockchain network a currency settles on
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    pub code: String,
    pub memo_regex: String,
    pub address_regex: String,
    pub minimum_confirmations: u32,
}

/// How a network fee is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    Percentage,
    Flat,
}

/// A currently active network, as returned by the active-networks listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveNetwork {
    pub network_name: String,
    pub network_code: String,
    pub minimum_deposit: Decimal,
    pub deposit_fee: Decimal,
    pub minimum_withdrawal: Decimal,
    pub withdrawal_fee: Decimal,
    pub maximum_decimal_places: u32,
    pub receive_fee_type: FeeType,
    pub withdrawal_fee_type: FeeType,
}

/// Active networks grouped under one currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveNetworkCurrency {
    pub currency_name: String,
    pub networks: Vec<ActiveNetwork>,
}

/// Map from currency code to its active networks
pub type ActiveNetworkMap = HashMap<String, ActiveNetworkCurrency>;
