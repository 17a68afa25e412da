//! Trading types: pairs, quotes, sides

use crate::currency::Currency;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a trade
///
/// For the pair BTC/USDT: `Buy` converts USDT into BTC, `Sell` converts
/// BTC into USDT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A tradeable pair as the exchange returns it, with full currency records
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePair {
    pub id: String,
    pub is_sellable: bool,
    pub is_buyable: bool,
    pub source: Currency,
    pub target: Currency,
}

/// A tradeable pair narrowed to its codes
///
/// Deliberate narrowing of [`TradePair`]: most callers only need the two
/// currency codes, not the full embedded records.
#[derive(Debug, Clone)]
pub struct TradePairSummary {
    pub id: String,
    /// Source currency code, e.g. "BTC" in BTC/USDT
    pub source: String,
    /// Target currency code, e.g. "USDT" in BTC/USDT
    pub target: String,
    pub is_buyable: bool,
    pub is_sellable: bool,
}

impl From<TradePair> for TradePairSummary {
    fn from(pair: TradePair) -> Self {
        Self {
            id: pair.id,
            source: pair.source.code,
            target: pair.target.code,
            is_buyable: pair.is_buyable,
            is_sellable: pair.is_sellable,
        }
    }
}

/// A priced quote for a prospective trade
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub rate: Decimal,
    pub side: TradeSide,
    pub amount: Decimal,
    pub expiry_date: DateTime<Utc>,
    pub amount_received: Decimal,
}
