//! Shared types for the Obiex exchange REST API
//!
//! This crate provides the domain type definitions used across the Obiex SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`ApiResponse`] - The `{message, data, errors, meta}` envelope every
//!   endpoint responds with
//! - [`Currency`], [`Network`] - Currency catalogue records
//! - [`TradePair`], [`Quote`], [`TradeSide`] - Trading types
//! - [`Wallet`], [`CryptoAccountPayout`] - Wallet and crypto payout types
//! - [`Bank`], [`FiatMerchant`], [`NairaPayment`] - NGN payment rails
//! - [`TransactionCategory`] - Transaction history filter

pub mod currency;
pub mod payments;
pub mod response;
pub mod trading;
pub mod transaction;
pub mod wallet;

// Re-export commonly used types
pub use currency::*;
pub use payments::*;
pub use response::*;
pub use trading::*;
pub use transaction::*;
pub use wallet::*;
