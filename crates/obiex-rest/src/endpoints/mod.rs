//! Endpoint groups
//!
//! Each group borrows the client's transport (and, where it resolves
//! currency codes, the client's currency cache). Groups are obtained from
//! [`ObiexClient`](crate::client::ObiexClient) accessors and are cheap to
//! construct per call.

pub mod currencies;
pub mod funding;
pub mod payments;
pub mod trading;
pub mod transactions;

pub use currencies::CurrencyEndpoints;
pub use funding::{DepositAddress, FundingEndpoints};
pub use payments::PaymentEndpoints;
pub use trading::TradingEndpoints;
pub use transactions::TransactionEndpoints;
