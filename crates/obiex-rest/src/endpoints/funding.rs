//! Funding endpoints: deposit addresses, withdrawals, wallets

use crate::error::RestResult;
use crate::transport::Transport;
use obiex_types::{BankAccountPayout, CryptoAccountPayout, Wallet};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// Currency code used for naira balances
const NAIRA_CODE: &str = "NGNX";

/// Funding endpoints
pub struct FundingEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> FundingEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Generate a deposit address for a currency on a network
    ///
    /// Re-using the same `identifier` always returns the same address, so
    /// tie it to your own user ids for stable per-user addresses.
    #[instrument(skip(self))]
    pub async fn get_deposit_address(
        &self,
        currency: &str,
        network: &str,
        identifier: &str,
    ) -> RestResult<DepositAddress> {
        let raw: BrokerAddress = self
            .transport
            .post(
                "/v1/addresses/broker",
                &BrokerAddressRequest {
                    currency,
                    network,
                    purpose: identifier,
                },
            )
            .await?;

        Ok(DepositAddress {
            address: raw.value,
            memo: raw.memo,
            network: raw.network,
            identifier: raw.purpose,
        })
    }

    /// Withdraw crypto to an external wallet
    #[instrument(skip(self, destination))]
    pub async fn withdraw_crypto(
        &self,
        currency_code: &str,
        amount: Decimal,
        destination: CryptoAccountPayout,
    ) -> RestResult<Value> {
        self.transport
            .post(
                "/v1/wallets/ext/debit/crypto",
                &DebitRequest {
                    amount,
                    currency: currency_code,
                    destination,
                },
            )
            .await
    }

    /// Withdraw naira to a bank account
    #[instrument(skip(self, account))]
    pub async fn withdraw_naira(
        &self,
        amount: Decimal,
        account: BankAccountPayout,
    ) -> RestResult<Value> {
        self.transport
            .post(
                "/v1/wallets/ext/debit/fiat",
                &DebitRequest {
                    amount,
                    currency: NAIRA_CODE,
                    destination: account,
                },
            )
            .await
    }

    /// Get (creating on first use) the wallets for a currency code
    #[instrument(skip(self))]
    pub async fn get_or_create_wallet(&self, currency_code: &str) -> RestResult<Vec<Wallet>> {
        self.transport
            .get(&format!("/v1/wallets/{}", currency_code), Vec::new())
            .await
    }
}

// Types specific to funding endpoints

/// A deposit address tied to an identifier
#[derive(Debug, Clone)]
pub struct DepositAddress {
    pub address: String,
    pub memo: Option<String>,
    pub network: String,
    /// The identifier the address was generated for
    pub identifier: String,
}

/// Raw broker address as the API returns it
#[derive(Debug, Deserialize)]
struct BrokerAddress {
    value: String,
    memo: Option<String>,
    network: String,
    purpose: String,
}

/// Body for POST /v1/addresses/broker
#[derive(Debug, Serialize)]
struct BrokerAddressRequest<'a> {
    currency: &'a str,
    network: &'a str,
    purpose: &'a str,
}

/// Body for the external debit endpoints
#[derive(Debug, Serialize)]
struct DebitRequest<'a, D: Serialize> {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    currency: &'a str,
    destination: D,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debit_request_wire_shape() {
        let request = DebitRequest {
            amount: dec!(0.01),
            currency: "BTC",
            destination: CryptoAccountPayout {
                address: "bc1qxyz".to_string(),
                network: "BTC".to_string(),
                memo: None,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["currency"], "BTC");
        assert_eq!(json["amount"], serde_json::json!(0.01));
        assert_eq!(json["destination"]["address"], "bc1qxyz");
    }

    #[test]
    fn test_broker_address_maps_purpose_to_identifier() {
        let raw: BrokerAddress = serde_json::from_str(
            r#"{"value": "TX123", "memo": null, "network": "TRX", "purpose": "user-7"}"#,
        )
        .unwrap();
        let address = DepositAddress {
            address: raw.value,
            memo: raw.memo,
            network: raw.network,
            identifier: raw.purpose,
        };
        assert_eq!(address.address, "TX123");
        assert_eq!(address.identifier, "user-7");
        assert!(address.memo.is_none());
    }
}
