//! NGN payment rail types: banks, merchants, deposits and withdrawals

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A Nigerian bank known to the payment rail
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub name: String,
    pub uuid: String,
    pub inter_institution_code: String,
    pub sort_code: String,
}

/// A fiat merchant that can receive deposits
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiatMerchant {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
    pub code: String,
    pub deposit_fee: Decimal,
    pub payout_fee: Decimal,
    pub user_id: String,
    pub user: MerchantUser,
    pub total_requests: u64,
    pub completed_requests: u64,
}

/// The user record behind a fiat merchant
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantUser {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

/// Destination for a fiat (naira) withdrawal
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountPayout {
    pub account_number: String,
    pub account_name: String,
    pub bank_name: String,
    pub bank_code: String,
    pub merchant_code: String,
}

/// A resolved bank account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiatBankAccount {
    pub bank_id: String,
    pub account_number: String,
    pub account_name: String,
}

/// Request body for a naira deposit bank account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDepositRequest {
    pub merchant_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Direction of a naira payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDirection {
    Deposit,
    Withdraw,
}

/// Lifecycle state of a naira payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Failed,
    Pending,
    Processing,
    Cancelled,
    Completed,
}

/// Bank account on the receiving end of a naira payment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientBankAccount {
    pub account_name: String,
    pub account_number: String,
    pub bank_id: String,
}

/// A naira deposit or withdrawal as tracked by the payment rail
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NairaPayment {
    pub created_at: DateTime<Utc>,
    pub reference: String,
    pub customer_reference: String,
    pub merchant_account_number: String,
    pub merchant_account_name: String,
    pub fee: Decimal,
    pub amount: Decimal,
    pub merchant_id: String,
    pub recipient_bank_account_id: Option<String>,
    #[serde(rename = "type")]
    pub direction: PaymentDirection,
    pub status: PaymentStatus,
    pub recipient_bank_account: Option<RecipientBankAccount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deposit_request_amount_is_a_number() {
        let request = BankDepositRequest {
            merchant_code: "M-01".to_string(),
            amount: dec!(2500),
        };
        let json = serde_json::to_string(&request).unwrap();
        // The wire format carries amounts as JSON numbers, not strings
        assert!(json.contains("\"amount\":2500.0"));
        assert!(json.contains("\"merchantCode\":\"M-01\""));
    }

    #[test]
    fn test_naira_payment_deserializes() {
        let json = r#"{
            "createdAt": "2024-05-01T09:30:00Z",
            "reference": "ref-1",
            "customerReference": "cust-1",
            "merchantAccountNumber": "0123456789",
            "merchantAccountName": "Acme",
            "fee": 50,
            "amount": 2500,
            "merchantId": "m-1",
            "recipientBankAccountId": null,
            "type": "DEPOSIT",
            "status": "PENDING",
            "recipientBankAccount": null
        }"#;
        let payment: NairaPayment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.direction, PaymentDirection::Deposit);
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.fee, dec!(50));
        assert!(payment.recipient_bank_account.is_none());
    }
}
