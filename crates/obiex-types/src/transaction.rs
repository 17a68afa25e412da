//! Transaction history types

use serde::{Deserialize, Serialize};

/// Category filter for transaction history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionCategory {
    Deposit,
    Withdrawal,
    Swap,
    Transfer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_values() {
        assert_eq!(
            serde_json::to_string(&TransactionCategory::Withdrawal).unwrap(),
            "\"WITHDRAWAL\""
        );
        assert_eq!(
            serde_json::from_str::<TransactionCategory>("\"SWAP\"").unwrap(),
            TransactionCategory::Swap
        );
    }
}
