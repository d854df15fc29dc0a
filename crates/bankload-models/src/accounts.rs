//! Account DTOs for `/api/v1/accounts`.

use crate::cards::Card;
use crate::ids::{AccountId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Deposit,
    Savings,
    DebitCard,
    CreditCard,
}

impl AccountType {
    /// Path of the endpoint that opens an account of this kind.
    pub fn open_path(self) -> &'static str {
        match self {
            Self::Deposit => "/api/v1/accounts/open-deposit-account",
            Self::Savings => "/api/v1/accounts/open-savings-account",
            Self::DebitCard => "/api/v1/accounts/open-debit-card-account",
            Self::CreditCard => "/api/v1/accounts/open-credit-card-account",
        }
    }

    /// Whether accounts of this kind carry cards.
    pub fn has_cards(self) -> bool {
        matches!(self, Self::DebitCard | Self::CreditCard)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Closed,
    PendingClosure,
}

/// An account as returned by the gateway.
///
/// Card accounts may come back with cards the gateway issued on opening.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub status: AccountStatus,
    #[serde(default)]
    pub balance: f64,
}

/// Body of every `POST /api/v1/accounts/open-*-account` call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenAccountRequest {
    pub user_id: UserId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OpenAccountResponse {
    pub account: Account,
}

/// Query of `GET /api/v1/accounts`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountsQuery {
    pub user_id: UserId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GetAccountsResponse {
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_wire_names() {
        let json = serde_json::to_string(&AccountType::DebitCard).unwrap();
        assert_eq!(json, r#""DEBIT_CARD""#);
    }

    #[test]
    fn test_account_decodes_without_cards() {
        let json = r#"{"id":"acc-1","type":"DEPOSIT","status":"ACTIVE","balance":0.0}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, AccountId::from("acc-1"));
        assert!(account.cards.is_empty());
    }

    #[test]
    fn test_only_card_accounts_have_cards() {
        assert!(!AccountType::Deposit.has_cards());
        assert!(!AccountType::Savings.has_cards());
        assert!(AccountType::DebitCard.has_cards());
        assert!(AccountType::CreditCard.has_cards());
    }
}
