//! Card DTOs for `/api/v1/cards`.

use crate::ids::{AccountId, CardId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Virtual,
    Physical,
}

impl CardType {
    pub fn issue_path(self) -> &'static str {
        match self {
            Self::Virtual => "/api/v1/cards/issue-virtual-card",
            Self::Physical => "/api/v1/cards/issue-physical-card",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Frozen,
    Closed,
    Blocked,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentSystem {
    Visa,
    Mastercard,
}

/// A card as returned by the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub account_id: AccountId,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub status: CardStatus,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_holder: String,
    #[serde(default)]
    pub expiry_date: String,
    pub payment_system: Option<PaymentSystem>,
}

/// Body of `POST /api/v1/cards/issue-{virtual,physical}-card`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueCardRequest {
    pub user_id: UserId,
    pub account_id: AccountId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IssueCardResponse {
    pub card: Card,
}
