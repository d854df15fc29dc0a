//! Operation DTOs for `/api/v1/operations`.
//!
//! Every operation request shares `status` and `amount`. Card operations add
//! the card and account they run against; a few kinds add their own fields on
//! top. Rather than a hierarchy of request types, [`MakeOperationRequest`] has
//! one variant per operation kind, each carrying exactly the fields that kind
//! needs, with the shared parts composed by value.

use crate::ids::{AccountId, CardId, OperationId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Fee,
    TopUp,
    Cashback,
    Transfer,
    Purchase,
    BillPayment,
    CashWithdrawal,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Failed,
    Completed,
    Pending,
    InProgress,
}

/// Fields shared by every operation request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OperationBase {
    pub status: OperationStatus,
    pub amount: f64,
}

impl OperationBase {
    pub fn new(status: OperationStatus, amount: f64) -> Self {
        Self { status, amount }
    }
}

/// Fields of an operation made with a card against its account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardOperation {
    #[serde(flatten)]
    pub base: OperationBase,
    pub card_id: CardId,
    pub account_id: AccountId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferOperation {
    #[serde(flatten)]
    pub base: OperationBase,
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOperation {
    #[serde(flatten)]
    pub card: CardOperation,
    pub category: String,
    pub merchant: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentOperation {
    #[serde(flatten)]
    pub card: CardOperation,
    pub bill_id: String,
    pub payment_purpose: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashWithdrawalOperation {
    #[serde(flatten)]
    pub card: CardOperation,
    pub atm_id: String,
}

/// Body of a `POST /api/v1/operations/make-*-operation` call.
///
/// Serializes as the bare fields of the variant; the variant itself selects
/// the endpoint through [`MakeOperationRequest::path`].
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MakeOperationRequest {
    Fee(CardOperation),
    TopUp(CardOperation),
    Cashback(CardOperation),
    Transfer(TransferOperation),
    Purchase(PurchaseOperation),
    BillPayment(BillPaymentOperation),
    CashWithdrawal(CashWithdrawalOperation),
}

impl MakeOperationRequest {
    pub fn top_up(base: OperationBase, card_id: CardId, account_id: AccountId) -> Self {
        Self::TopUp(CardOperation {
            base,
            card_id,
            account_id,
        })
    }

    pub fn transfer(base: OperationBase, from: AccountId, to: AccountId) -> Self {
        Self::Transfer(TransferOperation {
            base,
            from_account_id: from,
            to_account_id: to,
        })
    }

    pub fn operation_type(&self) -> OperationType {
        match self {
            Self::Fee(_) => OperationType::Fee,
            Self::TopUp(_) => OperationType::TopUp,
            Self::Cashback(_) => OperationType::Cashback,
            Self::Transfer(_) => OperationType::Transfer,
            Self::Purchase(_) => OperationType::Purchase,
            Self::BillPayment(_) => OperationType::BillPayment,
            Self::CashWithdrawal(_) => OperationType::CashWithdrawal,
        }
    }

    pub fn path(&self) -> &'static str {
        match self.operation_type() {
            OperationType::Fee => "/api/v1/operations/make-fee-operation",
            OperationType::TopUp => "/api/v1/operations/make-top-up-operation",
            OperationType::Cashback => "/api/v1/operations/make-cashback-operation",
            OperationType::Transfer => "/api/v1/operations/make-transfer-operation",
            OperationType::Purchase => "/api/v1/operations/make-purchase-operation",
            OperationType::BillPayment => "/api/v1/operations/make-bill-payment-operation",
            OperationType::CashWithdrawal => "/api/v1/operations/make-cash-withdrawal-operation",
        }
    }

    /// The account the operation is booked against.
    pub fn account_id(&self) -> &AccountId {
        match self {
            Self::Fee(op) | Self::TopUp(op) | Self::Cashback(op) => &op.account_id,
            Self::Transfer(op) => &op.from_account_id,
            Self::Purchase(op) => &op.card.account_id,
            Self::BillPayment(op) => &op.card.account_id,
            Self::CashWithdrawal(op) => &op.card.account_id,
        }
    }
}

/// An operation as returned by the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: OperationId,
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    pub status: OperationStatus,
    pub amount: f64,
    pub card_id: Option<CardId>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: String,
    pub account_id: AccountId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OperationReceipt {
    pub url: String,
    pub document: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationsSummary {
    pub spent_amount: f64,
    pub received_amount: f64,
    pub cashback_amount: f64,
}

/// Query of `GET /api/v1/operations` and `/operations-summary`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationsQuery {
    pub account_id: AccountId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MakeOperationResponse {
    pub operation: Operation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GetOperationResponse {
    pub operation: Operation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GetOperationsResponse {
    pub operations: Vec<Operation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GetOperationsSummaryResponse {
    pub summary: OperationsSummary,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GetOperationReceiptResponse {
    pub receipt: OperationReceipt,
}
