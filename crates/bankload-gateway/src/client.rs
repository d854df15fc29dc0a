//! Gateway capability traits.
//!
//! One trait per resource. Each exposes a small set of required primitives
//! (what a transport must implement) plus provided methods that fill request
//! bodies with fake data, so every transport generates requests the same way.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bankload_models::accounts::{AccountType, GetAccountsResponse, OpenAccountResponse};
use bankload_models::cards::{CardType, IssueCardResponse};
use bankload_models::documents::{GetContractDocumentResponse, GetTariffDocumentResponse};
use bankload_models::operations::{
    BillPaymentOperation, CardOperation, CashWithdrawalOperation, GetOperationReceiptResponse,
    GetOperationResponse, GetOperationsResponse, GetOperationsSummaryResponse,
    MakeOperationRequest, MakeOperationResponse, OperationBase, PurchaseOperation,
};
use bankload_models::users::{CreateUserRequest, CreateUserResponse, GetUserResponse};
use bankload_models::{AccountId, CardId, OperationId, UserId};

use crate::error::GatewayError;
use crate::fakers::FakeData;

/// Boxed future returned by every gateway call.
pub type GatewayFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, GatewayError>> + Send + 'a>>;

pub trait UsersGateway: Send + Sync {
    fn fakes(&self) -> &dyn FakeData;

    fn create_user_with(&self, request: CreateUserRequest) -> GatewayFuture<'_, CreateUserResponse>;

    fn get_user<'a>(&'a self, user_id: &'a UserId) -> GatewayFuture<'a, GetUserResponse>;

    /// Creates a user with fake personal data.
    fn create_user(&self) -> GatewayFuture<'_, CreateUserResponse> {
        let fakes = self.fakes();
        let request = CreateUserRequest {
            email: fakes.email(),
            last_name: fakes.last_name(),
            first_name: fakes.first_name(),
            middle_name: fakes.middle_name(),
            phone_number: fakes.phone_number(),
        };
        self.create_user_with(request)
    }
}

pub trait AccountsGateway: Send + Sync {
    fn open_account<'a>(
        &'a self,
        user_id: &'a UserId,
        account_type: AccountType,
    ) -> GatewayFuture<'a, OpenAccountResponse>;

    fn get_accounts<'a>(&'a self, user_id: &'a UserId) -> GatewayFuture<'a, GetAccountsResponse>;

    fn open_deposit_account<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> GatewayFuture<'a, OpenAccountResponse> {
        self.open_account(user_id, AccountType::Deposit)
    }

    fn open_savings_account<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> GatewayFuture<'a, OpenAccountResponse> {
        self.open_account(user_id, AccountType::Savings)
    }

    fn open_debit_card_account<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> GatewayFuture<'a, OpenAccountResponse> {
        self.open_account(user_id, AccountType::DebitCard)
    }

    fn open_credit_card_account<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> GatewayFuture<'a, OpenAccountResponse> {
        self.open_account(user_id, AccountType::CreditCard)
    }
}

pub trait CardsGateway: Send + Sync {
    fn issue_card<'a>(
        &'a self,
        user_id: &'a UserId,
        account_id: &'a AccountId,
        card_type: CardType,
    ) -> GatewayFuture<'a, IssueCardResponse>;

    fn issue_virtual_card<'a>(
        &'a self,
        user_id: &'a UserId,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, IssueCardResponse> {
        self.issue_card(user_id, account_id, CardType::Virtual)
    }

    fn issue_physical_card<'a>(
        &'a self,
        user_id: &'a UserId,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, IssueCardResponse> {
        self.issue_card(user_id, account_id, CardType::Physical)
    }
}

pub trait OperationsGateway: Send + Sync {
    fn fakes(&self) -> &dyn FakeData;

    fn make_operation(
        &self,
        request: MakeOperationRequest,
    ) -> GatewayFuture<'_, MakeOperationResponse>;

    fn get_operation<'a>(
        &'a self,
        operation_id: &'a OperationId,
    ) -> GatewayFuture<'a, GetOperationResponse>;

    fn get_operations<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetOperationsResponse>;

    fn get_operations_summary<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetOperationsSummaryResponse>;

    fn get_operation_receipt<'a>(
        &'a self,
        operation_id: &'a OperationId,
    ) -> GatewayFuture<'a, GetOperationReceiptResponse>;

    fn make_fee_operation(
        &self,
        card_id: &CardId,
        account_id: &AccountId,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        let card = card_operation(self.fakes(), card_id, account_id);
        self.make_operation(MakeOperationRequest::Fee(card))
    }

    fn make_top_up_operation(
        &self,
        card_id: &CardId,
        account_id: &AccountId,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        let card = card_operation(self.fakes(), card_id, account_id);
        self.make_operation(MakeOperationRequest::TopUp(card))
    }

    fn make_cashback_operation(
        &self,
        card_id: &CardId,
        account_id: &AccountId,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        let card = card_operation(self.fakes(), card_id, account_id);
        self.make_operation(MakeOperationRequest::Cashback(card))
    }

    fn make_transfer_operation(
        &self,
        from_account_id: &AccountId,
        to_account_id: &AccountId,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        let request = MakeOperationRequest::transfer(
            operation_base(self.fakes()),
            from_account_id.clone(),
            to_account_id.clone(),
        );
        self.make_operation(request)
    }

    fn make_purchase_operation(
        &self,
        card_id: &CardId,
        account_id: &AccountId,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        let fakes = self.fakes();
        let request = MakeOperationRequest::Purchase(PurchaseOperation {
            card: card_operation(fakes, card_id, account_id),
            category: fakes.category(),
            merchant: fakes.merchant(),
        });
        self.make_operation(request)
    }

    fn make_bill_payment_operation(
        &self,
        card_id: &CardId,
        account_id: &AccountId,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        let fakes = self.fakes();
        let request = MakeOperationRequest::BillPayment(BillPaymentOperation {
            card: card_operation(fakes, card_id, account_id),
            bill_id: fakes.bill_id(),
            payment_purpose: fakes.payment_purpose(),
        });
        self.make_operation(request)
    }

    fn make_cash_withdrawal_operation(
        &self,
        card_id: &CardId,
        account_id: &AccountId,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        let fakes = self.fakes();
        let request = MakeOperationRequest::CashWithdrawal(CashWithdrawalOperation {
            card: card_operation(fakes, card_id, account_id),
            atm_id: fakes.atm_id(),
        });
        self.make_operation(request)
    }
}

pub trait DocumentsGateway: Send + Sync {
    fn get_tariff_document<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetTariffDocumentResponse>;

    fn get_contract_document<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetContractDocumentResponse>;
}

fn operation_base(fakes: &dyn FakeData) -> OperationBase {
    OperationBase::new(fakes.operation_status(), fakes.amount())
}

fn card_operation(fakes: &dyn FakeData, card_id: &CardId, account_id: &AccountId) -> CardOperation {
    CardOperation {
        base: operation_base(fakes),
        card_id: card_id.clone(),
        account_id: account_id.clone(),
    }
}

/// The full set of gateway clients a seeding run or a simulated user needs.
///
/// Cheap to clone; every client is shared behind an `Arc`.
#[derive(Clone)]
pub struct GatewayClients {
    pub users: Arc<dyn UsersGateway>,
    pub accounts: Arc<dyn AccountsGateway>,
    pub cards: Arc<dyn CardsGateway>,
    pub operations: Arc<dyn OperationsGateway>,
    pub documents: Arc<dyn DocumentsGateway>,
}

impl GatewayClients {
    /// Uses one value implementing every capability for all five clients.
    pub fn from_gateway<G>(gateway: Arc<G>) -> Self
    where
        G: UsersGateway
            + AccountsGateway
            + CardsGateway
            + OperationsGateway
            + DocumentsGateway
            + 'static,
    {
        Self {
            users: gateway.clone(),
            accounts: gateway.clone(),
            cards: gateway.clone(),
            operations: gateway.clone(),
            documents: gateway,
        }
    }
}

impl std::fmt::Debug for GatewayClients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClients").finish_non_exhaustive()
    }
}
