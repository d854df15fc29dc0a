//! In-memory gateway for tests.
//!
//! [`RecordingGateway`] implements every capability trait, keeps the users,
//! accounts, cards and operations it hands out, and records each call so
//! tests can assert on exactly what a caller did.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bankload_models::accounts::{
    Account, AccountStatus, AccountType, GetAccountsResponse, OpenAccountResponse,
};
use bankload_models::cards::{Card, CardStatus, CardType, IssueCardResponse, PaymentSystem};
use bankload_models::documents::{
    Document, GetContractDocumentResponse, GetTariffDocumentResponse,
};
use bankload_models::operations::{
    GetOperationReceiptResponse, GetOperationResponse, GetOperationsResponse,
    GetOperationsSummaryResponse, MakeOperationRequest, MakeOperationResponse, Operation,
    OperationReceipt, OperationType, OperationsSummary,
};
use bankload_models::users::{CreateUserRequest, CreateUserResponse, GetUserResponse, User};
use bankload_models::{AccountId, CardId, OperationId, UserId};

use crate::client::{
    AccountsGateway, CardsGateway, DocumentsGateway, GatewayClients, GatewayFuture,
    OperationsGateway, UsersGateway,
};
use crate::error::GatewayError;
use crate::fakers::{FakeData, Fakers};

/// One recorded gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayCall {
    CreateUser,
    GetUser,
    OpenAccount(AccountType),
    GetAccounts,
    IssueCard(CardType),
    MakeOperation(OperationType),
    GetOperation,
    GetOperations,
    GetOperationsSummary,
    GetOperationReceipt,
    GetTariffDocument,
    GetContractDocument,
}

#[derive(Default)]
struct State {
    calls: Vec<GatewayCall>,
    requests: Vec<MakeOperationRequest>,
    users: HashMap<UserId, User>,
    accounts: HashMap<UserId, Vec<Account>>,
    operations: Vec<Operation>,
    next_id: usize,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn account_mut(&mut self, account_id: &AccountId) -> Option<&mut Account> {
        self.accounts
            .values_mut()
            .flat_map(|accounts| accounts.iter_mut())
            .find(|account| &account.id == account_id)
    }
}

/// Gateway double that answers every call from memory.
pub struct RecordingGateway {
    state: Mutex<State>,
    fakes: Arc<dyn FakeData>,
    auto_issued_cards: bool,
    failures: HashMap<GatewayCall, usize>,
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            fakes: Arc::new(Fakers),
            auto_issued_cards: true,
            failures: HashMap::new(),
        }
    }

    /// Card accounts open without the virtual card the gateway normally
    /// issues alongside them.
    pub fn without_auto_issued_cards(mut self) -> Self {
        self.auto_issued_cards = false;
        self
    }

    /// Fails the `nth` (1-based) occurrence of `call` with
    /// [`GatewayError::Rejected`].
    pub fn fail_on(mut self, call: GatewayCall, nth: usize) -> Self {
        self.failures.insert(call, nth);
        self
    }

    pub fn clients(self: Arc<Self>) -> GatewayClients {
        GatewayClients::from_gateway(self)
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    pub fn count(&self, call: GatewayCall) -> usize {
        self.lock().calls.iter().filter(|c| **c == call).count()
    }

    pub fn total_calls(&self) -> usize {
        self.lock().calls.len()
    }

    /// Every operation request made so far, in call order.
    pub fn operations(&self) -> Vec<MakeOperationRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, state: &mut State, call: GatewayCall) -> Result<(), GatewayError> {
        state.calls.push(call);
        let seen = state.calls.iter().filter(|c| **c == call).count();
        match self.failures.get(&call) {
            Some(&nth) if nth == seen => Err(GatewayError::Rejected {
                call: format!("{call:?}"),
                reason: format!("injected failure on call #{nth}"),
            }),
            _ => Ok(()),
        }
    }

    fn card(state: &mut State, account_id: &AccountId, card_type: CardType) -> Card {
        Card {
            id: CardId::from_string(state.next_id("card")),
            account_id: account_id.clone(),
            card_type,
            status: CardStatus::Active,
            card_number: "4000000000000002".into(),
            card_holder: "TEST HOLDER".into(),
            expiry_date: "12/30".into(),
            payment_system: Some(PaymentSystem::Visa),
        }
    }
}

fn ready<'a, T: Send + 'a>(result: Result<T, GatewayError>) -> GatewayFuture<'a, T> {
    Box::pin(std::future::ready(result))
}

fn not_found(call: GatewayCall, what: impl std::fmt::Display) -> GatewayError {
    GatewayError::Rejected {
        call: format!("{call:?}"),
        reason: format!("{what} not found"),
    }
}

impl UsersGateway for RecordingGateway {
    fn fakes(&self) -> &dyn FakeData {
        self.fakes.as_ref()
    }

    fn create_user_with(&self, request: CreateUserRequest) -> GatewayFuture<'_, CreateUserResponse> {
        let mut state = self.lock();
        let result = self.record(&mut state, GatewayCall::CreateUser).map(|()| {
            let user = User {
                id: UserId::from_string(state.next_id("user")),
                email: request.email,
                last_name: request.last_name,
                first_name: request.first_name,
                middle_name: request.middle_name,
                phone_number: request.phone_number,
            };
            state.users.insert(user.id.clone(), user.clone());
            CreateUserResponse { user }
        });
        ready(result)
    }

    fn get_user<'a>(&'a self, user_id: &'a UserId) -> GatewayFuture<'a, GetUserResponse> {
        let mut state = self.lock();
        let result = self.record(&mut state, GatewayCall::GetUser).and_then(|()| {
            state
                .users
                .get(user_id)
                .cloned()
                .map(|user| GetUserResponse { user })
                .ok_or_else(|| not_found(GatewayCall::GetUser, user_id))
        });
        ready(result)
    }
}

impl AccountsGateway for RecordingGateway {
    fn open_account<'a>(
        &'a self,
        user_id: &'a UserId,
        account_type: AccountType,
    ) -> GatewayFuture<'a, OpenAccountResponse> {
        let mut state = self.lock();
        let result = self
            .record(&mut state, GatewayCall::OpenAccount(account_type))
            .map(|()| {
                let id = AccountId::from_string(state.next_id("account"));
                let cards = if self.auto_issued_cards && account_type.has_cards() {
                    vec![Self::card(&mut state, &id, CardType::Virtual)]
                } else {
                    Vec::new()
                };
                let account = Account {
                    id,
                    account_type,
                    cards,
                    status: AccountStatus::Active,
                    balance: 0.0,
                };
                state
                    .accounts
                    .entry(user_id.clone())
                    .or_default()
                    .push(account.clone());
                OpenAccountResponse { account }
            });
        ready(result)
    }

    fn get_accounts<'a>(&'a self, user_id: &'a UserId) -> GatewayFuture<'a, GetAccountsResponse> {
        let mut state = self.lock();
        let result = self.record(&mut state, GatewayCall::GetAccounts).map(|()| {
            GetAccountsResponse {
                accounts: state.accounts.get(user_id).cloned().unwrap_or_default(),
            }
        });
        ready(result)
    }
}

impl CardsGateway for RecordingGateway {
    fn issue_card<'a>(
        &'a self,
        _user_id: &'a UserId,
        account_id: &'a AccountId,
        card_type: CardType,
    ) -> GatewayFuture<'a, IssueCardResponse> {
        let mut state = self.lock();
        let result = self
            .record(&mut state, GatewayCall::IssueCard(card_type))
            .map(|()| {
                let card = Self::card(&mut state, account_id, card_type);
                if let Some(account) = state.account_mut(account_id) {
                    account.cards.push(card.clone());
                }
                IssueCardResponse { card }
            });
        ready(result)
    }
}

impl OperationsGateway for RecordingGateway {
    fn fakes(&self) -> &dyn FakeData {
        self.fakes.as_ref()
    }

    fn make_operation(
        &self,
        request: MakeOperationRequest,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        let mut state = self.lock();
        let operation_type = request.operation_type();
        let result = self
            .record(&mut state, GatewayCall::MakeOperation(operation_type))
            .map(|()| {
                let (status, amount, card_id, category) = match &request {
                    MakeOperationRequest::Fee(op)
                    | MakeOperationRequest::TopUp(op)
                    | MakeOperationRequest::Cashback(op) => {
                        (op.base.status, op.base.amount, Some(op.card_id.clone()), String::new())
                    }
                    MakeOperationRequest::Transfer(op) => {
                        (op.base.status, op.base.amount, None, String::new())
                    }
                    MakeOperationRequest::Purchase(op) => (
                        op.card.base.status,
                        op.card.base.amount,
                        Some(op.card.card_id.clone()),
                        op.category.clone(),
                    ),
                    MakeOperationRequest::BillPayment(op) => (
                        op.card.base.status,
                        op.card.base.amount,
                        Some(op.card.card_id.clone()),
                        String::new(),
                    ),
                    MakeOperationRequest::CashWithdrawal(op) => (
                        op.card.base.status,
                        op.card.base.amount,
                        Some(op.card.card_id.clone()),
                        String::new(),
                    ),
                };
                let operation = Operation {
                    id: OperationId::from_string(state.next_id("operation")),
                    operation_type,
                    status,
                    amount,
                    card_id,
                    category,
                    created_at: String::new(),
                    account_id: request.account_id().clone(),
                };
                state.operations.push(operation.clone());
                state.requests.push(request);
                MakeOperationResponse { operation }
            });
        ready(result)
    }

    fn get_operation<'a>(
        &'a self,
        operation_id: &'a OperationId,
    ) -> GatewayFuture<'a, GetOperationResponse> {
        let mut state = self.lock();
        let result = self.record(&mut state, GatewayCall::GetOperation).and_then(|()| {
            state
                .operations
                .iter()
                .find(|op| &op.id == operation_id)
                .cloned()
                .map(|operation| GetOperationResponse { operation })
                .ok_or_else(|| not_found(GatewayCall::GetOperation, operation_id))
        });
        ready(result)
    }

    fn get_operations<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetOperationsResponse> {
        let mut state = self.lock();
        let result = self.record(&mut state, GatewayCall::GetOperations).map(|()| {
            GetOperationsResponse {
                operations: state
                    .operations
                    .iter()
                    .filter(|op| &op.account_id == account_id)
                    .cloned()
                    .collect(),
            }
        });
        ready(result)
    }

    fn get_operations_summary<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetOperationsSummaryResponse> {
        let mut state = self.lock();
        let result = self
            .record(&mut state, GatewayCall::GetOperationsSummary)
            .map(|()| {
                let mut summary = OperationsSummary {
                    spent_amount: 0.0,
                    received_amount: 0.0,
                    cashback_amount: 0.0,
                };
                for op in state.operations.iter().filter(|op| &op.account_id == account_id) {
                    match op.operation_type {
                        OperationType::TopUp => summary.received_amount += op.amount,
                        OperationType::Cashback => summary.cashback_amount += op.amount,
                        _ => summary.spent_amount += op.amount,
                    }
                }
                GetOperationsSummaryResponse { summary }
            });
        ready(result)
    }

    fn get_operation_receipt<'a>(
        &'a self,
        operation_id: &'a OperationId,
    ) -> GatewayFuture<'a, GetOperationReceiptResponse> {
        let mut state = self.lock();
        let result = self
            .record(&mut state, GatewayCall::GetOperationReceipt)
            .map(|()| GetOperationReceiptResponse {
                receipt: OperationReceipt {
                    url: format!("http://documents.local/receipts/{operation_id}"),
                    document: format!("receipt for {operation_id}"),
                },
            });
        ready(result)
    }
}

impl DocumentsGateway for RecordingGateway {
    fn get_tariff_document<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetTariffDocumentResponse> {
        let mut state = self.lock();
        let result = self
            .record(&mut state, GatewayCall::GetTariffDocument)
            .map(|()| GetTariffDocumentResponse {
                tariff: Document {
                    url: format!("http://documents.local/tariffs/{account_id}"),
                    document: "tariff".into(),
                },
            });
        ready(result)
    }

    fn get_contract_document<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetContractDocumentResponse> {
        let mut state = self.lock();
        let result = self
            .record(&mut state, GatewayCall::GetContractDocument)
            .map(|()| GetContractDocumentResponse {
                contract: Document {
                    url: format!("http://documents.local/contracts/{account_id}"),
                    document: "contract".into(),
                },
            });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_card_accounts_come_with_a_virtual_card() {
        let gateway = Arc::new(RecordingGateway::new());
        let clients = gateway.clone().clients();

        let user = clients.users.create_user().await.unwrap().user;
        let debit = clients
            .accounts
            .open_debit_card_account(&user.id)
            .await
            .unwrap()
            .account;
        let deposit = clients
            .accounts
            .open_deposit_account(&user.id)
            .await
            .unwrap()
            .account;

        assert_eq!(debit.cards.len(), 1);
        assert_eq!(debit.cards[0].card_type, CardType::Virtual);
        assert!(deposit.cards.is_empty());
        assert_eq!(gateway.total_calls(), 3);
    }

    #[tokio::test]
    async fn test_issued_cards_show_up_in_get_accounts() {
        let gateway = Arc::new(RecordingGateway::new().without_auto_issued_cards());
        let clients = gateway.clone().clients();

        let user = clients.users.create_user().await.unwrap().user;
        let account = clients
            .accounts
            .open_credit_card_account(&user.id)
            .await
            .unwrap()
            .account;
        assert!(account.cards.is_empty());

        clients
            .cards
            .issue_physical_card(&user.id, &account.id)
            .await
            .unwrap();

        let accounts = clients.accounts.get_accounts(&user.id).await.unwrap().accounts;
        assert_eq!(accounts[0].cards.len(), 1);
        assert_eq!(accounts[0].cards[0].card_type, CardType::Physical);
    }

    #[tokio::test]
    async fn test_fail_on_rejects_only_the_nth_call() {
        let gateway = Arc::new(RecordingGateway::new().fail_on(GatewayCall::CreateUser, 2));
        let clients = gateway.clone().clients();

        assert!(clients.users.create_user().await.is_ok());
        let err = clients.users.create_user().await.unwrap_err();
        assert!(matches!(err, GatewayError::Rejected { .. }));
        assert!(clients.users.create_user().await.is_ok());
        assert_eq!(gateway.count(GatewayCall::CreateUser), 3);
    }

    #[tokio::test]
    async fn test_operations_are_recorded_and_summarised() {
        let gateway = Arc::new(RecordingGateway::new());
        let clients = gateway.clone().clients();
        let card_id = CardId::from("card-x");
        let account_id = AccountId::from("account-x");

        clients
            .operations
            .make_top_up_operation(&card_id, &account_id)
            .await
            .unwrap();
        let purchase = clients
            .operations
            .make_purchase_operation(&card_id, &account_id)
            .await
            .unwrap()
            .operation;

        let summary = clients
            .operations
            .get_operations_summary(&account_id)
            .await
            .unwrap()
            .summary;
        assert_eq!(summary.spent_amount, purchase.amount);
        assert_eq!(gateway.operations().len(), 2);
        assert_eq!(
            gateway.count(GatewayCall::MakeOperation(OperationType::Purchase)),
            1
        );
    }
}
