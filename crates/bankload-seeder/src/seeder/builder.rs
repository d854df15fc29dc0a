//! Turns a [`SeedsPlan`] into a [`SeedsResult`] through gateway calls.
//!
//! Users are built one after another. Inside a user, accounts are opened in
//! the fixed order deposit, savings, debit card, credit card. A card account
//! issues its physical cards, then its virtual cards, then makes its top-ups,
//! purchases and cash withdrawals. Transfers run last, once every account of
//! the user exists, each going to the next account of the same user in that
//! order (wrapping around).
//!
//! Any failed call aborts the whole build; no partial result is returned.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use bankload_gateway::{GatewayClients, GatewayFuture};
use bankload_models::accounts::{Account, AccountType};
use bankload_models::cards::CardType;
use bankload_models::operations::OperationType;
use bankload_models::{AccountId, CardId, UserId};
use tracing::{debug, error, info};

use super::plan::{SeedAccountsPlan, SeedUsersPlan, SeedsPlan};
use super::result::{
    SeedAccountResult, SeedCardResult, SeedOperationResult, SeedUserResult, SeedsResult,
};
use crate::error::{BuildStage, SeedError};

/// Builds seed data against the gateway behind `clients`.
pub struct SeedsBuilder {
    clients: GatewayClients,
    issued_calls: AtomicUsize,
}

impl SeedsBuilder {
    pub fn new(clients: GatewayClients) -> Self {
        Self {
            clients,
            issued_calls: AtomicUsize::new(0),
        }
    }

    /// Gateway calls issued by this builder so far.
    pub fn issued_calls(&self) -> usize {
        self.issued_calls.load(Ordering::Relaxed)
    }

    /// Builds `plan.users.count` users in creation order.
    pub async fn build(&self, plan: &SeedsPlan) -> Result<SeedsResult, SeedError> {
        plan.validate()?;

        let start_time = Instant::now();
        let calls_before = self.issued_calls();
        info!(
            users = plan.users.count,
            expected_calls = plan.expected_calls(),
            "Building seeds"
        );

        let mut users = Vec::with_capacity(plan.users.count);
        for _ in 0..plan.users.count {
            users.push(self.build_user(&plan.users).await?);
        }

        info!(
            users = users.len(),
            issued_calls = self.issued_calls() - calls_before,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Seeds built"
        );

        Ok(SeedsResult::new(users))
    }

    /// Creates one user and every account `plan` asks for.
    pub async fn build_user(&self, plan: &SeedUsersPlan) -> Result<SeedUserResult, SeedError> {
        let user = self
            .call(BuildStage::CreateUser, self.clients.users.create_user())
            .await?
            .user;
        debug!(user_id = %user.id, "Seeded user");

        let mut result = SeedUserResult::new(user.id);
        let user_id = &result.user_id;

        let mut deposit_accounts = Vec::with_capacity(plan.deposit_accounts.count);
        for _ in 0..plan.deposit_accounts.count {
            deposit_accounts.push(self.build_deposit_account_result(user_id).await?);
        }

        let mut savings_accounts = Vec::with_capacity(plan.savings_accounts.count);
        for _ in 0..plan.savings_accounts.count {
            savings_accounts.push(self.build_savings_account_result(user_id).await?);
        }

        let mut debit_card_accounts = Vec::with_capacity(plan.debit_card_accounts.count);
        for _ in 0..plan.debit_card_accounts.count {
            debit_card_accounts.push(
                self.build_debit_card_account_result(user_id, &plan.debit_card_accounts)
                    .await?,
            );
        }

        let mut credit_card_accounts = Vec::with_capacity(plan.credit_card_accounts.count);
        for _ in 0..plan.credit_card_accounts.count {
            credit_card_accounts.push(
                self.build_credit_card_account_result(user_id, &plan.credit_card_accounts)
                    .await?,
            );
        }

        result.deposit_accounts = deposit_accounts;
        result.savings_accounts = savings_accounts;
        result.debit_card_accounts = debit_card_accounts;
        result.credit_card_accounts = credit_card_accounts;

        self.make_transfers(&mut result, plan).await?;

        Ok(result)
    }

    pub async fn build_deposit_account_result(
        &self,
        user_id: &UserId,
    ) -> Result<SeedAccountResult, SeedError> {
        let account = self.open_account(user_id, AccountType::Deposit).await?;
        Ok(SeedAccountResult::new(account.id))
    }

    pub async fn build_savings_account_result(
        &self,
        user_id: &UserId,
    ) -> Result<SeedAccountResult, SeedError> {
        let account = self.open_account(user_id, AccountType::Savings).await?;
        Ok(SeedAccountResult::new(account.id))
    }

    /// Opens a debit card account with its cards and card operations.
    ///
    /// Transfers in `plan` are left to [`SeedsBuilder::build_user`], which
    /// knows the counterpart accounts.
    pub async fn build_debit_card_account_result(
        &self,
        user_id: &UserId,
        plan: &SeedAccountsPlan,
    ) -> Result<SeedAccountResult, SeedError> {
        self.build_card_account_result(user_id, AccountType::DebitCard, plan)
            .await
    }

    /// Opens a credit card account with its cards and card operations.
    pub async fn build_credit_card_account_result(
        &self,
        user_id: &UserId,
        plan: &SeedAccountsPlan,
    ) -> Result<SeedAccountResult, SeedError> {
        self.build_card_account_result(user_id, AccountType::CreditCard, plan)
            .await
    }

    async fn build_card_account_result(
        &self,
        user_id: &UserId,
        account_type: AccountType,
        plan: &SeedAccountsPlan,
    ) -> Result<SeedAccountResult, SeedError> {
        let account = self.open_account(user_id, account_type).await?;
        let mut result = SeedAccountResult::new(account.id.clone());

        result.physical_cards = self
            .issue_cards(user_id, &account.id, CardType::Physical, plan.physical_cards.count)
            .await?;
        result.virtual_cards = self
            .issue_cards(user_id, &account.id, CardType::Virtual, plan.virtual_cards.count)
            .await?;

        if plan.card_operations_per_account() == 0 {
            return Ok(result);
        }

        let card_id = operation_card(&account, &result).ok_or_else(|| SeedError::MissingCard {
            stage: BuildStage::MakeOperation(first_card_operation(plan)),
            account_id: account.id.clone(),
        })?;

        result.top_up_operations = self
            .make_card_operations(&card_id, &account.id, CardOperationKind::TopUp, plan.top_up_operations.count)
            .await?;
        result.purchase_operations = self
            .make_card_operations(&card_id, &account.id, CardOperationKind::Purchase, plan.purchase_operations.count)
            .await?;
        result.cash_withdrawal_operations = self
            .make_card_operations(
                &card_id,
                &account.id,
                CardOperationKind::CashWithdrawal,
                plan.cash_withdrawal_operations.count,
            )
            .await?;

        Ok(result)
    }

    async fn open_account(
        &self,
        user_id: &UserId,
        account_type: AccountType,
    ) -> Result<Account, SeedError> {
        let account = self
            .call(
                BuildStage::OpenAccount(account_type),
                self.clients.accounts.open_account(user_id, account_type),
            )
            .await?
            .account;
        debug!(user_id = %user_id, account_id = %account.id, ?account_type, "Seeded account");
        Ok(account)
    }

    async fn issue_cards(
        &self,
        user_id: &UserId,
        account_id: &AccountId,
        card_type: CardType,
        count: usize,
    ) -> Result<Vec<SeedCardResult>, SeedError> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self
                .call(
                    BuildStage::IssueCard(card_type),
                    self.clients.cards.issue_card(user_id, account_id, card_type),
                )
                .await?
                .card;
            debug!(account_id = %account_id, card_id = %card.id, ?card_type, "Seeded card");
            cards.push(SeedCardResult { card_id: card.id });
        }
        Ok(cards)
    }

    async fn make_card_operations(
        &self,
        card_id: &CardId,
        account_id: &AccountId,
        kind: CardOperationKind,
        count: usize,
    ) -> Result<Vec<SeedOperationResult>, SeedError> {
        let operations = &self.clients.operations;
        let operation_type = kind.operation_type();
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            let request = match kind {
                CardOperationKind::TopUp => operations.make_top_up_operation(card_id, account_id),
                CardOperationKind::Purchase => {
                    operations.make_purchase_operation(card_id, account_id)
                }
                CardOperationKind::CashWithdrawal => {
                    operations.make_cash_withdrawal_operation(card_id, account_id)
                }
            };
            let operation = self
                .call(BuildStage::MakeOperation(operation_type), request)
                .await?
                .operation;
            debug!(account_id = %account_id, operation_id = %operation.id, ?operation_type, "Seeded operation");
            results.push(SeedOperationResult {
                operation_id: operation.id,
            });
        }
        Ok(results)
    }

    /// Makes the planned transfers of every card account of `user`.
    async fn make_transfers(
        &self,
        user: &mut SeedUserResult,
        plan: &SeedUsersPlan,
    ) -> Result<(), SeedError> {
        if !plan.has_transfers() {
            return Ok(());
        }

        let account_ids: Vec<AccountId> = user.accounts().map(|a| a.account_id.clone()).collect();
        if account_ids.len() < 2 {
            return Err(SeedError::InvalidPlan(
                "transfers need a second account per user".to_string(),
            ));
        }

        // Card accounts follow deposit and savings accounts in declared order
        let mut position = user.deposit_accounts.len() + user.savings_accounts.len();
        for (accounts, account_plan) in [
            (&mut user.debit_card_accounts, &plan.debit_card_accounts),
            (&mut user.credit_card_accounts, &plan.credit_card_accounts),
        ] {
            for account in accounts.iter_mut() {
                let counterpart = &account_ids[(position + 1) % account_ids.len()];
                for _ in 0..account_plan.transfer_operations.count {
                    let operation = self
                        .call(
                            BuildStage::MakeOperation(OperationType::Transfer),
                            self.clients
                                .operations
                                .make_transfer_operation(&account.account_id, counterpart),
                        )
                        .await?
                        .operation;
                    debug!(
                        from_account_id = %account.account_id,
                        to_account_id = %counterpart,
                        operation_id = %operation.id,
                        "Seeded transfer"
                    );
                    account.transfer_operations.push(SeedOperationResult {
                        operation_id: operation.id,
                    });
                }
                position += 1;
            }
        }

        Ok(())
    }

    async fn call<T>(&self, stage: BuildStage, future: GatewayFuture<'_, T>) -> Result<T, SeedError> {
        self.issued_calls.fetch_add(1, Ordering::Relaxed);
        future.await.map_err(|source| {
            error!(stage = %stage, error = %source, "Seeding call failed");
            SeedError::Build { stage, source }
        })
    }
}

/// Operations a seeded card account makes with its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardOperationKind {
    TopUp,
    Purchase,
    CashWithdrawal,
}

impl CardOperationKind {
    fn operation_type(self) -> OperationType {
        match self {
            Self::TopUp => OperationType::TopUp,
            Self::Purchase => OperationType::Purchase,
            Self::CashWithdrawal => OperationType::CashWithdrawal,
        }
    }
}

/// Card used for card operations: the first issued physical card, else the
/// first issued virtual card, else the first card the account opened with.
fn operation_card(account: &Account, result: &SeedAccountResult) -> Option<CardId> {
    result
        .physical_cards
        .first()
        .or_else(|| result.virtual_cards.first())
        .map(|card| card.card_id.clone())
        .or_else(|| account.cards.first().map(|card| card.id.clone()))
}

fn first_card_operation(plan: &SeedAccountsPlan) -> OperationType {
    if plan.top_up_operations.count > 0 {
        OperationType::TopUp
    } else if plan.purchase_operations.count > 0 {
        OperationType::Purchase
    } else {
        OperationType::CashWithdrawal
    }
}
