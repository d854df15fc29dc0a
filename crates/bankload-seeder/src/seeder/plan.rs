//! Declarative seed plans.
//!
//! A plan describes how many users to create and, per user, how many
//! accounts of each kind with how many cards and operations each. Every count
//! defaults to zero and a zero count means the branch is not built at all.
//! Plans deserialize from partial JSON: omitted branches are zero.

use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// Number of cards of one kind to issue per account.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SeedCardsPlan {
    pub count: usize,
}

impl SeedCardsPlan {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

/// Number of operations of one kind to make per account.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SeedOperationsPlan {
    pub count: usize,
}

impl SeedOperationsPlan {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

/// Accounts of one kind per user, with their cards and operations.
///
/// Cards and operations only apply to debit and credit card accounts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SeedAccountsPlan {
    pub count: usize,
    pub physical_cards: SeedCardsPlan,
    pub virtual_cards: SeedCardsPlan,
    pub top_up_operations: SeedOperationsPlan,
    pub purchase_operations: SeedOperationsPlan,
    pub transfer_operations: SeedOperationsPlan,
    pub cash_withdrawal_operations: SeedOperationsPlan,
}

impl SeedAccountsPlan {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn with_physical_cards(mut self, count: usize) -> Self {
        self.physical_cards = SeedCardsPlan::new(count);
        self
    }

    pub fn with_virtual_cards(mut self, count: usize) -> Self {
        self.virtual_cards = SeedCardsPlan::new(count);
        self
    }

    pub fn with_top_up_operations(mut self, count: usize) -> Self {
        self.top_up_operations = SeedOperationsPlan::new(count);
        self
    }

    pub fn with_purchase_operations(mut self, count: usize) -> Self {
        self.purchase_operations = SeedOperationsPlan::new(count);
        self
    }

    pub fn with_transfer_operations(mut self, count: usize) -> Self {
        self.transfer_operations = SeedOperationsPlan::new(count);
        self
    }

    pub fn with_cash_withdrawal_operations(mut self, count: usize) -> Self {
        self.cash_withdrawal_operations = SeedOperationsPlan::new(count);
        self
    }

    pub fn cards_per_account(&self) -> usize {
        self.physical_cards.count + self.virtual_cards.count
    }

    /// Operations that are made with a card: top-ups, purchases and cash
    /// withdrawals.
    pub fn card_operations_per_account(&self) -> usize {
        self.top_up_operations.count
            + self.purchase_operations.count
            + self.cash_withdrawal_operations.count
    }

    pub fn operations_per_account(&self) -> usize {
        self.card_operations_per_account() + self.transfer_operations.count
    }

    /// Gateway calls for all accounts of this kind of one user.
    pub fn calls(&self) -> usize {
        self.count * (1 + self.cards_per_account() + self.operations_per_account())
    }

    /// Whether accounts of this kind are built with cards or operations.
    /// Zero-count plans build nothing.
    fn builds_nested(&self) -> bool {
        self.count > 0 && self.cards_per_account() + self.operations_per_account() > 0
    }

    pub(crate) fn builds_transfers(&self) -> bool {
        self.count > 0 && self.transfer_operations.count > 0
    }
}

/// Users to create and the accounts each of them gets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SeedUsersPlan {
    pub count: usize,
    pub deposit_accounts: SeedAccountsPlan,
    pub savings_accounts: SeedAccountsPlan,
    pub debit_card_accounts: SeedAccountsPlan,
    pub credit_card_accounts: SeedAccountsPlan,
}

impl SeedUsersPlan {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn with_deposit_accounts(mut self, plan: SeedAccountsPlan) -> Self {
        self.deposit_accounts = plan;
        self
    }

    pub fn with_savings_accounts(mut self, plan: SeedAccountsPlan) -> Self {
        self.savings_accounts = plan;
        self
    }

    pub fn with_debit_card_accounts(mut self, plan: SeedAccountsPlan) -> Self {
        self.debit_card_accounts = plan;
        self
    }

    pub fn with_credit_card_accounts(mut self, plan: SeedAccountsPlan) -> Self {
        self.credit_card_accounts = plan;
        self
    }

    /// Whether any card account built for a user makes transfers.
    pub fn has_transfers(&self) -> bool {
        self.debit_card_accounts.builds_transfers() || self.credit_card_accounts.builds_transfers()
    }

    pub fn accounts_per_user(&self) -> usize {
        self.deposit_accounts.count
            + self.savings_accounts.count
            + self.debit_card_accounts.count
            + self.credit_card_accounts.count
    }

    /// Gateway calls to build one user.
    pub fn calls_per_user(&self) -> usize {
        1 + self.deposit_accounts.calls()
            + self.savings_accounts.calls()
            + self.debit_card_accounts.calls()
            + self.credit_card_accounts.calls()
    }
}

/// Root of a seed plan.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SeedsPlan {
    pub users: SeedUsersPlan,
}

impl SeedsPlan {
    pub fn new(users: SeedUsersPlan) -> Self {
        Self { users }
    }

    /// Exact number of gateway calls building this plan issues.
    pub fn expected_calls(&self) -> usize {
        self.users.count * self.users.calls_per_user()
    }

    /// Rejects plans that cannot be built as written.
    ///
    /// - Deposit and savings accounts carry no cards or operations.
    /// - A transfer goes from a card account to another account of the same
    ///   user, so a user with transfers needs at least two accounts.
    pub fn validate(&self) -> Result<(), SeedError> {
        let users = &self.users;

        for (kind, plan) in [
            ("deposit", &users.deposit_accounts),
            ("savings", &users.savings_accounts),
        ] {
            if plan.builds_nested() {
                return Err(SeedError::InvalidPlan(format!(
                    "{kind} accounts cannot have cards or operations"
                )));
            }
        }

        if users.has_transfers() && users.accounts_per_user() < 2 {
            return Err(SeedError::InvalidPlan(format!(
                "transfers need a second account per user, but each user gets {}",
                users.accounts_per_user()
            )));
        }

        Ok(())
    }
}
