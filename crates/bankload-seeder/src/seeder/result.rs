//! Seed results.
//!
//! A result mirrors the plan that produced it: every vector has exactly as
//! many entries as the matching count in the plan.

use std::fmt;

use bankload_models::{AccountId, CardId, OperationId, UserId};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::SeedError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedCardResult {
    pub card_id: CardId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedOperationResult {
    pub operation_id: OperationId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedAccountResult {
    pub account_id: AccountId,
    #[serde(default)]
    pub physical_cards: Vec<SeedCardResult>,
    #[serde(default)]
    pub virtual_cards: Vec<SeedCardResult>,
    #[serde(default)]
    pub top_up_operations: Vec<SeedOperationResult>,
    #[serde(default)]
    pub purchase_operations: Vec<SeedOperationResult>,
    #[serde(default)]
    pub transfer_operations: Vec<SeedOperationResult>,
    #[serde(default)]
    pub cash_withdrawal_operations: Vec<SeedOperationResult>,
}

impl SeedAccountResult {
    /// An account with no cards or operations.
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            physical_cards: Vec::new(),
            virtual_cards: Vec::new(),
            top_up_operations: Vec::new(),
            purchase_operations: Vec::new(),
            transfer_operations: Vec::new(),
            cash_withdrawal_operations: Vec::new(),
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &SeedCardResult> {
        self.physical_cards.iter().chain(&self.virtual_cards)
    }

    pub fn operations(&self) -> impl Iterator<Item = &SeedOperationResult> {
        self.top_up_operations
            .iter()
            .chain(&self.purchase_operations)
            .chain(&self.transfer_operations)
            .chain(&self.cash_withdrawal_operations)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedUserResult {
    pub user_id: UserId,
    #[serde(default)]
    pub deposit_accounts: Vec<SeedAccountResult>,
    #[serde(default)]
    pub savings_accounts: Vec<SeedAccountResult>,
    #[serde(default)]
    pub debit_card_accounts: Vec<SeedAccountResult>,
    #[serde(default)]
    pub credit_card_accounts: Vec<SeedAccountResult>,
}

impl SeedUserResult {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            deposit_accounts: Vec::new(),
            savings_accounts: Vec::new(),
            debit_card_accounts: Vec::new(),
            credit_card_accounts: Vec::new(),
        }
    }

    /// All accounts in declared order: deposit, savings, debit, credit.
    pub fn accounts(&self) -> impl Iterator<Item = &SeedAccountResult> {
        self.deposit_accounts
            .iter()
            .chain(&self.savings_accounts)
            .chain(&self.debit_card_accounts)
            .chain(&self.credit_card_accounts)
    }
}

/// Every user a plan created, in creation order.
///
/// A stored record must carry `users` and nothing else, so an unrelated or
/// truncated document never decodes as an empty result.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SeedsResult {
    pub users: Vec<SeedUserResult>,
}

impl SeedsResult {
    pub fn new(users: Vec<SeedUserResult>) -> Self {
        Self { users }
    }

    /// A uniformly chosen user.
    pub fn get_random_user(&self) -> Result<&SeedUserResult, SeedError> {
        self.users
            .choose(&mut rand::thread_rng())
            .ok_or(SeedError::EmptySelectionPool)
    }

    pub fn summary(&self) -> SeedsSummary {
        let mut summary = SeedsSummary {
            users: self.users.len(),
            ..Default::default()
        };

        for user in &self.users {
            summary.deposit_accounts += user.deposit_accounts.len();
            summary.savings_accounts += user.savings_accounts.len();
            summary.debit_card_accounts += user.debit_card_accounts.len();
            summary.credit_card_accounts += user.credit_card_accounts.len();
            for account in user.accounts() {
                summary.cards += account.cards().count();
                summary.operations += account.operations().count();
            }
        }

        summary
    }
}

/// Entity totals of a result, for logs and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedsSummary {
    pub users: usize,
    pub deposit_accounts: usize,
    pub savings_accounts: usize,
    pub debit_card_accounts: usize,
    pub credit_card_accounts: usize,
    pub cards: usize,
    pub operations: usize,
}

impl fmt::Display for SeedsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} users, accounts (deposit {}, savings {}, debit card {}, credit card {}), {} cards, {} operations",
            self.users,
            self.deposit_accounts,
            self.savings_accounts,
            self.debit_card_accounts,
            self.credit_card_accounts,
            self.cards,
            self.operations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> SeedUserResult {
        let mut user = SeedUserResult::new(UserId::from(id));
        let mut account = SeedAccountResult::new(AccountId::from(format!("{id}-credit")));
        account.physical_cards.push(SeedCardResult {
            card_id: CardId::from(format!("{id}-card")),
        });
        account.purchase_operations.push(SeedOperationResult {
            operation_id: OperationId::from(format!("{id}-op")),
        });
        user.credit_card_accounts.push(account);
        user
    }

    #[test]
    fn test_random_user_on_empty_result_fails() {
        let result = SeedsResult::default();
        assert!(matches!(
            result.get_random_user(),
            Err(SeedError::EmptySelectionPool)
        ));
    }

    #[test]
    fn test_random_user_comes_from_pool() {
        let result = SeedsResult::new(vec![user("a"), user("b")]);
        for _ in 0..20 {
            let picked = result.get_random_user().unwrap();
            assert!(result.users.contains(picked));
        }
    }

    #[test]
    fn test_summary_counts_nested_entities() {
        let summary = SeedsResult::new(vec![user("a"), user("b")]).summary();
        assert_eq!(summary.users, 2);
        assert_eq!(summary.credit_card_accounts, 2);
        assert_eq!(summary.debit_card_accounts, 0);
        assert_eq!(summary.cards, 2);
        assert_eq!(summary.operations, 2);
    }

    #[test]
    fn test_root_without_users_is_rejected() {
        assert!(serde_json::from_str::<SeedsResult>("{}").is_err());
        assert!(serde_json::from_str::<SeedsResult>(r#"{"unrelated": true}"#).is_err());
        assert!(serde_json::from_str::<SeedsResult>(r#"{"users": [], "extra": 1}"#).is_err());

        let empty: SeedsResult = serde_json::from_str(r#"{"users": []}"#).unwrap();
        assert!(empty.users.is_empty());
    }

    #[test]
    fn test_missing_sequences_decode_as_empty() {
        let json = r#"{"users": [{"user_id": "u-1", "debit_card_accounts": [{"account_id": "a-1"}]}]}"#;
        let result: SeedsResult = serde_json::from_str(json).unwrap();
        assert!(result.users[0].deposit_accounts.is_empty());
        assert!(result.users[0].debit_card_accounts[0].virtual_cards.is_empty());
    }
}
