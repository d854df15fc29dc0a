use std::sync::Arc;

use bankload_gateway::GatewayClients;
use bankload_models::{AccountId, UserId};
use bankload_seeder::seeder::{LoadedSeeds, SeedUserResult};
use tracing::debug;

use super::{TaskError, TaskFuture, TaskSet};
use crate::environment::LoadEnvironment;

const WEIGHTS: [u32; 3] = [3, 6, 4];

/// An existing user browsing operation history: accounts list, operations
/// of one account and their summary.
pub struct GetOperationsTaskSet {
    clients: GatewayClients,
    seeds: Arc<LoadedSeeds>,
    selected: Option<(UserId, AccountId)>,
}

impl GetOperationsTaskSet {
    pub fn new(env: &LoadEnvironment) -> Self {
        Self {
            clients: env.clients.clone(),
            seeds: env.seeds.clone(),
            selected: None,
        }
    }

    fn selected(&self) -> Result<&(UserId, AccountId), TaskError> {
        self.selected
            .as_ref()
            .ok_or_else(|| TaskError::stop("no account selected"))
    }
}

/// Prefers card accounts, where operations happen.
fn select_account(user: &SeedUserResult) -> Option<&AccountId> {
    user.debit_card_accounts
        .first()
        .or_else(|| user.credit_card_accounts.first())
        .or_else(|| user.savings_accounts.first())
        .or_else(|| user.deposit_accounts.first())
        .map(|account| &account.account_id)
}

impl TaskSet for GetOperationsTaskSet {
    fn name(&self) -> &'static str {
        "get-operations"
    }

    fn on_start(&mut self) -> TaskFuture<'_> {
        let selected = self
            .seeds
            .get_random_user()
            .map_err(|e| TaskError::stop(e.to_string()))
            .and_then(|user| {
                let account_id = select_account(user).ok_or_else(|| {
                    TaskError::stop(format!("user {} has no accounts", user.user_id))
                })?;
                debug!(user_id = %user.user_id, account_id = %account_id, "User ready");
                Ok((user.user_id.clone(), account_id.clone()))
            });

        Box::pin(async move {
            self.selected = Some(selected?);
            Ok(())
        })
    }

    fn weights(&self) -> &'static [u32] {
        &WEIGHTS
    }

    fn run_task(&mut self, index: usize) -> TaskFuture<'_> {
        Box::pin(async move {
            let (user_id, account_id) = self.selected()?;
            match index {
                0 => {
                    self.clients.accounts.get_accounts(user_id).await?;
                }
                1 => {
                    self.clients.operations.get_operations(account_id).await?;
                }
                2 => {
                    self.clients
                        .operations
                        .get_operations_summary(account_id)
                        .await?;
                }
                _ => return Err(TaskError::unknown_task(self.name(), index)),
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::test_support::{account, env_with, user};
    use bankload_gateway::mock::{GatewayCall, RecordingGateway};

    #[test]
    fn test_select_account_prefers_debit_then_credit() {
        let mut seed = user("u-1");
        seed.deposit_accounts.push(account("deposit", None));
        assert_eq!(select_account(&seed).map(AccountId::as_str), Some("deposit"));

        seed.savings_accounts.push(account("savings", None));
        assert_eq!(select_account(&seed).map(AccountId::as_str), Some("savings"));

        seed.credit_card_accounts.push(account("credit", None));
        assert_eq!(select_account(&seed).map(AccountId::as_str), Some("credit"));

        seed.debit_card_accounts.push(account("debit", None));
        assert_eq!(select_account(&seed).map(AccountId::as_str), Some("debit"));
    }

    #[tokio::test]
    async fn test_user_without_accounts_stops() {
        let gateway = Arc::new(RecordingGateway::new());
        let env = env_with(&gateway, vec![user("u-1")]);
        let mut task_set = GetOperationsTaskSet::new(&env);

        let err = task_set.on_start().await.unwrap_err();

        assert!(matches!(err, TaskError::Stop(reason) if reason.contains("u-1")));
    }

    #[tokio::test]
    async fn test_empty_seeds_stop_the_user() {
        let gateway = Arc::new(RecordingGateway::new());
        let env = env_with(&gateway, Vec::new());
        let mut task_set = GetOperationsTaskSet::new(&env);

        assert!(matches!(task_set.on_start().await, Err(TaskError::Stop(_))));
    }

    #[tokio::test]
    async fn test_tasks_query_the_selected_account() {
        let gateway = Arc::new(RecordingGateway::new());
        let mut seed = user("u-1");
        seed.credit_card_accounts.push(account("credit", None));
        let env = env_with(&gateway, vec![seed]);
        let mut task_set = GetOperationsTaskSet::new(&env);

        task_set.on_start().await.unwrap();
        for index in 0..task_set.weights().len() {
            task_set.run_task(index).await.unwrap();
        }

        assert_eq!(
            gateway.calls(),
            vec![
                GatewayCall::GetAccounts,
                GatewayCall::GetOperations,
                GatewayCall::GetOperationsSummary
            ]
        );
        assert!(matches!(task_set.run_task(3).await, Err(TaskError::Stop(_))));
    }
}
