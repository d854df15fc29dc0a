use std::sync::Arc;

use bankload_gateway::GatewayClients;
use bankload_models::{AccountId, CardId, UserId};
use bankload_seeder::seeder::{LoadedSeeds, SeedUserResult};
use tracing::debug;

use super::{TaskError, TaskFuture, TaskSet};
use crate::environment::LoadEnvironment;

const WEIGHTS: [u32; 4] = [1, 2, 2, 2];

struct Selected {
    user_id: UserId,
    account_id: AccountId,
    card_id: CardId,
}

/// An existing user paying with the physical card of their first credit
/// card account and checking the result.
pub struct MakePurchaseOperationTaskSet {
    clients: GatewayClients,
    seeds: Arc<LoadedSeeds>,
    selected: Option<Selected>,
}

impl MakePurchaseOperationTaskSet {
    pub fn new(env: &LoadEnvironment) -> Self {
        Self {
            clients: env.clients.clone(),
            seeds: env.seeds.clone(),
            selected: None,
        }
    }
}

fn select(user: &SeedUserResult) -> Result<Selected, TaskError> {
    let account = user.credit_card_accounts.first().ok_or_else(|| {
        TaskError::stop(format!("user {} has no credit card accounts", user.user_id))
    })?;
    let card = account
        .physical_cards
        .first()
        .ok_or_else(|| TaskError::stop(format!("user {} has no physical cards", user.user_id)))?;

    Ok(Selected {
        user_id: user.user_id.clone(),
        account_id: account.account_id.clone(),
        card_id: card.card_id.clone(),
    })
}

impl TaskSet for MakePurchaseOperationTaskSet {
    fn name(&self) -> &'static str {
        "make-purchase-operation"
    }

    fn on_start(&mut self) -> TaskFuture<'_> {
        let selected = self
            .seeds
            .get_random_user()
            .map_err(|e| TaskError::stop(e.to_string()))
            .and_then(select);

        Box::pin(async move {
            let selected = selected?;
            debug!(user_id = %selected.user_id, card_id = %selected.card_id, "User ready");
            self.selected = Some(selected);
            Ok(())
        })
    }

    fn weights(&self) -> &'static [u32] {
        &WEIGHTS
    }

    fn run_task(&mut self, index: usize) -> TaskFuture<'_> {
        Box::pin(async move {
            let selected = self
                .selected
                .as_ref()
                .ok_or_else(|| TaskError::stop("no card selected"))?;
            match index {
                0 => {
                    self.clients
                        .operations
                        .make_purchase_operation(&selected.card_id, &selected.account_id)
                        .await?;
                }
                1 => {
                    self.clients.accounts.get_accounts(&selected.user_id).await?;
                }
                2 => {
                    self.clients
                        .operations
                        .get_operations(&selected.account_id)
                        .await?;
                }
                3 => {
                    self.clients
                        .operations
                        .get_operations_summary(&selected.account_id)
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
    use bankload_gateway::mock::RecordingGateway;
    use bankload_models::operations::MakeOperationRequest;

    #[test]
    fn test_select_requires_physical_card() {
        let mut seed = user("u-1");
        assert!(matches!(select(&seed), Err(TaskError::Stop(r)) if r.contains("credit")));

        seed.credit_card_accounts.push(account("credit", None));
        assert!(matches!(select(&seed), Err(TaskError::Stop(r)) if r.contains("physical")));

        seed.credit_card_accounts[0] = account("credit", Some("card-1"));
        let selected = select(&seed).unwrap();
        assert_eq!(selected.card_id.as_str(), "card-1");
    }

    #[tokio::test]
    async fn test_purchase_uses_selected_card() {
        let gateway = Arc::new(RecordingGateway::new());
        let mut seed = user("u-1");
        seed.credit_card_accounts.push(account("credit", Some("card-1")));
        let env = env_with(&gateway, vec![seed]);
        let mut task_set = MakePurchaseOperationTaskSet::new(&env);

        task_set.on_start().await.unwrap();
        task_set.run_task(0).await.unwrap();

        match gateway.operations().as_slice() {
            [MakeOperationRequest::Purchase(op)] => {
                assert_eq!(op.card.card_id.as_str(), "card-1");
                assert_eq!(op.card.account_id.as_str(), "credit");
            }
            other => panic!("unexpected operations: {other:?}"),
        }
    }
}
