use std::sync::Arc;

use bankload_gateway::GatewayClients;
use bankload_models::{AccountId, UserId};
use bankload_seeder::seeder::LoadedSeeds;
use tracing::debug;

use super::{TaskError, TaskFuture, TaskSet};
use crate::environment::LoadEnvironment;

const WEIGHTS: [u32; 2] = [4, 1];

/// An existing user checking accounts and occasionally issuing a virtual
/// card for their first debit card account.
pub struct IssueVirtualCardTaskSet {
    clients: GatewayClients,
    seeds: Arc<LoadedSeeds>,
    selected: Option<(UserId, AccountId)>,
}

impl IssueVirtualCardTaskSet {
    pub fn new(env: &LoadEnvironment) -> Self {
        Self {
            clients: env.clients.clone(),
            seeds: env.seeds.clone(),
            selected: None,
        }
    }
}

impl TaskSet for IssueVirtualCardTaskSet {
    fn name(&self) -> &'static str {
        "issue-virtual-card"
    }

    fn on_start(&mut self) -> TaskFuture<'_> {
        let selected = self
            .seeds
            .get_random_user()
            .map_err(|e| TaskError::stop(e.to_string()))
            .and_then(|user| {
                let account = user.debit_card_accounts.first().ok_or_else(|| {
                    TaskError::stop(format!("user {} has no debit card accounts", user.user_id))
                })?;
                debug!(user_id = %user.user_id, account_id = %account.account_id, "User ready");
                Ok((user.user_id.clone(), account.account_id.clone()))
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
            let (user_id, account_id) = self
                .selected
                .as_ref()
                .ok_or_else(|| TaskError::stop("no account selected"))?;
            match index {
                0 => {
                    self.clients.accounts.get_accounts(user_id).await?;
                }
                1 => {
                    self.clients
                        .cards
                        .issue_virtual_card(user_id, account_id)
                        .await?;
                }
                _ => return Err(TaskError::unknown_task(self.name(), index)),
            }
            Ok(())
        })
    }
}
