use bankload_gateway::GatewayClients;
use bankload_models::{AccountId, UserId};

use super::{TaskError, TaskFuture, TaskSet};
use crate::environment::LoadEnvironment;

const WEIGHTS: [u32; 4] = [1, 1, 1, 1];

/// A new user going through onboarding in order: create user, open a debit
/// card account, check accounts, issue a physical card. Steps whose
/// prerequisites failed are skipped until the next round.
pub struct NewUserIssuePhysicalCardTaskSet {
    clients: GatewayClients,
    user_id: Option<UserId>,
    account_id: Option<AccountId>,
}

impl NewUserIssuePhysicalCardTaskSet {
    pub fn new(env: &LoadEnvironment) -> Self {
        Self {
            clients: env.clients.clone(),
            user_id: None,
            account_id: None,
        }
    }
}

impl TaskSet for NewUserIssuePhysicalCardTaskSet {
    fn name(&self) -> &'static str {
        "new-user-issue-physical-card"
    }

    fn weights(&self) -> &'static [u32] {
        &WEIGHTS
    }

    fn is_sequential(&self) -> bool {
        true
    }

    fn run_task(&mut self, index: usize) -> TaskFuture<'_> {
        Box::pin(async move {
            match index {
                0 => {
                    self.user_id = None;
                    self.account_id = None;
                    let response = self.clients.users.create_user().await?;
                    self.user_id = Some(response.user.id);
                }
                1 => {
                    let Some(user_id) = &self.user_id else {
                        return Ok(());
                    };
                    let response = self.clients.accounts.open_debit_card_account(user_id).await?;
                    self.account_id = Some(response.account.id);
                }
                2 => {
                    let Some(user_id) = &self.user_id else {
                        return Ok(());
                    };
                    self.clients.accounts.get_accounts(user_id).await?;
                }
                3 => {
                    let (Some(user_id), Some(account_id)) = (&self.user_id, &self.account_id)
                    else {
                        return Ok(());
                    };
                    self.clients
                        .cards
                        .issue_physical_card(user_id, account_id)
                        .await?;
                }
                _ => return Err(TaskError::unknown_task(self.name(), index)),
            }
            Ok(())
        })
    }
}
