use bankload_gateway::GatewayClients;
use bankload_models::UserId;

use super::{TaskError, TaskFuture, TaskSet};
use crate::environment::LoadEnvironment;

const WEIGHTS: [u32; 3] = [2, 2, 6];

/// Mixed user and deposit-account creation with frequent account listing.
/// Listing and opening use the most recently created user.
pub struct GetAccountsTaskSet {
    clients: GatewayClients,
    user_id: Option<UserId>,
}

impl GetAccountsTaskSet {
    pub fn new(env: &LoadEnvironment) -> Self {
        Self {
            clients: env.clients.clone(),
            user_id: None,
        }
    }
}

impl TaskSet for GetAccountsTaskSet {
    fn name(&self) -> &'static str {
        "get-accounts"
    }

    fn weights(&self) -> &'static [u32] {
        &WEIGHTS
    }

    fn run_task(&mut self, index: usize) -> TaskFuture<'_> {
        Box::pin(async move {
            match index {
                0 => {
                    let response = self.clients.users.create_user().await?;
                    self.user_id = Some(response.user.id);
                }
                1 => {
                    if let Some(user_id) = &self.user_id {
                        self.clients.accounts.open_deposit_account(user_id).await?;
                    }
                }
                2 => {
                    if let Some(user_id) = &self.user_id {
                        self.clients.accounts.get_accounts(user_id).await?;
                    }
                }
                _ => return Err(TaskError::unknown_task(self.name(), index)),
            }
            Ok(())
        })
    }
}
