//! Task sets executed by simulated users.
//!
//! A task set owns the per-user state of one simulated user. The runner calls
//! [`TaskSet::on_start`] once, then repeatedly picks a task index (weighted
//! at random, or in declared order for sequential sets) and awaits
//! [`TaskSet::run_task`].

mod get_accounts;
mod get_operations;
mod issue_virtual_card;
mod make_purchase_operation;
mod new_user_issue_physical_card;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;

use bankload_gateway::GatewayError;
use bankload_seeder::seeder::{
    ExistingUserGetOperationsSeedsScenario, ExistingUserIssueVirtualCardSeedsScenario,
    ExistingUserMakePurchaseOperationSeedsScenario, SeedsScenario,
};

use crate::environment::LoadEnvironment;

pub use get_accounts::GetAccountsTaskSet;
pub use get_operations::GetOperationsTaskSet;
pub use issue_virtual_card::IssueVirtualCardTaskSet;
pub use make_purchase_operation::MakePurchaseOperationTaskSet;
pub use new_user_issue_physical_card::NewUserIssuePhysicalCardTaskSet;

pub type TaskFuture<'a> = Pin<Box<dyn Future<Output = Result<(), TaskError>> + Send + 'a>>;

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Gateway call failed: {0}")]
    Gateway(#[from] GatewayError),

    /// The simulated user cannot continue, e.g. its seed user lacks the
    /// account the task set works on.
    #[error("Simulated user stopped: {0}")]
    Stop(String),
}

impl TaskError {
    pub fn stop(reason: impl Into<String>) -> Self {
        Self::Stop(reason.into())
    }

    pub(crate) fn unknown_task(task_set: &str, index: usize) -> Self {
        Self::Stop(format!("{task_set} has no task {index}"))
    }
}

pub trait TaskSet: Send {
    fn name(&self) -> &'static str;

    /// Runs once before the first task.
    fn on_start(&mut self) -> TaskFuture<'_> {
        Box::pin(std::future::ready(Ok(())))
    }

    /// Relative weight of each task; the task count is `weights().len()`.
    fn weights(&self) -> &'static [u32];

    fn run_task(&mut self, index: usize) -> TaskFuture<'_>;

    /// Sequential sets run their tasks in declared order, cycling.
    fn is_sequential(&self) -> bool {
        false
    }
}

/// The task sets a load run can be started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSetKind {
    GetOperations,
    IssueVirtualCard,
    MakePurchaseOperation,
    NewUserIssuePhysicalCard,
    GetAccounts,
}

impl TaskSetKind {
    pub const ALL: [TaskSetKind; 5] = [
        Self::GetOperations,
        Self::IssueVirtualCard,
        Self::MakePurchaseOperation,
        Self::NewUserIssuePhysicalCard,
        Self::GetAccounts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetOperations => "get-operations",
            Self::IssueVirtualCard => "issue-virtual-card",
            Self::MakePurchaseOperation => "make-purchase-operation",
            Self::NewUserIssuePhysicalCard => "new-user-issue-physical-card",
            Self::GetAccounts => "get-accounts",
        }
    }

    /// The seeds the task set consumes, if any.
    pub fn seeds_scenario(self) -> Option<Arc<dyn SeedsScenario>> {
        match self {
            Self::GetOperations => Some(Arc::new(ExistingUserGetOperationsSeedsScenario)),
            Self::IssueVirtualCard => Some(Arc::new(ExistingUserIssueVirtualCardSeedsScenario)),
            Self::MakePurchaseOperation => {
                Some(Arc::new(ExistingUserMakePurchaseOperationSeedsScenario))
            }
            Self::NewUserIssuePhysicalCard | Self::GetAccounts => None,
        }
    }

    /// A fresh task set for one simulated user.
    pub fn build(self, env: &LoadEnvironment) -> Box<dyn TaskSet> {
        match self {
            Self::GetOperations => Box::new(GetOperationsTaskSet::new(env)),
            Self::IssueVirtualCard => Box::new(IssueVirtualCardTaskSet::new(env)),
            Self::MakePurchaseOperation => Box::new(MakePurchaseOperationTaskSet::new(env)),
            Self::NewUserIssuePhysicalCard => Box::new(NewUserIssuePhysicalCardTaskSet::new(env)),
            Self::GetAccounts => Box::new(GetAccountsTaskSet::new(env)),
        }
    }
}

impl fmt::Display for TaskSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskSetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown task set '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_set_kind_parses_its_own_name() {
        for kind in TaskSetKind::ALL {
            assert_eq!(kind.as_str().parse::<TaskSetKind>(), Ok(kind));
        }
        assert!("bogus".parse::<TaskSetKind>().is_err());
    }

    #[test]
    fn test_only_existing_user_sets_need_seeds() {
        assert_eq!(
            TaskSetKind::GetOperations
                .seeds_scenario()
                .map(|s| s.scenario().to_string()),
            Some("existing_user_get_operations".to_string())
        );
        assert!(TaskSetKind::GetAccounts.seeds_scenario().is_none());
        assert!(TaskSetKind::NewUserIssuePhysicalCard.seeds_scenario().is_none());
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use bankload_config::LoadConfig;
    use bankload_gateway::mock::RecordingGateway;
    use bankload_models::{AccountId, CardId, UserId};
    use bankload_seeder::seeder::{
        LoadedSeeds, SeedAccountResult, SeedCardResult, SeedUserResult, SeedsResult,
    };

    use crate::environment::LoadEnvironment;

    pub(crate) fn env_with(gateway: &Arc<RecordingGateway>, users: Vec<SeedUserResult>) -> LoadEnvironment {
        LoadEnvironment::new(
            gateway.clone().clients(),
            Arc::new(LoadedSeeds::new(SeedsResult::new(users))),
            LoadConfig::default(),
        )
    }

    pub(crate) fn account(id: &str, physical_card: Option<&str>) -> SeedAccountResult {
        let mut account = SeedAccountResult::new(AccountId::from(id));
        if let Some(card) = physical_card {
            account.physical_cards.push(SeedCardResult {
                card_id: CardId::from(card),
            });
        }
        account
    }

    pub(crate) fn user(id: &str) -> SeedUserResult {
        SeedUserResult::new(UserId::from(id))
    }
}
