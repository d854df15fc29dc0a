//! Scenarios shipped with the harness.

use std::sync::Arc;

use super::plan::{SeedAccountsPlan, SeedUsersPlan, SeedsPlan};
use super::scenario::SeedsScenario;

/// 300 users, each with one credit card account carrying 5 purchases, one
/// top-up and one cash withdrawal. Consumers browse operation history.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistingUserGetOperationsSeedsScenario;

impl SeedsScenario for ExistingUserGetOperationsSeedsScenario {
    fn plan(&self) -> SeedsPlan {
        SeedsPlan::new(
            SeedUsersPlan::new(300).with_credit_card_accounts(
                SeedAccountsPlan::new(1)
                    .with_purchase_operations(5)
                    .with_top_up_operations(1)
                    .with_cash_withdrawal_operations(1),
            ),
        )
    }

    fn scenario(&self) -> &str {
        "existing_user_get_operations"
    }
}

/// 300 users, each with one debit card account to issue virtual cards for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistingUserIssueVirtualCardSeedsScenario;

impl SeedsScenario for ExistingUserIssueVirtualCardSeedsScenario {
    fn plan(&self) -> SeedsPlan {
        SeedsPlan::new(
            SeedUsersPlan::new(300).with_debit_card_accounts(SeedAccountsPlan::new(1)),
        )
    }

    fn scenario(&self) -> &str {
        "existing_user_issue_virtual_card"
    }
}

/// 300 users, each with one credit card account and one physical card to
/// pay with.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistingUserMakePurchaseOperationSeedsScenario;

impl SeedsScenario for ExistingUserMakePurchaseOperationSeedsScenario {
    fn plan(&self) -> SeedsPlan {
        SeedsPlan::new(
            SeedUsersPlan::new(300)
                .with_credit_card_accounts(SeedAccountsPlan::new(1).with_physical_cards(1)),
        )
    }

    fn scenario(&self) -> &str {
        "existing_user_make_purchase_operation"
    }
}

pub fn builtin_scenarios() -> Vec<Arc<dyn SeedsScenario>> {
    vec![
        Arc::new(ExistingUserGetOperationsSeedsScenario),
        Arc::new(ExistingUserIssueVirtualCardSeedsScenario),
        Arc::new(ExistingUserMakePurchaseOperationSeedsScenario),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeder::builder::SeedsBuilder;
    use bankload_gateway::mock::{GatewayCall, RecordingGateway};
    use bankload_models::accounts::AccountType;
    use bankload_models::cards::CardType;
    use bankload_models::operations::OperationType;

    #[test]
    fn test_builtin_plans_are_valid() {
        for scenario in builtin_scenarios() {
            assert!(scenario.plan().validate().is_ok(), "{}", scenario.scenario());
        }
    }

    #[tokio::test]
    async fn test_get_operations_scenario_call_counts() {
        let gateway = Arc::new(RecordingGateway::new());
        let builder = SeedsBuilder::new(gateway.clone().clients());

        let result = builder
            .build(&ExistingUserGetOperationsSeedsScenario.plan())
            .await
            .unwrap();

        assert_eq!(result.users.len(), 300);
        for user in &result.users {
            assert_eq!(user.credit_card_accounts.len(), 1);
            assert!(user.debit_card_accounts.is_empty());
            let account = &user.credit_card_accounts[0];
            assert_eq!(account.purchase_operations.len(), 5);
            assert_eq!(account.top_up_operations.len(), 1);
            assert_eq!(account.cash_withdrawal_operations.len(), 1);
        }

        assert_eq!(gateway.count(GatewayCall::CreateUser), 300);
        assert_eq!(
            gateway.count(GatewayCall::OpenAccount(AccountType::CreditCard)),
            300
        );
        assert_eq!(
            gateway.count(GatewayCall::MakeOperation(OperationType::Purchase)),
            1500
        );
        assert_eq!(gateway.operations().len(), 2100);
        assert_eq!(gateway.total_calls(), 2700);
    }

    #[tokio::test]
    async fn test_issue_virtual_card_scenario_opens_no_credit_accounts() {
        let gateway = Arc::new(RecordingGateway::new());
        let builder = SeedsBuilder::new(gateway.clone().clients());

        let result = builder
            .build(&ExistingUserIssueVirtualCardSeedsScenario.plan())
            .await
            .unwrap();

        assert!(result.users.iter().all(|u| u.credit_card_accounts.is_empty()));
        assert_eq!(
            gateway.count(GatewayCall::OpenAccount(AccountType::DebitCard)),
            300
        );
        assert_eq!(gateway.total_calls(), 600);
    }

    #[tokio::test]
    async fn test_zero_debit_accounts_make_no_debit_calls() {
        let gateway = Arc::new(RecordingGateway::new());
        let builder = SeedsBuilder::new(gateway.clone().clients());

        let result = builder
            .build(&ExistingUserMakePurchaseOperationSeedsScenario.plan())
            .await
            .unwrap();

        assert!(result.users.iter().all(|u| u.debit_card_accounts.is_empty()));
        assert_eq!(
            gateway.count(GatewayCall::OpenAccount(AccountType::DebitCard)),
            0
        );
        assert_eq!(
            gateway.count(GatewayCall::IssueCard(CardType::Physical)),
            300
        );
        assert_eq!(gateway.count(GatewayCall::IssueCard(CardType::Virtual)), 0);
    }
}
