mod common;

use bankload_gateway::mock::{GatewayCall, RecordingGateway};
use bankload_models::accounts::AccountType;
use bankload_seeder::SeedError;
use bankload_seeder::seeder::{
    ExistingUserIssueVirtualCardSeedsScenario, PlanScenario, SeedAccountsPlan, SeedUsersPlan,
    SeedsBuilder, SeedsPlan, SeedsScenario, SeedsScenarioRunner,
};
use common::{TestHarness, quick_config};

#[tokio::test]
async fn test_seeded_environment_is_built_once_and_persisted() {
    let harness = TestHarness::new();
    let scenario = ExistingUserIssueVirtualCardSeedsScenario;

    let first = harness.seeded_env(&scenario, quick_config(1)).await;
    let calls_after_first = harness.gateway.total_calls();
    let second = harness.seeded_env(&scenario, quick_config(1)).await;

    assert_eq!(first.seeds.len(), 300);
    assert_eq!(calls_after_first, 600);
    assert_eq!(harness.gateway.total_calls(), calls_after_first);
    assert_eq!(first.seeds.result(), second.seeds.result());

    let path = harness
        .dumps_dir
        .path()
        .join("existing_user_issue_virtual_card.json");
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(stored["users"].as_array().map(Vec::len), Some(300));
}

#[tokio::test]
async fn test_round_robin_follows_stored_order() {
    let harness = TestHarness::new();
    let scenario = PlanScenario::new(
        "round_robin",
        SeedsPlan::new(SeedUsersPlan::new(3).with_deposit_accounts(SeedAccountsPlan::new(1))),
    );

    let env = harness.seeded_env(&scenario, quick_config(1)).await;
    let stored: Vec<_> = env.seeds.result().users.iter().map(|u| u.user_id.clone()).collect();
    let picked: Vec<_> = (0..6)
        .map(|_| env.seeds.get_next_user().unwrap().user_id.clone())
        .collect();

    assert_eq!(picked[..3], stored[..]);
    assert_eq!(picked[3..], stored[..]);
}

#[tokio::test]
async fn test_failed_seeding_leaves_nothing_to_load() {
    let harness = TestHarness::with_gateway(
        RecordingGateway::new().fail_on(GatewayCall::OpenAccount(AccountType::DebitCard), 2),
    );
    let scenario = ExistingUserIssueVirtualCardSeedsScenario;
    let runner = SeedsScenarioRunner::new(
        SeedsBuilder::new(harness.gateway.clone().clients()),
        harness.store.clone(),
    );

    let err = runner.build(&scenario).await.unwrap_err();
    assert!(matches!(err, SeedError::Build { .. }));

    let err = runner.load(&scenario).await.unwrap_err();
    assert!(matches!(err, SeedError::NotFound { scenario: name } if name == scenario.scenario()));
}
