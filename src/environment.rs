//! The shared state of a load run.

use std::sync::Arc;

use bankload_config::LoadConfig;
use bankload_dumps::DumpStore;
use bankload_gateway::GatewayClients;
use bankload_seeder::SeedError;
use bankload_seeder::seeder::{
    LoadedSeeds, SeedsBuilder, SeedsResult, SeedsScenario, SeedsScenarioRunner,
};
use tracing::info;

/// Everything a simulated user needs: gateway clients, the loaded seeds and
/// the run configuration. Shared read-only across simulated users.
#[derive(Clone)]
pub struct LoadEnvironment {
    pub clients: GatewayClients,
    pub seeds: Arc<LoadedSeeds>,
    pub config: LoadConfig,
}

impl LoadEnvironment {
    pub fn new(clients: GatewayClients, seeds: Arc<LoadedSeeds>, config: LoadConfig) -> Self {
        Self {
            clients,
            seeds,
            config,
        }
    }

    /// An environment for task sets that create their own data.
    pub fn without_seeds(clients: GatewayClients, config: LoadConfig) -> Self {
        Self::new(
            clients,
            Arc::new(LoadedSeeds::new(SeedsResult::default())),
            config,
        )
    }
}

impl std::fmt::Debug for LoadEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadEnvironment")
            .field("seeded_users", &self.seeds.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Init hook of a seeded run: builds the scenario unless it is already
/// stored, then loads it for the simulated users.
pub async fn init_seeded_environment(
    clients: GatewayClients,
    store: Arc<dyn DumpStore>,
    scenario: &dyn SeedsScenario,
    config: LoadConfig,
) -> Result<LoadEnvironment, SeedError> {
    let runner = SeedsScenarioRunner::new(SeedsBuilder::new(clients.clone()), store);
    let seeds = runner.build_and_load(scenario).await?;

    info!(
        scenario = %scenario.scenario(),
        users = seeds.len(),
        "Seeded environment ready"
    );

    Ok(LoadEnvironment::new(clients, Arc::new(seeds), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankload_dumps::MemoryDumpStore;
    use bankload_gateway::mock::{GatewayCall, RecordingGateway};
    use bankload_seeder::seeder::{PlanScenario, SeedAccountsPlan, SeedUsersPlan, SeedsPlan};

    #[tokio::test]
    async fn test_init_builds_once_and_shares_seeds() {
        let gateway = Arc::new(RecordingGateway::new());
        let store: Arc<dyn DumpStore> = Arc::new(MemoryDumpStore::new());
        let scenario = PlanScenario::new(
            "env",
            SeedsPlan::new(SeedUsersPlan::new(2).with_debit_card_accounts(SeedAccountsPlan::new(1))),
        );

        let first = init_seeded_environment(
            gateway.clone().clients(),
            store.clone(),
            &scenario,
            LoadConfig::default(),
        )
        .await
        .unwrap();
        let second = init_seeded_environment(
            gateway.clone().clients(),
            store,
            &scenario,
            LoadConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(first.seeds.len(), 2);
        assert_eq!(first.seeds.result(), second.seeds.result());
        assert_eq!(gateway.count(GatewayCall::CreateUser), 2);
    }
}
