use std::sync::Arc;
use std::time::Duration;

use bankload::environment::{LoadEnvironment, init_seeded_environment};
use bankload_config::LoadConfig;
use bankload_dumps::{DumpStore, FileDumpStore};
use bankload_gateway::mock::RecordingGateway;
use bankload_seeder::seeder::SeedsScenario;
use tempfile::TempDir;

/// A short run with near-zero waits.
pub fn quick_config(users: usize) -> LoadConfig {
    LoadConfig {
        users,
        run_time: Duration::from_millis(300),
        wait_min: Duration::from_millis(1),
        wait_max: Duration::from_millis(2),
    }
}

#[allow(dead_code)]
pub struct TestHarness {
    pub gateway: Arc<RecordingGateway>,
    pub store: Arc<dyn DumpStore>,
    pub dumps_dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_gateway(RecordingGateway::new())
    }

    pub fn with_gateway(gateway: RecordingGateway) -> Self {
        let dumps_dir = tempfile::tempdir().unwrap();
        Self {
            gateway: Arc::new(gateway),
            store: Arc::new(FileDumpStore::new(dumps_dir.path())),
            dumps_dir,
        }
    }

    pub async fn seeded_env(&self, scenario: &dyn SeedsScenario, config: LoadConfig) -> LoadEnvironment {
        init_seeded_environment(
            self.gateway.clone().clients(),
            self.store.clone(),
            scenario,
            config,
        )
        .await
        .unwrap()
    }
}
