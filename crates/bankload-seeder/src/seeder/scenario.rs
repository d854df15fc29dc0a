//! Named seed scenarios and their build/load lifecycle.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use bankload_dumps::DumpStore;
use tracing::info;

use super::builder::SeedsBuilder;
use super::dumps::{load_seeds_result, save_seeds_result};
use super::plan::SeedsPlan;
use super::result::SeedsSummary;
use super::scenarios;
use super::selection::LoadedSeeds;
use crate::error::SeedError;

/// A fixed plan bound to the name its result is stored under.
///
/// New load-test scenarios are added by implementing this trait, not by
/// touching the builder.
pub trait SeedsScenario: Send + Sync {
    fn plan(&self) -> SeedsPlan;

    /// Name the built result is stored under.
    fn scenario(&self) -> &str;
}

/// A scenario whose plan comes from outside the code, e.g. a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanScenario {
    name: String,
    plan: SeedsPlan,
}

impl PlanScenario {
    pub fn new(name: impl Into<String>, plan: SeedsPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }

    /// Reads the plan from a JSON file. Omitted branches are zero.
    pub async fn from_file(name: impl Into<String>, path: &Path) -> Result<Self, SeedError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::ReadPlan {
                path: path.to_path_buf(),
                source,
            })?;

        let plan: SeedsPlan = serde_json::from_str(&json).map_err(|source| SeedError::ParsePlan {
            path: path.to_path_buf(),
            source,
        })?;
        plan.validate()?;

        Ok(Self::new(name, plan))
    }
}

impl SeedsScenario for PlanScenario {
    fn plan(&self) -> SeedsPlan {
        self.plan
    }

    fn scenario(&self) -> &str {
        &self.name
    }
}

/// Scenarios addressable by name.
#[derive(Clone, Default)]
pub struct ScenarioRegistry {
    scenarios: BTreeMap<String, Arc<dyn SeedsScenario>>,
}

impl ScenarioRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every scenario shipped with this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for scenario in scenarios::builtin_scenarios() {
            registry.register(scenario);
        }
        registry
    }

    /// Adds `scenario`, replacing any scenario with the same name.
    pub fn register(&mut self, scenario: Arc<dyn SeedsScenario>) {
        self.scenarios
            .insert(scenario.scenario().to_string(), scenario);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn SeedsScenario>, SeedError> {
        self.scenarios
            .get(name)
            .cloned()
            .ok_or_else(|| SeedError::UnknownScenario(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.scenarios.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for ScenarioRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioRegistry")
            .field("scenarios", &self.names())
            .finish()
    }
}

/// What [`SeedsScenarioRunner::build`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// A result was already stored; nothing was called.
    Skipped,
    Built(SeedsSummary),
}

/// Builds scenarios with a [`SeedsBuilder`] and stores their results.
pub struct SeedsScenarioRunner {
    builder: SeedsBuilder,
    store: Arc<dyn DumpStore>,
}

impl SeedsScenarioRunner {
    pub fn new(builder: SeedsBuilder, store: Arc<dyn DumpStore>) -> Self {
        Self { builder, store }
    }

    pub fn builder(&self) -> &SeedsBuilder {
        &self.builder
    }

    pub fn store(&self) -> &dyn DumpStore {
        self.store.as_ref()
    }

    /// Builds and stores the scenario unless a result is already stored.
    pub async fn build(&self, scenario: &dyn SeedsScenario) -> Result<BuildOutcome, SeedError> {
        let name = scenario.scenario();
        if self.store.exists(name).await.map_err(SeedError::Storage)? {
            info!(scenario = %name, "Seeds already stored, skipping build");
            return Ok(BuildOutcome::Skipped);
        }

        self.rebuild(scenario).await.map(BuildOutcome::Built)
    }

    /// Builds and stores the scenario, replacing any stored result.
    pub async fn rebuild(&self, scenario: &dyn SeedsScenario) -> Result<SeedsSummary, SeedError> {
        let name = scenario.scenario();
        info!(scenario = %name, "Seeding scenario");

        let result = self.builder.build(&scenario.plan()).await?;
        save_seeds_result(self.store.as_ref(), &result, name).await?;

        let summary = result.summary();
        info!(scenario = %name, %summary, "Scenario seeded");
        Ok(summary)
    }

    /// Loads the stored result of the scenario.
    pub async fn load(&self, scenario: &dyn SeedsScenario) -> Result<LoadedSeeds, SeedError> {
        let result = load_seeds_result(self.store.as_ref(), scenario.scenario()).await?;
        Ok(LoadedSeeds::new(result))
    }

    /// [`Self::build`] then [`Self::load`]: the load-test init hook.
    pub async fn build_and_load(
        &self,
        scenario: &dyn SeedsScenario,
    ) -> Result<LoadedSeeds, SeedError> {
        self.build(scenario).await?;
        self.load(scenario).await
    }

    /// Deletes the stored result. Returns whether one existed.
    pub async fn clear(&self, scenario: &dyn SeedsScenario) -> Result<bool, SeedError> {
        self.store
            .delete(scenario.scenario())
            .await
            .map_err(SeedError::Storage)
    }
}
