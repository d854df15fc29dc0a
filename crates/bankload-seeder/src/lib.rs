//! # Bankload Seeder
//!
//! Pre-populates the banking gateway with users, accounts, cards and
//! operations for load-test scenarios, and replays the created identifiers
//! across runs.
//!
//! ## Usage
//!
//! ```ignore
//! use bankload_seeder::seeder::{SeedsBuilder, SeedsScenarioRunner, ScenarioRegistry};
//!
//! let runner = SeedsScenarioRunner::new(SeedsBuilder::new(clients), store);
//! let scenario = ScenarioRegistry::builtin().get("existing_user_get_operations")?;
//! let seeds = runner.build_and_load(scenario.as_ref()).await?;
//! let user = seeds.get_next_user()?;
//! ```

pub mod error;
pub mod seeder;

pub use error::{BuildStage, SeedError};
