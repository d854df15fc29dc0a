//! # Bankload
//!
//! Load runs against the banking gateway. Simulated users execute weighted
//! task sets against gateway clients, optionally consuming seed data built
//! once before the run.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── bankload-models/        # Typed ids and gateway DTOs
//! ├── bankload-config/        # Environment-driven configuration
//! ├── bankload-gateway/       # Gateway traits, HTTP clients, recording mock
//! ├── bankload-dumps/         # Scenario-keyed seed storage
//! ├── bankload-observability/ # Tracing setup
//! └── bankload-seeder/        # Seed plans, builder, scenarios, CLI
//! src/
//! ├── environment.rs          # Load environment and its init hook
//! ├── tasks/                  # Task sets run by simulated users
//! └── runner.rs               # Spawns, paces and stops simulated users
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bankload::environment::init_seeded_environment;
//! use bankload::runner::run_load;
//! use bankload::tasks::TaskSetKind;
//!
//! let kind = TaskSetKind::GetOperations;
//! let scenario = kind.seeds_scenario().ok_or("get-operations consumes seeds")?;
//! let env = init_seeded_environment(clients, store, scenario.as_ref(), config.clone()).await?;
//! let summary = run_load(Arc::new(env), move |env| kind.build(env), &config).await;
//! println!("{summary}");
//! ```

pub mod environment;
pub mod runner;
pub mod tasks;

pub use environment::{LoadEnvironment, init_seeded_environment};
pub use runner::{RunSummary, run_load};
pub use tasks::{TaskError, TaskSet, TaskSetKind};
