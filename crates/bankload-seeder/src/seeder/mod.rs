//! Seed data for load-test scenarios.
//!
//! # Module Structure
//!
//! - [`plan`] - What to create: users, accounts per kind, cards and operations
//! - [`result`] - Identifiers of what was created, mirroring the plan
//! - [`builder`] - Issues the gateway calls a plan describes
//! - [`dumps`] - Scenario-keyed persistence of results
//! - [`selection`] - Random and round-robin user selection for simulated users
//! - [`scenario`] - Named scenarios, the registry and the build/load runner
//! - [`scenarios`] - Built-in scenarios
//!
//! # Usage
//!
//! ```ignore
//! use bankload_seeder::seeder::{SeedAccountsPlan, SeedUsersPlan, SeedsBuilder, SeedsPlan};
//!
//! let plan = SeedsPlan::new(
//!     SeedUsersPlan::new(10).with_debit_card_accounts(SeedAccountsPlan::new(1).with_virtual_cards(1)),
//! );
//! let result = SeedsBuilder::new(clients).build(&plan).await?;
//! ```

pub mod builder;
pub mod dumps;
pub mod plan;
pub mod result;
pub mod scenario;
pub mod scenarios;
pub mod selection;

pub use builder::SeedsBuilder;
pub use dumps::{load_seeds_result, save_seeds_result};
pub use plan::{SeedAccountsPlan, SeedCardsPlan, SeedOperationsPlan, SeedUsersPlan, SeedsPlan};
pub use result::{
    SeedAccountResult, SeedCardResult, SeedOperationResult, SeedUserResult, SeedsResult,
    SeedsSummary,
};
pub use scenario::{BuildOutcome, PlanScenario, ScenarioRegistry, SeedsScenario, SeedsScenarioRunner};
pub use scenarios::{
    ExistingUserGetOperationsSeedsScenario, ExistingUserIssueVirtualCardSeedsScenario,
    ExistingUserMakePurchaseOperationSeedsScenario,
};
pub use selection::LoadedSeeds;
