use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bankload_config::GatewayHttpConfig;
use bankload_dumps::{DumpsConfig, open_store};
use bankload_gateway::Fakers;
use bankload_gateway::http::build_gateway_http_clients;
use bankload_seeder::seeder::{
    BuildOutcome, PlanScenario, ScenarioRegistry, SeedsBuilder, SeedsScenario, SeedsScenarioRunner,
};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "bankload-seeder")]
#[command(about = "Bankload seeder - Pre-populates the gateway for load-test scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered scenarios
    List,
    /// Seed a registered scenario unless it is already stored
    Seed {
        /// Scenario name
        scenario: String,

        /// Rebuild even if seeds are already stored
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Seed an ad-hoc plan read from a JSON file
    SeedPlan {
        /// Path to the plan JSON
        #[arg(short = 'p', long)]
        plan: PathBuf,

        /// Name to store the seeds under
        #[arg(short = 's', long)]
        scenario: String,

        /// Rebuild even if seeds are already stored
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Print a summary of the stored seeds of a scenario
    Show {
        /// Scenario name
        scenario: String,
    },
    /// Delete the stored seeds of a scenario
    Clear {
        /// Scenario name
        scenario: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    bankload_observability::init_tracing();

    let cli = Cli::parse();
    let registry = ScenarioRegistry::builtin();

    match cli.command {
        Commands::List => {
            println!("📋 Registered scenarios:");
            for name in registry.names() {
                println!("   {}", name);
            }
            Ok(())
        }
        Commands::Seed { scenario, force } => {
            let scenario = registry.get(&scenario)?;
            handle_seed(scenario.as_ref(), force).await
        }
        Commands::SeedPlan {
            plan,
            scenario,
            force,
        } => {
            let scenario = PlanScenario::from_file(scenario, &plan).await?;
            handle_seed(&scenario, force).await
        }
        Commands::Show { scenario } => handle_show(&scenario).await,
        Commands::Clear { scenario, yes } => handle_clear(&scenario, yes).await,
    }
}

async fn runner() -> Result<SeedsScenarioRunner> {
    let clients = build_gateway_http_clients(&GatewayHttpConfig::from_env(), Arc::new(Fakers))
        .context("Failed to build gateway HTTP clients")?;
    let store = open_store(&DumpsConfig::from_env())
        .await
        .context("Failed to open seeds storage")?;

    Ok(SeedsScenarioRunner::new(SeedsBuilder::new(clients), store))
}

async fn handle_seed(scenario: &dyn SeedsScenario, force: bool) -> Result<()> {
    let runner = runner().await?;
    let name = scenario.scenario();
    let plan = scenario.plan();

    println!("🌱 Seeding scenario '{}'...", name);
    println!("   Users: {}", plan.users.count);
    println!("   Expected gateway calls: {}", plan.expected_calls());

    let outcome = if force {
        BuildOutcome::Built(runner.rebuild(scenario).await?)
    } else {
        runner.build(scenario).await?
    };

    match outcome {
        BuildOutcome::Skipped => {
            println!("\n⏭️  Seeds for '{}' already stored, nothing to do", name);
            println!("   Use --force to rebuild");
        }
        BuildOutcome::Built(summary) => {
            println!("\n✅ Seeded '{}': {}", name, summary);
            println!("   Stored at: {}", runner.store().location(name));
        }
    }

    Ok(())
}

async fn handle_show(scenario: &str) -> Result<()> {
    let store = open_store(&DumpsConfig::from_env())
        .await
        .context("Failed to open seeds storage")?;
    let result = bankload_seeder::seeder::load_seeds_result(store.as_ref(), scenario).await?;
    let summary = result.summary();

    println!("📦 Seeds for '{}' ({})", scenario, store.location(scenario));
    println!("   Users: {}", summary.users);
    println!("   Deposit accounts: {}", summary.deposit_accounts);
    println!("   Savings accounts: {}", summary.savings_accounts);
    println!("   Debit card accounts: {}", summary.debit_card_accounts);
    println!("   Credit card accounts: {}", summary.credit_card_accounts);
    println!("   Cards: {}", summary.cards);
    println!("   Operations: {}", summary.operations);

    Ok(())
}

async fn handle_clear(scenario: &str, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!("Delete stored seeds for '{}'?", scenario))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

    if !confirmed {
        println!("Cancelled");
        return Ok(());
    }

    let store = open_store(&DumpsConfig::from_env())
        .await
        .context("Failed to open seeds storage")?;

    if store.delete(scenario).await? {
        println!("🗑️  Cleared seeds for '{}'", scenario);
    } else {
        println!("ℹ️  No seeds stored for '{}'", scenario);
    }

    Ok(())
}
