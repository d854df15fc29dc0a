use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use bankload::environment::{LoadEnvironment, init_seeded_environment};
use bankload::runner::run_load;
use bankload::tasks::TaskSetKind;
use bankload_config::{GatewayHttpConfig, LoadConfig};
use bankload_dumps::{DumpsConfig, open_store};
use bankload_gateway::Fakers;
use bankload_gateway::http::build_gateway_http_clients;
use clap::Parser;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "bankload")]
#[command(about = "Bankload - Simulated-user load runs against the banking gateway", long_about = None)]
struct Cli {
    /// Task set every simulated user runs
    task_set: TaskSetKind,

    /// Number of simulated users (overrides LOAD_USERS)
    #[arg(short = 'u', long)]
    users: Option<usize>,

    /// Run time in seconds (overrides LOAD_RUN_TIME_SECONDS)
    #[arg(short = 't', long)]
    run_time: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    bankload_observability::init_tracing();

    let cli = Cli::parse();

    let mut config = LoadConfig::from_env();
    if let Some(users) = cli.users {
        config.users = users;
    }
    if let Some(run_time) = cli.run_time {
        config.run_time = Duration::from_secs(run_time);
    }

    let clients = build_gateway_http_clients(&GatewayHttpConfig::from_env(), Arc::new(Fakers))
        .context("Failed to build gateway HTTP clients")?;

    let env = match cli.task_set.seeds_scenario() {
        Some(scenario) => {
            let store = open_store(&DumpsConfig::from_env())
                .await
                .context("Failed to open seeds storage")?;
            println!("🌱 Preparing seeds for '{}'...", scenario.scenario());
            init_seeded_environment(clients, store, scenario.as_ref(), config.clone())
                .await
                .with_context(|| format!("Failed to seed scenario '{}'", scenario.scenario()))?
        }
        None => LoadEnvironment::without_seeds(clients, config.clone()),
    };

    let kind = cli.task_set;
    println!(
        "🚀 Running '{}' with {} users for {}s",
        kind,
        config.users,
        config.run_time.as_secs()
    );

    let summary = run_load(Arc::new(env), move |env| kind.build(env), &config).await;

    println!("\n✅ Load run finished: {}", summary);
    Ok(())
}
