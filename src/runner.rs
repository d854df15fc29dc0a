//! Simulated-user runner.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bankload_config::LoadConfig;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::environment::LoadEnvironment;
use crate::tasks::{TaskError, TaskSet};

/// Totals of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub users: usize,
    /// Tasks run to completion, failed ones included.
    pub iterations: usize,
    pub task_errors: usize,
    /// Users that stopped on their own before the run ended.
    pub stopped_users: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} users, {} tasks, {} task errors, {} stopped users",
            self.users, self.iterations, self.task_errors, self.stopped_users
        )
    }
}

#[derive(Default)]
struct RunCounters {
    iterations: AtomicUsize,
    task_errors: AtomicUsize,
    stopped_users: AtomicUsize,
}

/// Picks the next task of a task set.
enum TaskPicker {
    Sequential { len: usize, next: usize },
    Weighted(WeightedIndex<u32>),
}

impl TaskPicker {
    fn new(weights: &[u32], sequential: bool) -> Result<Self, WeightedError> {
        if sequential {
            if weights.is_empty() {
                return Err(WeightedError::NoItem);
            }
            Ok(Self::Sequential {
                len: weights.len(),
                next: 0,
            })
        } else {
            WeightedIndex::new(weights).map(Self::Weighted)
        }
    }

    fn next(&mut self, rng: &mut StdRng) -> usize {
        match self {
            Self::Sequential { len, next } => {
                let index = *next;
                *next = (*next + 1) % *len;
                index
            }
            Self::Weighted(distribution) => distribution.sample(rng),
        }
    }
}

fn wait_time(config: &LoadConfig, rng: &mut StdRng) -> Duration {
    if config.wait_min >= config.wait_max {
        config.wait_min
    } else {
        rng.gen_range(config.wait_min..=config.wait_max)
    }
}

/// Spawns `config.users` simulated users, each running its own task set
/// from `factory` until it stops or `config.run_time` elapses. Users still
/// running at the deadline are aborted mid-call.
pub async fn run_load<F>(env: Arc<LoadEnvironment>, factory: F, config: &LoadConfig) -> RunSummary
where
    F: Fn(&LoadEnvironment) -> Box<dyn TaskSet> + Send + Sync + 'static,
{
    let factory = Arc::new(factory);
    let counters = Arc::new(RunCounters::default());
    let mut users = JoinSet::new();

    info!(
        users = config.users,
        run_time_secs = config.run_time.as_secs_f64(),
        "Starting load run"
    );

    for user in 0..config.users {
        let env = env.clone();
        let factory = factory.clone();
        let counters = counters.clone();
        let config = config.clone();
        users.spawn(async move {
            let task_set = factory(&env);
            simulate_user(user, task_set, &config, &counters).await;
        });
    }

    let deadline = tokio::time::sleep(config.run_time);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            joined = users.join_next() => match joined {
                Some(Ok(())) => {}
                Some(Err(e)) => warn!(error = %e, "Simulated user panicked"),
                None => break,
            },
        }
    }

    users.abort_all();
    while users.join_next().await.is_some() {}

    let summary = RunSummary {
        users: config.users,
        iterations: counters.iterations.load(Ordering::Relaxed),
        task_errors: counters.task_errors.load(Ordering::Relaxed),
        stopped_users: counters.stopped_users.load(Ordering::Relaxed),
    };
    info!(%summary, "Load run finished");
    summary
}

async fn simulate_user(
    user: usize,
    mut task_set: Box<dyn TaskSet>,
    config: &LoadConfig,
    counters: &RunCounters,
) {
    let task_set_name = task_set.name();
    info!(user, task_set = task_set_name, "Simulated user started");

    if let Err(e) = task_set.on_start().await {
        if !matches!(e, TaskError::Stop(_)) {
            counters.task_errors.fetch_add(1, Ordering::Relaxed);
        }
        warn!(user, task_set = task_set_name, error = %e, "Simulated user stopped on start");
        counters.stopped_users.fetch_add(1, Ordering::Relaxed);
        return;
    }

    let mut picker = match TaskPicker::new(task_set.weights(), task_set.is_sequential()) {
        Ok(picker) => picker,
        Err(e) => {
            warn!(user, task_set = task_set_name, error = %e, "Task set has no runnable tasks");
            counters.stopped_users.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };
    let mut rng = StdRng::from_entropy();

    loop {
        let index = picker.next(&mut rng);
        match task_set.run_task(index).await {
            Ok(()) => {}
            Err(TaskError::Stop(reason)) => {
                warn!(user, task_set = task_set_name, %reason, "Simulated user stopped");
                counters.stopped_users.fetch_add(1, Ordering::Relaxed);
                break;
            }
            Err(e) => {
                warn!(user, task_set = task_set_name, task = index, error = %e, "Task failed");
                counters.task_errors.fetch_add(1, Ordering::Relaxed);
            }
        }
        counters.iterations.fetch_add(1, Ordering::Relaxed);

        tokio::time::sleep(wait_time(config, &mut rng)).await;
    }

    info!(user, task_set = task_set_name, "Simulated user finished");
}
