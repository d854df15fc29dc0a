use std::time::Duration;

use crate::env_or;

/// Load run configuration.
///
/// # Environment Variables
///
/// - `LOAD_USERS`: Number of concurrently simulated users (default: `10`)
/// - `LOAD_RUN_TIME_SECONDS`: How long the run lasts (default: `60`)
/// - `LOAD_WAIT_MIN_MS` / `LOAD_WAIT_MAX_MS`: Pause between two tasks of the
///   same user, drawn uniformly from this range (default: `1000`..=`3000`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadConfig {
    pub users: usize,
    pub run_time: Duration,
    pub wait_min: Duration,
    pub wait_max: Duration,
}

impl LoadConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let wait_min = env_or("LOAD_WAIT_MIN_MS", defaults.wait_min.as_millis() as u64);
        let wait_max = env_or("LOAD_WAIT_MAX_MS", defaults.wait_max.as_millis() as u64);

        Self {
            users: env_or("LOAD_USERS", defaults.users),
            run_time: Duration::from_secs(env_or(
                "LOAD_RUN_TIME_SECONDS",
                defaults.run_time.as_secs(),
            )),
            wait_min: Duration::from_millis(wait_min.min(wait_max)),
            wait_max: Duration::from_millis(wait_max.max(wait_min)),
        }
    }

    /// Sets the wait window between two tasks.
    pub fn with_wait(mut self, min: Duration, max: Duration) -> Self {
        self.wait_min = min.min(max);
        self.wait_max = max.max(min);
        self
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            users: 10,
            run_time: Duration::from_secs(60),
            wait_min: Duration::from_secs(1),
            wait_max: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wait_is_one_to_three_seconds() {
        let config = LoadConfig::default();
        assert_eq!(config.wait_min, Duration::from_secs(1));
        assert_eq!(config.wait_max, Duration::from_secs(3));
    }

    #[test]
    fn test_with_wait_orders_bounds() {
        let config = LoadConfig::default()
            .with_wait(Duration::from_millis(500), Duration::from_millis(100));
        assert_eq!(config.wait_min, Duration::from_millis(100));
        assert_eq!(config.wait_max, Duration::from_millis(500));
    }
}
