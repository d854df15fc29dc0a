//! Concurrent user selection over loaded seeds.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::result::{SeedUserResult, SeedsResult};
use crate::error::SeedError;

/// A read-only result shared by simulated users.
///
/// The round-robin cursor is the only mutable state; it advances exactly
/// once per [`LoadedSeeds::get_next_user`] call.
#[derive(Debug)]
pub struct LoadedSeeds {
    result: SeedsResult,
    cursor: AtomicUsize,
}

impl LoadedSeeds {
    pub fn new(result: SeedsResult) -> Self {
        Self {
            result,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn result(&self) -> &SeedsResult {
        &self.result
    }

    pub fn len(&self) -> usize {
        self.result.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.users.is_empty()
    }

    pub fn get_random_user(&self) -> Result<&SeedUserResult, SeedError> {
        self.result.get_random_user()
    }

    /// Users in stored order, cycling forever across all callers.
    pub fn get_next_user(&self) -> Result<&SeedUserResult, SeedError> {
        if self.is_empty() {
            return Err(SeedError::EmptySelectionPool);
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.len();
        Ok(&self.result.users[index])
    }
}

impl From<SeedsResult> for LoadedSeeds {
    fn from(result: SeedsResult) -> Self {
        Self::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankload_models::UserId;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn seeds(count: usize) -> LoadedSeeds {
        LoadedSeeds::new(SeedsResult::new(
            (0..count)
                .map(|i| SeedUserResult::new(UserId::from(format!("user-{i}"))))
                .collect(),
        ))
    }

    #[test]
    fn test_next_user_cycles_in_stored_order() {
        let seeds = seeds(3);
        let ids: Vec<String> = (0..7)
            .map(|_| seeds.get_next_user().unwrap().user_id.to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["user-0", "user-1", "user-2", "user-0", "user-1", "user-2", "user-0"]
        );
    }

    #[test]
    fn test_empty_seeds_fail_fast() {
        let seeds = seeds(0);
        assert!(matches!(seeds.get_next_user(), Err(SeedError::EmptySelectionPool)));
        assert!(matches!(seeds.get_random_user(), Err(SeedError::EmptySelectionPool)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_split_users_evenly() {
        let seeds = Arc::new(seeds(7));
        let calls_per_task = 250;
        let tasks = 8;

        let mut handles = Vec::new();
        for _ in 0..tasks {
            let seeds = seeds.clone();
            handles.push(tokio::spawn(async move {
                (0..calls_per_task)
                    .map(|_| seeds.get_next_user().unwrap().user_id.to_string())
                    .collect::<Vec<_>>()
            }));
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                *counts.entry(id).or_default() += 1;
            }
        }

        // 2000 calls over 7 users: each gets 285 or 286
        let total = calls_per_task * tasks;
        assert_eq!(counts.len(), 7);
        for count in counts.values() {
            assert!(*count == total / 7 || *count == total / 7 + 1, "count {count}");
        }
    }
}
