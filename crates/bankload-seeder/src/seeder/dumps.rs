//! Scenario-keyed persistence of seed results.
//!
//! Results are stored as pretty-printed JSON, one record per scenario.

use bankload_dumps::{DumpStore, DumpsError};
use tracing::debug;

use super::result::SeedsResult;
use crate::error::SeedError;

/// Stores `result` under `scenario`, replacing any earlier record.
pub async fn save_seeds_result(
    store: &dyn DumpStore,
    result: &SeedsResult,
    scenario: &str,
) -> Result<(), SeedError> {
    let json = serde_json::to_string_pretty(result).map_err(|source| SeedError::Encode {
        scenario: scenario.to_string(),
        source,
    })?;

    store
        .save(scenario, &json)
        .await
        .map_err(|e| storage_error(e, scenario))?;

    debug!(scenario = %scenario, location = %store.location(scenario), "Seeds saved");
    Ok(())
}

/// Reads the record stored under `scenario`.
///
/// # Errors
///
/// - [`SeedError::NotFound`] when nothing is stored under `scenario`
/// - [`SeedError::Decode`] when the record is not a valid result
pub async fn load_seeds_result(
    store: &dyn DumpStore,
    scenario: &str,
) -> Result<SeedsResult, SeedError> {
    let json = store
        .load(scenario)
        .await
        .map_err(|e| storage_error(e, scenario))?;

    let result = serde_json::from_str(&json).map_err(|source| SeedError::Decode {
        scenario: scenario.to_string(),
        source,
    })?;

    debug!(scenario = %scenario, "Seeds loaded");
    Ok(result)
}

fn storage_error(error: DumpsError, scenario: &str) -> SeedError {
    match error {
        DumpsError::NotFound { .. } => SeedError::NotFound {
            scenario: scenario.to_string(),
        },
        other => SeedError::Storage(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeder::result::{SeedAccountResult, SeedCardResult, SeedUserResult};
    use bankload_dumps::{FileDumpStore, MemoryDumpStore};
    use bankload_models::{AccountId, CardId, UserId};

    fn sample_result() -> SeedsResult {
        let mut user = SeedUserResult::new(UserId::from("user-1"));
        let mut account = SeedAccountResult::new(AccountId::from("account-1"));
        account.virtual_cards.push(SeedCardResult {
            card_id: CardId::from("card-1"),
        });
        user.debit_card_accounts.push(account);
        user.deposit_accounts
            .push(SeedAccountResult::new(AccountId::from("account-2")));
        SeedsResult::new(vec![user, SeedUserResult::new(UserId::from("user-2"))])
    }

    #[tokio::test]
    async fn test_save_then_load_reproduces_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDumpStore::new(dir.path());
        let result = sample_result();

        save_seeds_result(&store, &result, "s").await.unwrap();

        assert_eq!(load_seeds_result(&store, "s").await.unwrap(), result);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_record() {
        let store = MemoryDumpStore::new();

        save_seeds_result(&store, &sample_result(), "s").await.unwrap();
        save_seeds_result(&store, &SeedsResult::default(), "s").await.unwrap();

        assert!(load_seeds_result(&store, "s").await.unwrap().users.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_scenario_is_not_found() {
        let store = MemoryDumpStore::new();

        let err = load_seeds_result(&store, "nonexistent").await.unwrap_err();

        assert!(matches!(err, SeedError::NotFound { scenario } if scenario == "nonexistent"));
    }

    #[tokio::test]
    async fn test_corrupt_record_is_a_decode_error() {
        let store = MemoryDumpStore::new();
        store.save("broken", "{\"users\": [42]}").await.unwrap();

        let err = load_seeds_result(&store, "broken").await.unwrap_err();

        assert!(matches!(err, SeedError::Decode { scenario, .. } if scenario == "broken"));
    }

    #[tokio::test]
    async fn test_record_without_users_is_a_decode_error() {
        let store = MemoryDumpStore::new();
        store.save("empty", "{}").await.unwrap();
        store.save("unrelated", "{\"unrelated\": true}").await.unwrap();

        for scenario in ["empty", "unrelated"] {
            let err = load_seeds_result(&store, scenario).await.unwrap_err();
            assert!(matches!(err, SeedError::Decode { .. }), "{scenario}: {err}");
        }
    }

    #[tokio::test]
    async fn test_invalid_scenario_name_is_a_storage_error() {
        let store = MemoryDumpStore::new();

        let err = save_seeds_result(&store, &sample_result(), "../x")
            .await
            .unwrap_err();

        assert!(matches!(err, SeedError::Storage(DumpsError::InvalidKey(_))));
    }
}
