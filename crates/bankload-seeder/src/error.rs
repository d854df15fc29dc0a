use std::fmt;
use std::path::PathBuf;

use bankload_dumps::DumpsError;
use bankload_gateway::GatewayError;
use bankload_models::AccountId;
use bankload_models::accounts::AccountType;
use bankload_models::cards::CardType;
use bankload_models::operations::OperationType;

/// The gateway call a seeding failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    CreateUser,
    OpenAccount(AccountType),
    IssueCard(CardType),
    MakeOperation(OperationType),
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateUser => write!(f, "create user"),
            Self::OpenAccount(kind) => write!(f, "open {kind:?} account"),
            Self::IssueCard(kind) => write!(f, "issue {kind:?} card"),
            Self::MakeOperation(kind) => write!(f, "make {kind:?} operation"),
        }
    }
}

/// Error type for seeding, seed storage and seed selection.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seeding failed at '{stage}': {source}")]
    Build {
        stage: BuildStage,
        #[source]
        source: GatewayError,
    },

    #[error("No card to '{stage}' with on account {account_id}")]
    MissingCard {
        stage: BuildStage,
        account_id: AccountId,
    },

    #[error("Invalid seeds plan: {0}")]
    InvalidPlan(String),

    #[error("Failed to read seeds plan {}: {source}", path.display())]
    ReadPlan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seeds plan {}: {source}", path.display())]
    ParsePlan {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No seeds stored for scenario '{scenario}'")]
    NotFound { scenario: String },

    #[error("Stored seeds for scenario '{scenario}' are corrupt: {source}")]
    Decode {
        scenario: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode seeds for scenario '{scenario}': {source}")]
    Encode {
        scenario: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Seeds storage error: {0}")]
    Storage(#[source] DumpsError),

    #[error("Cannot select a user: the seeds contain no users")]
    EmptySelectionPool,

    #[error("Unknown seeds scenario '{0}'")]
    UnknownScenario(String),
}
