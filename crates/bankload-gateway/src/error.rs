/// Error type for gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway transport error on {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Gateway returned {status} for {path}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode gateway response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Gateway rejected {call}: {reason}")]
    Rejected { call: String, reason: String },
}

impl GatewayError {
    /// HTTP status of the failed call, when the gateway answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
