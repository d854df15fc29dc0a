//! Document DTOs for `/api/v1/documents`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub url: String,
    pub document: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GetTariffDocumentResponse {
    pub tariff: Document,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GetContractDocumentResponse {
    pub contract: Document,
}
