use bankload_models::AccountId;
use bankload_models::documents::{GetContractDocumentResponse, GetTariffDocumentResponse};

use super::GatewayHttpClient;
use crate::client::{DocumentsGateway, GatewayFuture};

impl DocumentsGateway for GatewayHttpClient {
    fn get_tariff_document<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetTariffDocumentResponse> {
        Box::pin(async move {
            let path = format!("/api/v1/documents/tariff-document/{account_id}");
            self.http.get(&path).await
        })
    }

    fn get_contract_document<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetContractDocumentResponse> {
        Box::pin(async move {
            let path = format!("/api/v1/documents/contract-document/{account_id}");
            self.http.get(&path).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_server;
    use axum::extract::Path;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_documents_are_fetched_per_account() {
        let app = Router::new()
            .route(
                "/api/v1/documents/tariff-document/{id}",
                get(|Path(id): Path<String>| async move {
                    Json(json!({"tariff": {"url": format!("http://docs/{id}/tariff"), "document": "T"}}))
                }),
            )
            .route(
                "/api/v1/documents/contract-document/{id}",
                get(|Path(id): Path<String>| async move {
                    Json(json!({"contract": {"url": format!("http://docs/{id}/contract"), "document": "C"}}))
                }),
            );
        let (_, clients) = test_server::spawn(app).await;
        let account_id = bankload_models::AccountId::from("acc-3");

        let tariff = clients
            .documents
            .get_tariff_document(&account_id)
            .await
            .unwrap()
            .tariff;
        let contract = clients
            .documents
            .get_contract_document(&account_id)
            .await
            .unwrap()
            .contract;

        assert_eq!(tariff.url, "http://docs/acc-3/tariff");
        assert_eq!(contract.document, "C");
    }
}
