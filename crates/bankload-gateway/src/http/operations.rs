use bankload_models::operations::{
    GetOperationReceiptResponse, GetOperationResponse, GetOperationsQuery, GetOperationsResponse,
    GetOperationsSummaryResponse, MakeOperationRequest, MakeOperationResponse,
};
use bankload_models::{AccountId, OperationId};

use super::GatewayHttpClient;
use crate::client::{GatewayFuture, OperationsGateway};
use crate::fakers::FakeData;

const OPERATIONS_PATH: &str = "/api/v1/operations";

impl OperationsGateway for GatewayHttpClient {
    fn fakes(&self) -> &dyn FakeData {
        self.fakes.as_ref()
    }

    fn make_operation(
        &self,
        request: MakeOperationRequest,
    ) -> GatewayFuture<'_, MakeOperationResponse> {
        Box::pin(async move { self.http.post(request.path(), &request).await })
    }

    fn get_operation<'a>(
        &'a self,
        operation_id: &'a OperationId,
    ) -> GatewayFuture<'a, GetOperationResponse> {
        Box::pin(async move {
            let path = format!("{OPERATIONS_PATH}/{operation_id}");
            self.http.get(&path).await
        })
    }

    fn get_operations<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetOperationsResponse> {
        Box::pin(async move {
            let query = GetOperationsQuery {
                account_id: account_id.clone(),
            };
            self.http.get_with_query(OPERATIONS_PATH, &query).await
        })
    }

    fn get_operations_summary<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> GatewayFuture<'a, GetOperationsSummaryResponse> {
        Box::pin(async move {
            let query = GetOperationsQuery {
                account_id: account_id.clone(),
            };
            let path = format!("{OPERATIONS_PATH}/operations-summary");
            self.http.get_with_query(&path, &query).await
        })
    }

    fn get_operation_receipt<'a>(
        &'a self,
        operation_id: &'a OperationId,
    ) -> GatewayFuture<'a, GetOperationReceiptResponse> {
        Box::pin(async move {
            let path = format!("{OPERATIONS_PATH}/operation-receipt/{operation_id}");
            self.http.get(&path).await
        })
    }
}
