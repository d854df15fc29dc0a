use bankload_models::UserId;
use bankload_models::accounts::{
    AccountType, GetAccountsQuery, GetAccountsResponse, OpenAccountRequest, OpenAccountResponse,
};

use super::GatewayHttpClient;
use crate::client::{AccountsGateway, GatewayFuture};

impl AccountsGateway for GatewayHttpClient {
    fn open_account<'a>(
        &'a self,
        user_id: &'a UserId,
        account_type: AccountType,
    ) -> GatewayFuture<'a, OpenAccountResponse> {
        Box::pin(async move {
            let request = OpenAccountRequest {
                user_id: user_id.clone(),
            };
            self.http.post(account_type.open_path(), &request).await
        })
    }

    fn get_accounts<'a>(&'a self, user_id: &'a UserId) -> GatewayFuture<'a, GetAccountsResponse> {
        Box::pin(async move {
            let query = GetAccountsQuery {
                user_id: user_id.clone(),
            };
            self.http.get_with_query("/api/v1/accounts", &query).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_server;
    use bankload_models::accounts::AccountType;
    use axum::extract::Query;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_open_credit_card_account_returns_auto_issued_card() {
        let app = Router::new().route(
            "/api/v1/accounts/open-credit-card-account",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["userId"], "u-1");
                Json(json!({
                    "account": {
                        "id": "acc-1",
                        "type": "CREDIT_CARD",
                        "status": "ACTIVE",
                        "balance": 25000.0,
                        "cards": [{
                            "id": "card-1",
                            "accountId": "acc-1",
                            "type": "VIRTUAL",
                            "status": "ACTIVE",
                            "paymentSystem": "VISA"
                        }]
                    }
                }))
            }),
        );
        let (_, clients) = test_server::spawn(app).await;

        let account = clients
            .accounts
            .open_credit_card_account(&"u-1".into())
            .await
            .unwrap()
            .account;

        assert_eq!(account.account_type, AccountType::CreditCard);
        assert_eq!(account.cards.len(), 1);
        assert_eq!(account.cards[0].id.as_str(), "card-1");
    }

    #[tokio::test]
    async fn test_get_accounts_sends_user_id_query() {
        let app = Router::new().route(
            "/api/v1/accounts",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let user_id = params.get("userId").cloned().unwrap_or_default();
                Json(json!({
                    "accounts": [{
                        "id": format!("{user_id}-deposit"),
                        "type": "DEPOSIT",
                        "status": "ACTIVE"
                    }]
                }))
            }),
        );
        let (_, clients) = test_server::spawn(app).await;

        let accounts = clients
            .accounts
            .get_accounts(&"u-7".into())
            .await
            .unwrap()
            .accounts;

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id.as_str(), "u-7-deposit");
    }
}
