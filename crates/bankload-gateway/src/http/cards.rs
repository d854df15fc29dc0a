use bankload_models::cards::{CardType, IssueCardRequest, IssueCardResponse};
use bankload_models::{AccountId, UserId};

use super::GatewayHttpClient;
use crate::client::{CardsGateway, GatewayFuture};

impl CardsGateway for GatewayHttpClient {
    fn issue_card<'a>(
        &'a self,
        user_id: &'a UserId,
        account_id: &'a AccountId,
        card_type: CardType,
    ) -> GatewayFuture<'a, IssueCardResponse> {
        Box::pin(async move {
            let request = IssueCardRequest {
                user_id: user_id.clone(),
                account_id: account_id.clone(),
            };
            self.http.post(card_type.issue_path(), &request).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_server;
    use bankload_models::cards::CardType;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_issue_physical_card_posts_to_physical_endpoint() {
        let app = Router::new().route(
            "/api/v1/cards/issue-physical-card",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "card": {
                        "id": "card-p",
                        "accountId": body["accountId"],
                        "type": "PHYSICAL",
                        "status": "ACTIVE"
                    }
                }))
            }),
        );
        let (_, clients) = test_server::spawn(app).await;

        let card = clients
            .cards
            .issue_physical_card(&"u-1".into(), &"acc-1".into())
            .await
            .unwrap()
            .card;

        assert_eq!(card.card_type, CardType::Physical);
        assert_eq!(card.account_id.as_str(), "acc-1");
    }
}
