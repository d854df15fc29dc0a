use bankload_models::UserId;
use bankload_models::users::{CreateUserRequest, CreateUserResponse, GetUserResponse};

use super::GatewayHttpClient;
use crate::client::{GatewayFuture, UsersGateway};
use crate::fakers::FakeData;

const USERS_PATH: &str = "/api/v1/users";

impl UsersGateway for GatewayHttpClient {
    fn fakes(&self) -> &dyn FakeData {
        self.fakes.as_ref()
    }

    fn create_user_with(&self, request: CreateUserRequest) -> GatewayFuture<'_, CreateUserResponse> {
        Box::pin(async move { self.http.post(USERS_PATH, &request).await })
    }

    fn get_user<'a>(&'a self, user_id: &'a UserId) -> GatewayFuture<'a, GetUserResponse> {
        Box::pin(async move {
            let path = format!("{USERS_PATH}/{user_id}");
            self.http.get(&path).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_server;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use axum::extract::Path;
    use serde_json::{Value, json};

    fn user_json(id: &str, body: &Value) -> Value {
        json!({
            "user": {
                "id": id,
                "email": body["email"],
                "lastName": body["lastName"],
                "firstName": body["firstName"],
                "middleName": body["middleName"],
                "phoneNumber": body["phoneNumber"],
            }
        })
    }

    #[tokio::test]
    async fn test_create_user_posts_fake_profile() {
        let app = Router::new().route(
            "/api/v1/users",
            post(|Json(body): Json<Value>| async move { Json(user_json("u-1", &body)) }),
        );
        let (_, clients) = test_server::spawn(app).await;

        let user = clients.users.create_user().await.unwrap().user;

        assert_eq!(user.id.as_str(), "u-1");
        assert!(user.email.ends_with("@example.com"));
        assert!(!user.first_name.is_empty());
    }

    #[tokio::test]
    async fn test_get_user_uses_id_in_path() {
        let app = Router::new().route(
            "/api/v1/users/{id}",
            get(|Path(id): Path<String>| async move {
                let body = json!({
                    "email": "a@example.com",
                    "lastName": "Doe",
                    "firstName": "Jane",
                    "middleName": "Q",
                    "phoneNumber": "+1",
                });
                Json(user_json(&id, &body))
            }),
        );
        let (_, clients) = test_server::spawn(app).await;

        let user = clients
            .users
            .get_user(&"u-42".into())
            .await
            .unwrap()
            .user;

        assert_eq!(user.id.as_str(), "u-42");
        assert_eq!(user.last_name, "Doe");
    }
}
