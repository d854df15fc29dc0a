//! User DTOs for `/api/v1/users`.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// A user as returned by the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone_number: String,
}

/// Body of `POST /api/v1/users`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateUserResponse {
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GetUserResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_uses_camel_case() {
        let request = CreateUserRequest {
            email: "jane@example.com".into(),
            last_name: "Doe".into(),
            first_name: "Jane".into(),
            middle_name: "Q".into(),
            phone_number: "+100000000".into(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["middleName"], "Q");
        assert_eq!(json["phoneNumber"], "+100000000");
    }
}
