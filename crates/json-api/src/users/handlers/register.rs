//! Register User Handler

use std::sync::Arc;

use accounts_app::domain::users::data::NewUserRequest;
use salvo::{http::header::LOCATION, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    envelope::{ApiError, Reply},
    extensions::*,
    state::State,
    users::errors::into_api_error,
};

/// Register User Request
#[derive(Deserialize)]
pub(crate) struct RegisterUserRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub password: String,
}

impl From<RegisterUserRequest> for NewUserRequest {
    fn from(request: RegisterUserRequest) -> Self {
        Self {
            full_name: request.full_name,
            phone_number: request.phone_number,
            password: request.password,
        }
    }
}

/// User Created Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UserCreatedResponse {
    pub id: i64,
}

/// Register a new user.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Reply<UserCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = req
        .parse_json::<RegisterUserRequest>()
        .await
        .map_err(|_parse_error| ApiError::invalid_input())?;

    let user = state
        .users
        .register_user(request.into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, "/users/me", true)
        .or_500("failed to set location header")?;

    Ok(Reply::created(
        "successfully created user",
        UserCreatedResponse {
            id: user.id.into_i64(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use accounts_app::domain::users::{
        MockUsersService, UsersServiceError, ValidationErrors, errors::PHONE_NUMBER_TAKEN,
        records::UserId,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        envelope::{Envelope, INVALID_INPUT_MESSAGE},
        test_helpers::{make_user, public_users_service},
    };

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        public_users_service(users, Router::with_path("users").post(handler))
    }

    #[tokio::test]
    async fn test_register_user_success_returns_201() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_register_user()
            .once()
            .withf(|request| {
                *request
                    == NewUserRequest {
                        full_name: "John Doe".to_string(),
                        phone_number: "+628123456782".to_string(),
                        password: "passworD!1".to_string(),
                    }
            })
            .return_once(|_| Ok(make_user(UserId::from_i64(12))));

        users.expect_get_profile().never();
        users.expect_update_profile().never();

        let mut res = TestClient::post("http://example.com/users")
            .json(&json!({
                "full_name": "John Doe",
                "phone_number": "+628123456782",
                "password": "passworD!1",
            }))
            .send(&make_service(users))
            .await;

        let body: Envelope<UserCreatedResponse> = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/users/me"));
        assert!(body.success);
        assert_eq!(body.message, "successfully created user");
        assert_eq!(body.data.map(|data| data.id), Some(12));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_user_validation_failure_lists_reasons() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_register_user().once().return_once(|_| {
            Err(UsersServiceError::ValidationFailed(ValidationErrors::from(
                vec![
                    "password must contain 1 upper case".to_string(),
                    "password must contain 1 number".to_string(),
                ],
            )))
        });

        let mut res = TestClient::post("http://example.com/users")
            .json(&json!({
                "full_name": "John Doe",
                "phone_number": "+628123456782",
                "password": "password!",
            }))
            .send(&make_service(users))
            .await;

        let body: Envelope<serde_json::Value> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(!body.success);
        assert_eq!(
            body.message,
            "password must contain 1 upper case, password must contain 1 number"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_register_user_conflict_returns_409() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_register_user()
            .once()
            .return_once(|_| Err(UsersServiceError::Conflict(PHONE_NUMBER_TAKEN.to_string())));

        let mut res = TestClient::post("http://example.com/users")
            .json(&json!({
                "full_name": "John Doe",
                "phone_number": "+628123456782",
                "password": "passworD!1",
            }))
            .send(&make_service(users))
            .await;

        let body: Envelope<serde_json::Value> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(body.message, "phone_number has already been registered");

        Ok(())
    }

    #[tokio::test]
    async fn test_register_user_wrong_shape_returns_400() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_register_user().never();

        let mut res = TestClient::post("http://example.com/users")
            .json(&json!({ "full_name": 42 }))
            .send(&make_service(users))
            .await;

        let body: Envelope<serde_json::Value> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, INVALID_INPUT_MESSAGE);

        Ok(())
    }
}
