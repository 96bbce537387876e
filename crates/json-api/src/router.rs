//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{auth, healthcheck, observability, state::State, users};

pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("auth/login").post(auth::login::handler))
        .push(
            Router::with_path("users")
                .post(users::register::handler)
                .push(
                    Router::with_path("me")
                        .hoop(auth::middleware::handler)
                        .get(users::profile::handler)
                        .patch(users::update::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use accounts_app::{
        auth::{AuthServiceError, MockAuthService},
        domain::users::{MockUsersService, records::UserId},
    };
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        envelope::{Envelope, UNAUTHORIZED_MESSAGE},
        test_helpers::make_user,
    };

    use super::*;

    fn make_service(users: MockUsersService, auth: MockAuthService) -> Service {
        Service::new(app_router(Arc::new(State::new(
            Arc::new(users),
            Arc::new(auth),
        ))))
    }

    #[tokio::test]
    async fn test_profile_requires_bearer_token() -> TestResult {
        let mut users = MockUsersService::new();
        let mut auth = MockAuthService::new();

        users.expect_get_profile().never();
        auth.expect_authenticate_bearer().never();

        let mut res = TestClient::get("http://example.com/users/me")
            .send(&make_service(users, auth))
            .await;

        let body: Envelope<serde_json::Value> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body.message, UNAUTHORIZED_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_with_valid_token_reaches_users_service() -> TestResult {
        let mut users = MockUsersService::new();
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "good-token")
            .return_once(|_| Ok(UserId::from_i64(5)));

        users
            .expect_get_profile()
            .once()
            .withf(|user| *user == UserId::from_i64(5))
            .return_once(|user| Ok(make_user(user)));

        let mut res = TestClient::get("http://example.com/users/me")
            .add_header(AUTHORIZATION, "Bearer good-token", true)
            .send(&make_service(users, auth))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["data"]["id"], 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_registration_is_public() -> TestResult {
        let mut users = MockUsersService::new();
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        users
            .expect_register_user()
            .once()
            .return_once(|_| Ok(make_user(UserId::from_i64(1))));

        let res = TestClient::post("http://example.com/users")
            .json(&json!({
                "full_name": "John Doe",
                "phone_number": "+628123456782",
                "password": "passworD!1",
            }))
            .send(&make_service(users, auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_rejection_is_not_leaked() -> TestResult {
        let users = MockUsersService::new();
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_| Err(AuthServiceError::InvalidCredentials));

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "phone_number": "+628123456782", "password": "nope" }))
            .send(&make_service(users, auth))
            .await;

        let body: Envelope<serde_json::Value> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body.message, UNAUTHORIZED_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_is_public() {
        let res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(MockUsersService::new(), MockAuthService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }
}
