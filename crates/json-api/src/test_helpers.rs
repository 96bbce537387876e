//! Test helpers.

use std::sync::Arc;

use accounts_app::{
    auth::MockAuthService,
    domain::users::{
        MockUsersService,
        records::{UserId, UserRecord},
    },
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_ID: UserId = UserId::from_i64(7);

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_id(TEST_USER_ID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_register_user().never();
    users.expect_get_profile().never();
    users.expect_update_profile().never();

    users
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    Arc::new(State::new(Arc::new(users), Arc::new(strict_auth_mock())))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(Arc::new(strict_users_mock()), Arc::new(auth)))
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_auth(auth)))
            .push(route),
    )
}

/// Users routes as an anonymous caller.
pub(crate) fn public_users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .push(route),
    )
}

/// Users routes as [`TEST_USER_ID`], bypassing token checks.
pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn make_user(id: UserId) -> UserRecord {
    UserRecord {
        id,
        full_name: "John Doe".to_string(),
        phone_number: "+628123456782".to_string(),
        password_hash: "$2b$04$storedhashstoredhashstoredhashstoredhashstoredhas".to_string(),
        login_count: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: None,
        deleted_at: None,
    }
}
