//! State

use std::sync::Arc;

use accounts_app::{auth::AuthService, context::AppContext, domain::users::UsersService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) users: Arc<dyn UsersService>,
    pub(crate) auth: Arc<dyn AuthService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(users: Arc<dyn UsersService>, auth: Arc<dyn AuthService>) -> Self {
        Self { users, auth }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: &AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.users.clone(), app.auth.clone()))
    }
}
