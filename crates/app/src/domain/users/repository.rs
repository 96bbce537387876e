//! Users Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::users::{
    data::{NewUser, ProfileUpdate},
    records::{UserId, UserRecord},
};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const FIND_USER_BY_ID_SQL: &str = include_str!("sql/find_user_by_id.sql");
const FIND_USER_BY_PHONE_NUMBER_SQL: &str = include_str!("sql/find_user_by_phone_number.sql");
const UPDATE_USER_PROFILE_SQL: &str = include_str!("sql/update_user_profile.sql");
const INCREMENT_LOGIN_COUNT_SQL: &str = include_str!("sql/increment_login_count.sql");

/// Storage for user accounts. Soft-deleted rows are invisible to every method.
#[automock]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a user and return the stored row with its assigned id.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, sqlx::Error>;

    async fn find_by_id(&self, user: UserId) -> Result<Option<UserRecord>, sqlx::Error>;

    async fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error>;

    /// Apply the supplied fields. Returns `None` when the user does not exist.
    async fn update_profile(
        &self,
        user: UserId,
        update: ProfileUpdate,
    ) -> Result<Option<UserRecord>, sqlx::Error>;

    /// Bump the login counter, returning the number of rows touched.
    async fn increment_login_count(&self, user: UserId) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    #[tracing::instrument(name = "users.repository.create_user", skip_all, err)]
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.full_name)
            .bind(user.phone_number)
            .bind(user.password_hash)
            .fetch_one(&self.pool)
            .await
    }

    async fn find_by_id(&self, user: UserId) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_ID_SQL)
            .bind(user.into_i64())
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_PHONE_NUMBER_SQL)
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
    }

    #[tracing::instrument(
        name = "users.repository.update_profile",
        skip(self, update),
        fields(user_id = %user),
        err
    )]
    async fn update_profile(
        &self,
        user: UserId,
        update: ProfileUpdate,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(UPDATE_USER_PROFILE_SQL)
            .bind(user.into_i64())
            .bind(update.full_name)
            .bind(update.phone_number)
            .fetch_optional(&self.pool)
            .await
    }

    async fn increment_login_count(&self, user: UserId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(INCREMENT_LOGIN_COUNT_SQL)
            .bind(user.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: UserId::from_i64(row.try_get("id")?),
            full_name: row.try_get("full_name")?,
            phone_number: row.try_get("phone_number")?,
            password_hash: row.try_get("password")?,
            login_count: row.try_get("login_count")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row
                .try_get::<Option<SqlxTimestamp>, _>("updated_at")?
                .map(SqlxTimestamp::to_jiff),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
