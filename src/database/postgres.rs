use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

use super::models::{NewProfile, ProfileId, UserProfile};
use super::store::{ProfileStore, StoreError};
use crate::config::DatabaseConfig;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS user_profiles (
        id            BIGSERIAL PRIMARY KEY,
        email         VARCHAR(255) NOT NULL,
        name          VARCHAR(255) NOT NULL,
        bio           TEXT NOT NULL DEFAULT '',
        password_hash TEXT NOT NULL,
        created_at    TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at    TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_EMAIL_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS user_profiles_email_key ON user_profiles (lower(email))";

const COLUMNS: &str = "id, email, name, bio, password_hash, created_at, updated_at";

/// PostgreSQL-backed profile store
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool from configuration and makes sure the table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable("DATABASE_URL is not set".to_string()))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        info!("Connected profile store to PostgreSQL");
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_EMAIL_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

fn map_write_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Sqlx(err),
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn list(&self) -> Result<Vec<UserProfile>, StoreError> {
        let sql = format!("SELECT {} FROM user_profiles ORDER BY id", COLUMNS);
        let rows = sqlx::query_as::<_, UserProfile>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: ProfileId) -> Result<Option<UserProfile>, StoreError> {
        let sql = format!("SELECT {} FROM user_profiles WHERE id = $1", COLUMNS);
        let row = sqlx::query_as::<_, UserProfile>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, profile: NewProfile) -> Result<UserProfile, StoreError> {
        let sql = format!(
            "INSERT INTO user_profiles (email, name, bio, password_hash) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        sqlx::query_as::<_, UserProfile>(&sql)
            .bind(&profile.email)
            .bind(&profile.name)
            .bind(&profile.bio)
            .bind(&profile.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn save(&self, profile: &UserProfile) -> Result<UserProfile, StoreError> {
        let sql = format!(
            "UPDATE user_profiles SET email = $2, name = $3, bio = $4, password_hash = $5, updated_at = now() \
             WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        sqlx::query_as::<_, UserProfile>(&sql)
            .bind(profile.id)
            .bind(&profile.email)
            .bind(&profile.name)
            .bind(&profile.bio)
            .bind(&profile.password_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?
            .ok_or(StoreError::NotFound(profile.id))
    }

    async fn delete(&self, id: ProfileId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM user_profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
