use crate::config::DatabaseConfig;
use crate::error::{GatewayError, Result};
use crate::store::UserStore;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL
)
"#;

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// SQLite-backed user store
///
/// # Example
///
/// ```no_run
/// use postbridge::config::DatabaseConfig;
/// use postbridge::store::{SqlUserStore, UserStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = SqlUserStore::connect(&DatabaseConfig::default()).await?;
/// store.migrate().await?;
///
/// let user = store.create("Ada", "ada@example.com").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SqlUserStore {
    pool: SqlitePool,
}

impl SqlUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a connection pool, creating the database file if it does not exist
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        tracing::debug!("Connecting to user store at {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Create the `users` table if it is missing
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| GatewayError::Migration(format!("Failed to create users table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn find_many(&self) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn find_unique(&self, id: i32) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, name: &str, email: &str) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (name, email) VALUES (?, ?) RETURNING id, name, email",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created user {}", user.id);
        Ok(user)
    }

    async fn update(&self, id: i32, name: &str) -> Result<UserRecord> {
        sqlx::query_as::<_, UserRecord>(
            "UPDATE users SET name = ? WHERE id = ? RETURNING id, name, email",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(GatewayError::UserNotFound(id))
    }

    async fn delete(&self, id: i32) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            "DELETE FROM users WHERE id = ? RETURNING id, name, email",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(GatewayError::UserNotFound(id))?;

        tracing::debug!("Deleted user {}", user.id);
        Ok(user)
    }
}
