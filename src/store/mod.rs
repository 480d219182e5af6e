/// Relational store for Users
///
/// The GraphQL layer only sees the `UserStore` trait; `SqlUserStore` is the
/// SQLite implementation used by the server.

mod users;

pub use users::{SqlUserStore, UserRecord};

use crate::error::Result;
use async_trait::async_trait;

/// ORM-style access to the `users` table
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, ordered by id
    async fn find_many(&self) -> Result<Vec<UserRecord>>;

    /// The user with `id`, or `None` when no row matches
    async fn find_unique(&self, id: i32) -> Result<Option<UserRecord>>;

    /// Insert a user and return it with its store-assigned id
    async fn create(&self, name: &str, email: &str) -> Result<UserRecord>;

    /// Rename the user with `id`. Fails with `UserNotFound` when no row matches.
    async fn update(&self, id: i32, name: &str) -> Result<UserRecord>;

    /// Remove the user with `id` and return the removed row.
    /// Fails with `UserNotFound` when no row matches.
    async fn delete(&self, id: i32) -> Result<UserRecord>;
}
