//! Kitten persistence interface used by handlers.
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct KittenRow {
    #[sqlx(rename = "kittenId")]
    pub kitten_id: i64,

    pub name: String,
    pub age: i32,
    pub color: String,

    #[sqlx(rename = "ownerId")]
    pub owner_id: i64,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Insert 用。owner は ownership::stamp_owner で確定させる
#[derive(Debug, Clone)]
pub struct NewKitten {
    pub owner_id: i64,
    pub name: String,
    pub age: i32,
    pub color: String,
}

/// A minimal kitten store.
///
/// Implementations must be shareable across requests (`Arc<dyn KittenRepo>` in `AppState`).
/// There is no update operation: `owner_id` is fixed at insert time.
#[async_trait]
pub trait KittenRepo: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn create(&self, kitten: NewKitten) -> Result<KittenRow, RepoError>;

    async fn get(&self, kitten_id: i64) -> Result<Option<KittenRow>, RepoError>;

    // Delete only if `owner_id` still matches.
    //
    // Returns:
    // - `Ok(true)`  if a row was deleted
    // - `Ok(false)` if nothing matched (already deleted, or not owned)
    async fn delete_owned(&self, kitten_id: i64, owner_id: i64) -> Result<bool, RepoError>;
}
