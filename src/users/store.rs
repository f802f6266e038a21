use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID, store-assigned
    pub name: String,
    pub email: String,              // unique
    #[serde(skip_serializing)]
    pub password_hash: String,      // Argon2 hash, not exposed in JSON
    pub created_at: OffsetDateTime, // store-assigned on insert
    pub updated_at: OffsetDateTime,
}

/// Values supplied for an insert; the store fills in the rest.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already taken")]
    DuplicateEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Durable user table. The unique index on email is the sole arbiter between
/// concurrent inserts of the same address; implementations must surface that
/// rejection as `DuplicateEmail`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn select_all(&self) -> Result<Vec<User>, StoreError>;
    async fn select_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}
