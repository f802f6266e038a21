use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::users::store::{NewUser, StoreError, User, UserStore};

/// Postgres-backed user table.
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn map_sqlx(e: sqlx::Error) -> StoreError {
    // email is the only unique column besides the primary key, which the
    // store generates itself.
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateEmail;
        }
    }
    StoreError::Other(e.into())
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn select_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(map_sqlx)?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx)?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(map_sqlx)?;
        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx)?;
        Ok(user)
    }
}
