use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::password::{Argon2Hasher, PasswordHasher};
use crate::users::repo::PgUserStore;
use crate::users::service::UserService;
use crate::users::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub users: UserService,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let store = Arc::new(PgUserStore::new(db.clone())) as Arc<dyn UserStore>;
        let hasher = Arc::new(Argon2Hasher) as Arc<dyn PasswordHasher>;

        Ok(Self {
            db,
            config,
            users: UserService::new(store, hasher),
        })
    }
}
