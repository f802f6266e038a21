use std::sync::Arc;

use uuid::Uuid;

use crate::password::PasswordHasher;
use crate::users::dto::CreateUserRequest;
use crate::users::error::UserError;
use crate::users::store::{NewUser, StoreError, User, UserStore};

/// Orchestrates validation, password hashing and store calls, translating
/// store-level failures into the `UserError` taxonomy. Holds no state of its
/// own; every read goes back to the store.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, UserError> {
        self.store
            .select_all()
            .await
            .map_err(|e| UserError::Database(format!("Failed to fetch users: {e}")))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<User, UserError> {
        let uuid = parse_id(id)?;
        match self.store.select_by_id(uuid).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(UserError::NotFound(format!("User with ID {id} not found"))),
            Err(e) => Err(UserError::Database(format!("Failed to fetch user: {e}"))),
        }
    }

    pub async fn create(&self, input: CreateUserRequest) -> Result<User, UserError> {
        if input.name.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return Err(UserError::Validation(
                "Email, password, and name are required".to_string(),
            ));
        }

        let password_hash = self
            .hasher
            .hash(&input.password)
            .await
            .map_err(|e| UserError::Database(format!("Failed to create user: {e}")))?;

        match self
            .store
            .insert(NewUser {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await
        {
            Ok(user) => Ok(user),
            // Duplicate email is a client input error, whatever the store's
            // native error code looked like.
            Err(StoreError::DuplicateEmail) => {
                Err(UserError::Validation("Email already exists".to_string()))
            }
            Err(e) => Err(UserError::Database(format!("Failed to create user: {e}"))),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<User, UserError> {
        let uuid = parse_id(id)?;
        match self.store.delete_by_id(uuid).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(UserError::NotFound(format!("User with ID {id} not found"))),
            Err(e) => Err(UserError::Database(format!("Failed to delete user: {e}"))),
        }
    }
}

/// Empty ids are a validation failure before any store round-trip. A
/// non-empty id that is not a UUID can match no row, so it resolves to the
/// same not-found outcome as an id that was never issued.
fn parse_id(id: &str) -> Result<Uuid, UserError> {
    if id.is_empty() {
        return Err(UserError::Validation("User ID is required".to_string()));
    }
    Uuid::parse_str(id)
        .map_err(|_| UserError::NotFound(format!("User with ID {id} not found")))
}
