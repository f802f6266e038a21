use serde::Deserialize;

/// Request body for user creation. Fields default to empty so a missing one
/// reaches the service's validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
