use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use rand::rngs::OsRng;
use tracing::error;

/// One-way hashing capability injected into the user service.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plain: &str) -> anyhow::Result<String>;
    async fn verify(&self, plain: &str, hash: &str) -> anyhow::Result<bool>;
}

/// Argon2 implementation. Hashing is deliberately slow, so both operations
/// run on the blocking pool instead of stalling async worker threads.
pub struct Argon2Hasher;

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash(&self, plain: &str) -> anyhow::Result<String> {
        let plain = plain.to_owned();
        tokio::task::spawn_blocking(move || hash_password(&plain)).await?
    }

    async fn verify(&self, plain: &str, hash: &str) -> anyhow::Result<bool> {
        let plain = plain.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&plain, &hash)).await?
    }
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    // A malformed hash can never match; not an error for the caller.
    let Ok(parsed) = PasswordHash::new(hash) else {
        return Ok(false);
    };
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn hash_differs_from_plaintext_and_is_salted() {
        let password = "password123";
        let first = hash_password(password).expect("hashing should succeed");
        let second = hash_password(password).expect("hashing should succeed");
        assert_ne!(first, password);
        assert_ne!(first, second);
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_returns_false_on_malformed_hash() {
        let ok = verify_password("anything", "not-a-valid-hash").expect("verify should not error");
        assert!(!ok);
    }

    #[tokio::test]
    async fn hasher_trait_roundtrip() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash("hunter2").await.expect("hash");
        assert_ne!(hash, "hunter2");
        assert!(hasher.verify("hunter2", &hash).await.expect("verify"));
        assert!(!hasher.verify("hunter3", &hash).await.expect("verify"));
    }
}
