//! Argon2 password hashing adapter.
//!
//! DRY: Centralized Argon2 configuration. Hashing is CPU bound, so both
//! operations run on the blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::services::{HashComparer, Hasher};

/// `Hasher` and `HashComparer` over Argon2id with a random salt per hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Adapter;

impl Argon2Adapter {
    pub fn new() -> Self {
        Self
    }

    fn hash_blocking(plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn compare_blocking(plaintext: &str, digest: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| AppError::hashing(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }

    /// Get Argon2 instance with default config.
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[async_trait]
impl Hasher for Argon2Adapter {
    async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || Self::hash_blocking(&plaintext))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }
}

#[async_trait]
impl HashComparer for Argon2Adapter {
    async fn compare(&self, plaintext: &str, digest: &str) -> AppResult<bool> {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();
        tokio::task::spawn_blocking(move || Self::compare_blocking(&plaintext, &digest))
            .await
            .map_err(|e| AppError::internal(format!("Hash comparison task failed: {}", e)))?
    }
}
