//! Capabilities the use cases and the logging decorator depend on.
//!
//! SOLID (DIP): implemented by adapters in `crate::infra`.

use async_trait::async_trait;

use crate::domain::{AccountModel, AddAccountModel};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way password hashing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Hasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> AppResult<String>;
}

/// Check a plaintext password against a stored digest.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HashComparer: Send + Sync {
    async fn compare(&self, plaintext: &str, digest: &str) -> AppResult<bool>;
}

/// Issue an access token for a subject.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Encrypter: Send + Sync {
    fn encrypt(&self, subject: &str) -> AppResult<String>;
}

/// Persist a new account. `account.password` is already hashed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> AppResult<AccountModel>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LoadAccountByEmailRepository: Send + Sync {
    async fn load_by_email(&self, email: &str) -> AppResult<Option<AccountModel>>;
}

/// Diagnostic sink for server failures.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    async fn log_error(&self, stack: &str) -> AppResult<()>;
}
