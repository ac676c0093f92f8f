//! Use-case contracts invoked by the controllers.
//!
//! SOLID (DIP): controllers depend on these traits; `crate::services`
//! provides the database-backed implementations.

use async_trait::async_trait;

use super::account::{AccountModel, AddAccountModel};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Create an account from signup data.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> AppResult<AccountModel>;
}

/// Exchange credentials for an access token.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Authentication: Send + Sync {
    /// Returns `None` when the credentials do not resolve to an account.
    async fn auth(&self, email: String, password: String) -> AppResult<Option<String>>;
}
