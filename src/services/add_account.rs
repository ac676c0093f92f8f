//! Add-account use case backed by a hasher and an account repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::protocols::{AddAccountRepository, Hasher};
use crate::domain::{AccountModel, AddAccount, AddAccountModel};
use crate::errors::AppResult;

/// Hashes the password, then stores the account.
pub struct DbAddAccount {
    hasher: Arc<dyn Hasher>,
    repository: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(hasher: Arc<dyn Hasher>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self { hasher, repository }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, account: AddAccountModel) -> AppResult<AccountModel> {
        let hashed_password = self.hasher.hash(&account.password).await?;

        self.repository
            .add(AddAccountModel {
                password: hashed_password,
                ..account
            })
            .await
    }
}
