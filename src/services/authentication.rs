//! Authentication use case: credentials in, access token out.

use async_trait::async_trait;
use std::sync::Arc;

use super::protocols::{Encrypter, HashComparer, LoadAccountByEmailRepository};
use crate::config::DUMMY_PASSWORD_HASH;
use crate::domain::Authentication;
use crate::errors::AppResult;

pub struct DbAuthentication {
    accounts: Arc<dyn LoadAccountByEmailRepository>,
    hash_comparer: Arc<dyn HashComparer>,
    encrypter: Arc<dyn Encrypter>,
}

impl DbAuthentication {
    pub fn new(
        accounts: Arc<dyn LoadAccountByEmailRepository>,
        hash_comparer: Arc<dyn HashComparer>,
        encrypter: Arc<dyn Encrypter>,
    ) -> Self {
        Self {
            accounts,
            hash_comparer,
            encrypter,
        }
    }
}

#[async_trait]
impl Authentication for DbAuthentication {
    async fn auth(&self, email: String, password: String) -> AppResult<Option<String>> {
        let Some(account) = self.accounts.load_by_email(&email).await? else {
            // SECURITY: burn a comparison anyway to avoid email enumeration by timing
            if let Err(e) = self.hash_comparer.compare(&password, DUMMY_PASSWORD_HASH).await {
                tracing::warn!(error = %e, "dummy password comparison failed");
            }
            return Ok(None);
        };

        if !self.hash_comparer.compare(&password, &account.password).await? {
            return Ok(None);
        }

        let token = self.encrypter.encrypt(&account.id)?;
        Ok(Some(token))
    }
}
