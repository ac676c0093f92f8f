//! Service Container - Composition root for capability implementations.
//!
//! SOLID (SRP): Builds and hands out the collaborators controllers need.
//! SOLID (DIP): Exposes trait objects, not concrete adapters, so tests can
//! swap any of them.

use std::sync::Arc;

use super::{DbAddAccount, DbAuthentication, LogErrorRepository};
use crate::api::EmailValidator;
use crate::config::Config;
use crate::domain::{AddAccount, Authentication};
use crate::infra::{AccountStore, Argon2Adapter, JwtAdapter, LogStore};
use crate::utils::EmailValidatorAdapter;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn email_validator(&self) -> Arc<dyn EmailValidator>;

    fn add_account(&self) -> Arc<dyn AddAccount>;

    fn authentication(&self) -> Arc<dyn Authentication>;

    fn log_error_repository(&self) -> Arc<dyn LogErrorRepository>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
    authentication: Arc<dyn Authentication>,
    log_error_repository: Arc<dyn LogErrorRepository>,
}

impl Services {
    /// Create a container from already built services
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
        authentication: Arc<dyn Authentication>,
        log_error_repository: Arc<dyn LogErrorRepository>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
            authentication,
            log_error_repository,
        }
    }

    /// Wire the production adapters over one database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let accounts = Arc::new(AccountStore::new(db.clone()));
        let argon2 = Arc::new(Argon2Adapter::new());
        let jwt = Arc::new(JwtAdapter::new(config));

        let add_account = Arc::new(DbAddAccount::new(argon2.clone(), accounts.clone()));
        let authentication = Arc::new(DbAuthentication::new(accounts, argon2, jwt));

        Self {
            email_validator: Arc::new(EmailValidatorAdapter::new()),
            add_account,
            authentication,
            log_error_repository: Arc::new(LogStore::new(db)),
        }
    }
}

impl ServiceContainer for Services {
    fn email_validator(&self) -> Arc<dyn EmailValidator> {
        self.email_validator.clone()
    }

    fn add_account(&self) -> Arc<dyn AddAccount> {
        self.add_account.clone()
    }

    fn authentication(&self) -> Arc<dyn Authentication> {
        self.authentication.clone()
    }

    fn log_error_repository(&self) -> Arc<dyn LogErrorRepository> {
        self.log_error_repository.clone()
    }
}
