//! Application services layer - Use cases and business logic.
//!
//! Services implement the domain use-case traits on top of the data
//! protocols in [`protocols`], which `crate::infra` fulfils.

mod add_account;
mod authentication;
pub mod container;
pub mod protocols;

// Service Container
pub use container::{ServiceContainer, Services};

// Use case implementations
pub use add_account::DbAddAccount;
pub use authentication::DbAuthentication;

// Data protocols
pub use protocols::{
    AddAccountRepository, Encrypter, HashComparer, Hasher, LoadAccountByEmailRepository,
    LogErrorRepository,
};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

#[cfg(any(test, feature = "test-utils"))]
pub use protocols::{
    MockAddAccountRepository, MockEncrypter, MockHashComparer, MockHasher,
    MockLoadAccountByEmailRepository, MockLogErrorRepository,
};
