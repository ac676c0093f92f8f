//! Domain layer - Core business entities and use-case contracts
//!
//! DDD: Domain layer has NO infrastructure dependencies (except error types).
//! Contains: Entities, request models, use-case traits.

pub mod account;
pub mod usecases;

pub use account::{AccountModel, AddAccountModel};
pub use usecases::{AddAccount, Authentication};

#[cfg(any(test, feature = "test-utils"))]
pub use usecases::{MockAddAccount, MockAuthentication};
