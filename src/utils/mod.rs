//! Utility adapters.

mod email_validator_adapter;

pub use email_validator_adapter::EmailValidatorAdapter;
