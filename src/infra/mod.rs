//! Infrastructure layer - External systems integration
//!
//! Adapters behind the capability traits:
//! - Database connection, migrations and repositories (SeaORM)
//! - Password hashing (Argon2) and access tokens (JWT)

pub mod cryptography;
pub mod db;
pub mod repositories;

pub use cryptography::{Argon2Adapter, Claims, JwtAdapter};
pub use db::{Database, Migrator};
pub use repositories::{AccountStore, LogStore};
