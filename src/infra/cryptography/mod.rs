//! Password hashing and token issuing adapters.

mod argon2_adapter;
mod jwt_adapter;

pub use argon2_adapter::Argon2Adapter;
pub use jwt_adapter::{Claims, JwtAdapter};
