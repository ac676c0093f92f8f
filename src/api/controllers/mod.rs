//! Concrete controllers.

mod login;
mod signup;

pub use login::{AccessTokenBody, LoginController};
pub use signup::SignUpController;
