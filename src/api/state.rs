//! Application state - Decorated controllers and shared infrastructure.

use std::sync::Arc;

use super::factories::{make_login_controller, make_signup_controller};
use super::protocols::Controller;
use crate::config::Config;
use crate::infra::Database;
use crate::services::Services;

/// Application state shared by every handler.
///
/// Use `from_config()` to wire the production adapters.
#[derive(Clone)]
pub struct AppState {
    /// Signup controller (decorated)
    pub signup_controller: Arc<dyn Controller>,
    /// Login controller (decorated)
    pub login_controller: Arc<dyn Controller>,
    /// Database connection, checked by `/health` when present
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);

        Self {
            signup_controller: make_signup_controller(&services),
            login_controller: make_login_controller(&services),
            database: Some(database),
        }
    }

    /// Create application state with manually injected controllers.
    pub fn new(
        signup_controller: Arc<dyn Controller>,
        login_controller: Arc<dyn Controller>,
    ) -> Self {
        Self {
            signup_controller,
            login_controller,
            database: None,
        }
    }

    /// Attach a database for health checks.
    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }
}
