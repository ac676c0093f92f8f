//! Controller factories.
//!
//! Each factory wires a controller from the container and wraps it in the
//! error-logging decorator.

use std::sync::Arc;

use super::controllers::{LoginController, SignUpController};
use super::decorators::LogControllerDecorator;
use super::protocols::Controller;
use crate::services::ServiceContainer;

pub fn make_signup_controller(services: &dyn ServiceContainer) -> Arc<dyn Controller> {
    let controller = Arc::new(SignUpController::new(
        services.email_validator(),
        services.add_account(),
    ));
    Arc::new(LogControllerDecorator::new(
        controller,
        services.log_error_repository(),
    ))
}

pub fn make_login_controller(services: &dyn ServiceContainer) -> Arc<dyn Controller> {
    let controller = Arc::new(LoginController::new(
        services.email_validator(),
        services.authentication(),
    ));
    Arc::new(LogControllerDecorator::new(
        controller,
        services.log_error_repository(),
    ))
}
