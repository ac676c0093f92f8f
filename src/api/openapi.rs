//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::adapter::ErrorBody;
use crate::api::controllers::AccessTokenBody;
use crate::api::handlers::account_handler;
use crate::domain::AccountModel;

/// OpenAPI documentation for the account API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account API",
        version = "0.1.0",
        description = "Account signup and login over Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5050", description = "Local development server")
    ),
    paths(
        account_handler::signup,
        account_handler::login,
    ),
    components(
        schemas(
            AccountModel,
            AccessTokenBody,
            ErrorBody,
            account_handler::SignUpRequest,
            account_handler::LoginRequest,
        )
    ),
    tags(
        (name = "Accounts", description = "Account signup and login")
    )
)]
pub struct ApiDoc;
