//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::{Account, UpdatedAccount};
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CreateAccountRequest, UpdateBalanceRequest};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account API",
        version = "1.0.0",
        description = "Create, list, update and delete customer accounts.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::list_accounts,
        crate::gateway::handlers::account::list_customer_accounts,
        crate::gateway::handlers::account::update_account_balance,
        crate::gateway::handlers::account::delete_account,
    ),
    components(
        schemas(
            HealthResponse,
            Account,
            UpdatedAccount,
            CreateAccountRequest,
            UpdateBalanceRequest,
        )
    ),
    tags(
        (name = "Accounts", description = "Account lifecycle"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_generates() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Account API");
        assert_eq!(doc.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let json = ApiDoc::openapi().to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Account API"));
    }

    #[test]
    fn test_account_endpoints_registered() {
        let paths = ApiDoc::openapi().paths;
        assert!(paths.paths.contains_key("/health"));
        assert!(paths.paths.contains_key("/accounts"));
        assert!(paths.paths.contains_key("/accounts/{id}"));
        assert!(
            paths
                .paths
                .contains_key("/accounts/customer/{customer_id}/account/{account_id}")
        );
    }

    #[test]
    fn test_account_schema_registered() {
        let components = ApiDoc::openapi()
            .components
            .expect("should have components");
        assert!(components.schemas.contains_key("Account"));
        assert!(components.schemas.contains_key("UpdatedAccount"));
    }
}
