//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the todo API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "In-memory todo item management service (layered variant)",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/todos", api = domain_todos::ApiDoc)
    ),
    tags(
        (name = "Todos", description = "Todo item management endpoints")
    )
)]
pub struct ApiDoc;
