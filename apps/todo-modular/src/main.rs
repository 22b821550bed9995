use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_todos::{InMemoryTodoRepository, TodoService, handlers};
use tracing::info;

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Wire the layered stack: store -> service -> handlers
    let repository = InMemoryTodoRepository::new();
    let service = TodoService::new(repository);

    let api_routes = Router::new().nest("/todos", handlers::router(service));

    // Router with OpenAPI docs, nested under /api
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoint
    let app = router.merge(health_router(config.app));

    info!("Starting todo-modular (layered variant)");
    create_app(app, &config.server).await?;

    info!("todo-modular shutdown complete");
    Ok(())
}
