//! Standalone todo microservice.
//!
//! A single deployable exposing the todos domain at `/todos`, with a
//! `/health` liveness endpoint. No OpenAPI surface; the modular variant
//! carries the docs.

use axum::Router;
use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_todos::{InMemoryTodoRepository, TodoService, handlers};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let service = TodoService::new(InMemoryTodoRepository::new());

    let app = Router::new()
        .nest("/todos", handlers::router(service))
        .merge(health_router(config.app))
        .layer(TraceLayer::new_for_http());

    info!("todo-microservice listening on {}", config.server.address());
    create_app(app, &config.server).await?;

    Ok(())
}
