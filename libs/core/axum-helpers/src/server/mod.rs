//! Server infrastructure module.
//!
//! Provides router assembly with OpenAPI documentation, a liveness
//! endpoint, and graceful shutdown.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
