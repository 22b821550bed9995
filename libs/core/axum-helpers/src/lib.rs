//! # Axum Helpers
//!
//! Shared utilities for building the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (validated JSON)
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export server types
pub use server::{
    HealthResponse, create_app, create_router, health_router, shutdown_signal,
};
