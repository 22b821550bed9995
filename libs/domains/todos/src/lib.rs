//! Todos Domain
//!
//! Layered implementation of the todo-item service:
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules, validation
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! The repository owns the only shared mutable state (the id→todo map and
//! the id counter) and is injected into the service at construction time,
//! so tests can run against independent store instances and alternative
//! backends can be substituted without touching the service.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{handlers, memory::InMemoryTodoRepository, service::TodoService};
//!
//! let repository = InMemoryTodoRepository::new();
//! let service = TodoService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryTodoRepository;
pub use models::{CreateTodo, Todo, UpdateTodo};
pub use repository::TodoRepository;
pub use service::TodoService;
