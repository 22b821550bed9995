use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::Todo;

/// Repository trait for Todo persistence
///
/// This trait defines the data access interface the service depends on.
/// The canonical implementation is [`crate::memory::InMemoryTodoRepository`];
/// a durable backend can be substituted without changing the service, mapping
/// its own failures into `TodoError::Storage`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Reserve the next identifier.
    ///
    /// Values are monotonically increasing starting at 1 and are never
    /// handed out twice, even under concurrent callers.
    async fn next_id(&self) -> TodoResult<i64>;

    /// Insert or overwrite the record at `todo.id` unconditionally
    async fn save(&self, todo: Todo) -> TodoResult<()>;

    /// Get a todo by ID
    async fn find_by_id(&self, id: i64) -> TodoResult<Option<Todo>>;

    /// Snapshot of all current todos, in unspecified order
    async fn find_all(&self) -> TodoResult<Vec<Todo>>;

    /// Replace the record at `todo.id` only if that id currently exists.
    ///
    /// Existence check and replace are a single critical section, so a
    /// racing delete is observed as `false`, never as a replace of a
    /// nonexistent record.
    async fn update(&self, todo: Todo) -> TodoResult<bool>;

    /// Remove the record if present; returns whether removal happened
    async fn delete(&self, id: i64) -> TodoResult<bool>;
}
