//! Todo Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, Todo, UpdateTodo};
use crate::repository::TodoRepository;

/// Todo service providing business logic operations
///
/// The service layer validates inputs, orchestrates repository operations,
/// and defines what constitutes a valid mutation. It holds no state of its
/// own; all shared mutable state lives behind the repository.
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    /// Create a new TodoService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new todo.
    ///
    /// The title is trimmed; a blank title is rejected before any repository
    /// call, so failed creates consume no id. `completed` starts false.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(TodoError::TitleRequired);
        }

        let id = self.repository.next_id().await?;
        let todo = Todo::new(id, title.to_string());
        self.repository.save(todo.clone()).await?;

        tracing::info!(todo_id = id, "Created todo");
        Ok(todo)
    }

    /// Get a todo by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> TodoResult<Todo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id))
    }

    /// List all todos, in unspecified order
    #[instrument(skip(self))]
    pub async fn list(&self) -> TodoResult<Vec<Todo>> {
        self.repository.find_all().await
    }

    /// Update an existing todo.
    ///
    /// A title that is blank after trimming leaves the stored title
    /// unchanged; `completed` always overwrites the stored flag. A delete
    /// racing between the fetch and the write-back surfaces as not-found.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: UpdateTodo) -> TodoResult<Todo> {
        let mut todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id))?;

        todo.apply_update(input);

        if !self.repository.update(todo.clone()).await? {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = id, "Updated todo");
        Ok(todo)
    }

    /// Delete a todo
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> TodoResult<()> {
        if !self.repository.delete(id).await? {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = id, "Deleted todo");
        Ok(())
    }
}

impl<R: TodoRepository> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
