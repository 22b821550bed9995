//! In-memory todo store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TodoResult;
use crate::models::Todo;
use crate::repository::TodoRepository;

#[derive(Debug)]
struct StoreInner {
    next_id: i64,
    todos: HashMap<i64, Todo>,
}

/// In-memory implementation of [`TodoRepository`].
///
/// A single reader/writer lock guards both the id counter and the id→todo
/// map. Writers (`next_id`, `save`, `update`, `delete`) take the write lock;
/// readers (`find_by_id`, `find_all`) run concurrently with each other but
/// never with a writer. Ids start at 1 and are never reused after deletion.
///
/// Cloning is cheap and shares the underlying store.
#[derive(Debug, Clone)]
pub struct InMemoryTodoRepository {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                next_id: 1,
                todos: HashMap::new(),
            })),
        }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn next_id(&self) -> TodoResult<i64> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        Ok(id)
    }

    async fn save(&self, todo: Todo) -> TodoResult<()> {
        let mut inner = self.inner.write().await;
        inner.todos.insert(todo.id, todo);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> TodoResult<Option<Todo>> {
        let inner = self.inner.read().await;
        Ok(inner.todos.get(&id).cloned())
    }

    async fn find_all(&self) -> TodoResult<Vec<Todo>> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn update(&self, todo: Todo) -> TodoResult<bool> {
        let mut inner = self.inner.write().await;
        if !inner.todos.contains_key(&todo.id) {
            return Ok(false);
        }
        inner.todos.insert(todo.id, todo);
        Ok(true)
    }

    async fn delete(&self, id: i64) -> TodoResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.todos.remove(&id).is_some())
    }
}
