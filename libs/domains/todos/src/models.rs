use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Todo entity - the sole record type of this domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Unique identifier, assigned by the store, never reused
    pub id: i64,
    /// Title, non-empty after trimming
    pub title: String,
    /// Completion flag, false at creation
    pub completed: bool,
}

/// DTO for creating a new todo
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTodo {
    #[validate(length(min = 1))]
    pub title: String,
}

/// DTO for updating an existing todo.
///
/// The whole payload is supplied on every call. A title that is blank after
/// trimming leaves the stored title unchanged; `completed` always overwrites
/// the stored flag.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Create a new todo with `completed` initialized to false
    pub fn new(id: i64, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    /// Apply the partial-replace merge from an UpdateTodo DTO
    pub fn apply_update(&mut self, update: UpdateTodo) {
        let title = update.title.trim();
        if !title.is_empty() {
            self.title = title.to_string();
        }
        self.completed = update.completed;
    }
}
