//! Flat single-file variant of the todo service.
//!
//! Same observable behavior as the layered variant, deliberately kept in
//! one file: entity, store, business rules, and HTTP handlers together.
//! The store is a single reader/writer lock over the id counter and the
//! id→todo map, so writers serialize and ids are never handed out twice.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Todo {
    id: i64,
    title: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct CreateTodo {
    title: String,
}

#[derive(Debug, Deserialize)]
struct UpdateTodo {
    title: String,
    completed: bool,
}

#[derive(Debug)]
struct Store {
    next_id: i64,
    todos: HashMap<i64, Todo>,
}

impl Store {
    fn new() -> Self {
        Self {
            next_id: 1,
            todos: HashMap::new(),
        }
    }
}

type SharedStore = Arc<RwLock<Store>>;

fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(store)
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let store = store.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Response {
    let title = input.title.trim();
    if title.is_empty() {
        return (StatusCode::BAD_REQUEST, "title required").into_response();
    }

    let mut store = store.write().await;
    let id = store.next_id;
    store.next_id += 1;
    let todo = Todo {
        id,
        title: title.to_string(),
        completed: false,
    };
    store.todos.insert(id, todo.clone());

    (StatusCode::CREATED, Json(todo)).into_response()
}

async fn get_todo(State(store): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let store = store.read().await;
    match store.todos.get(&id) {
        Some(todo) => Json(todo.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Response {
    let mut store = store.write().await;
    match store.todos.get_mut(&id) {
        Some(todo) => {
            let title = input.title.trim();
            if !title.is_empty() {
                todo.title = title.to_string();
            }
            todo.completed = input.completed;
            Json(todo.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_todo(State(store): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let mut store = store.write().await;
    if store.todos.remove(&id).is_some() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let store: SharedStore = Arc::new(RwLock::new(Store::new()));

    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{}", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("todo-flat listening on {}", addr);
    axum::serve(listener, app(store)).await
}
