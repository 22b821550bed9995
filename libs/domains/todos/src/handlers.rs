use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TodoResult;
use crate::models::{CreateTodo, Todo, UpdateTodo};
use crate::repository::TodoRepository;
use crate::service::TodoService;

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(list_todos, create_todo, get_todo, update_todo, delete_todo),
    components(schemas(Todo, CreateTodo, UpdateTodo)),
    tags(
        (name = "Todos", description = "Todo item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the todos router with all HTTP endpoints
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(shared_service)
}

/// List all todos
#[utoipa::path(
    get,
    path = "",
    tag = "Todos",
    responses(
        (status = 200, description = "List of todos", body = Vec<Todo>)
    )
)]
async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
) -> TodoResult<Json<Vec<Todo>>> {
    let todos = service.list().await?;
    Ok(Json(todos))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = "Todos",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created successfully", body = Todo),
        (status = 400, description = "Title is missing or blank")
    )
)]
async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> TodoResult<impl IntoResponse> {
    let todo = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Todos",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 404, description = "Todo not found")
    )
)]
async fn get_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    Path(id): Path<i64>,
) -> TodoResult<Json<Todo>> {
    let todo = service.get(id).await?;
    Ok(Json(todo))
}

/// Update a todo
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Todos",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Todo updated successfully", body = Todo),
        (status = 404, description = "Todo not found")
    )
)]
async fn update_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> TodoResult<Json<Todo>> {
    let todo = service.update(id, input).await?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Todos",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 204, description = "Todo deleted successfully"),
        (status = 404, description = "Todo not found")
    )
)]
async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    Path(id): Path<i64>,
) -> TodoResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
