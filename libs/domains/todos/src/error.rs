use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(i64),

    #[error("title required")]
    TitleRequired,

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(id) => AppError::NotFound(format!("Todo {} not found", id)),
            TodoError::TitleRequired => AppError::BadRequest("title required".to_string()),
            TodoError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_is_distinct_from_validation() {
        assert_ne!(TodoError::NotFound(1), TodoError::TitleRequired);
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            TodoError::TitleRequired.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TodoError::NotFound(9).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TodoError::Storage("backend down".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
