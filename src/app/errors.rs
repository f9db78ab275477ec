use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    NotFound,
    MethodNotAllowed,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
            Self::NotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Not found.".to_string(),
            },
            Self::MethodNotAllowed => ApiError {
                code: StatusCode::METHOD_NOT_ALLOWED,
                message: "Method not allowed.".to_string(),
            },
        }
    }
}
