use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    TransactionNotFound,
    TransactionAlreadyExists,
    NothingToEdit,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TransactionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Transaction not found.".to_string(),
            },
            Self::TransactionAlreadyExists => ApiError {
                code: StatusCode::CONFLICT,
                message: "Transaction already exists.".to_string(),
            },
            Self::NothingToEdit => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Received nothing to edit.".to_string(),
            },
        }
    }
}
