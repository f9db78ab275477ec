use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::LOCATION, HeaderName, StatusCode},
    Json,
};
use validator::Validate;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        structs::{json_from_request::JsonFromRequest, query_from_request::QueryFromRequest},
    },
    AppState,
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto, edit_transaction_dto::EditTransactionDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    models::transaction::Transaction,
    routes::{self, TransactionId},
    service,
};

fn validation_error(e: validator::ValidationErrors) -> ApiError {
    ApiError {
        code: StatusCode::BAD_REQUEST,
        message: e.to_string(),
    }
}

pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetTransactionsFilterDto>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(validation_error(e));
    }

    match service::get_transactions(&dto, state.transactions.as_ref()).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}

pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Transaction>), ApiError> {
    if let Err(e) = dto.validate() {
        return Err(validation_error(e));
    }

    let transaction = service::create_transaction(&dto, state.transactions.as_ref()).await?;

    let Some(location) = routes::reverse(routes::TRANSACTION_DETAIL, Some(&transaction.id))
    else {
        return Err(DefaultApiError::InternalServerError.value());
    };

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(transaction)))
}

pub async fn get_transaction_by_id(
    State(state): State<Arc<AppState>>,
    TransactionId(id): TransactionId,
) -> Result<Json<Transaction>, ApiError> {
    match service::get_transaction_by_id(&id, state.transactions.as_ref()).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn replace_transaction_by_id(
    State(state): State<Arc<AppState>>,
    TransactionId(id): TransactionId,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<Json<Transaction>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(validation_error(e));
    }

    match service::replace_transaction_by_id(&id, dto, state.transactions.as_ref()).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn edit_transaction_by_id(
    State(state): State<Arc<AppState>>,
    TransactionId(id): TransactionId,
    JsonFromRequest(dto): JsonFromRequest<EditTransactionDto>,
) -> Result<Json<Transaction>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(validation_error(e));
    }

    match service::edit_transaction_by_id(&id, &dto, state.transactions.as_ref()).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

/// Any other method on the detail route. The id is still checked first, so a
/// malformed id is not found whatever the method.
pub async fn transaction_by_id_fallback(TransactionId(_id): TransactionId) -> ApiError {
    DefaultApiError::MethodNotAllowed.value()
}

pub async fn delete_transaction_by_id(
    State(state): State<Arc<AppState>>,
    TransactionId(id): TransactionId,
) -> Result<StatusCode, ApiError> {
    service::delete_transaction_by_id(&id, state.transactions.as_ref()).await?;

    Ok(StatusCode::NO_CONTENT)
}
