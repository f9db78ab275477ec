use uuid::Uuid;

use crate::app::models::api_error::ApiError;

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto, edit_transaction_dto::EditTransactionDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    errors::TransactionsApiError,
    models::transaction::Transaction,
    repository::TransactionsRepository,
};

pub async fn create_transaction(
    dto: &CreateTransactionDto,
    repository: &dyn TransactionsRepository,
) -> Result<Transaction, ApiError> {
    let transaction = repository
        .create_transaction(&Transaction::new(dto))
        .await?;
    tracing::debug!(id = %transaction.id, "created transaction");

    Ok(transaction)
}

pub async fn get_transactions(
    dto: &GetTransactionsFilterDto,
    repository: &dyn TransactionsRepository,
) -> Result<Vec<Transaction>, ApiError> {
    repository.get_transactions(dto).await
}

pub async fn get_transaction_by_id(
    id: &Uuid,
    repository: &dyn TransactionsRepository,
) -> Result<Transaction, ApiError> {
    repository.get_transaction_by_id(id).await
}

pub async fn edit_transaction_by_id(
    id: &Uuid,
    dto: &EditTransactionDto,
    repository: &dyn TransactionsRepository,
) -> Result<Transaction, ApiError> {
    if dto.is_empty() {
        return Err(TransactionsApiError::NothingToEdit.value());
    }

    let transaction = repository.edit_transaction_by_id(id, dto).await?;
    tracing::debug!(%id, "edited transaction");

    Ok(transaction)
}

pub async fn replace_transaction_by_id(
    id: &Uuid,
    dto: CreateTransactionDto,
    repository: &dyn TransactionsRepository,
) -> Result<Transaction, ApiError> {
    edit_transaction_by_id(id, &EditTransactionDto::from(dto), repository).await
}

pub async fn delete_transaction_by_id(
    id: &Uuid,
    repository: &dyn TransactionsRepository,
) -> Result<(), ApiError> {
    repository.delete_transaction_by_id(id).await?;
    tracing::debug!(%id, "deleted transaction");

    Ok(())
}
