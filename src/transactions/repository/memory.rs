use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    app::models::api_error::ApiError,
    transactions::{
        dtos::{
            edit_transaction_dto::EditTransactionDto,
            get_transactions_filter_dto::GetTransactionsFilterDto,
        },
        errors::TransactionsApiError,
        models::transaction::Transaction,
    },
};

use super::TransactionsRepository;

/// Keeps transactions in process memory. Used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryTransactionsRepository {
    transactions: RwLock<HashMap<Uuid, Transaction>>,
}

#[async_trait]
impl TransactionsRepository for MemoryTransactionsRepository {
    async fn create_transaction(&self, transaction: &Transaction) -> Result<Transaction, ApiError> {
        let mut transactions = self.transactions.write().await;

        if transactions.contains_key(&transaction.id) {
            return Err(TransactionsApiError::TransactionAlreadyExists.value());
        }

        transactions.insert(transaction.id, transaction.clone());

        Ok(transaction.clone())
    }

    async fn get_transactions(
        &self,
        dto: &GetTransactionsFilterDto,
    ) -> Result<Vec<Transaction>, ApiError> {
        let transactions = self.transactions.read().await;

        dto.apply(transactions.values().cloned().collect())
    }

    async fn get_transaction_by_id(&self, id: &Uuid) -> Result<Transaction, ApiError> {
        match self.transactions.read().await.get(id) {
            Some(transaction) => Ok(transaction.clone()),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        }
    }

    async fn edit_transaction_by_id(
        &self,
        id: &Uuid,
        dto: &EditTransactionDto,
    ) -> Result<Transaction, ApiError> {
        if dto.is_empty() {
            return Err(TransactionsApiError::NothingToEdit.value());
        }

        let mut transactions = self.transactions.write().await;

        let Some(transaction) = transactions.get_mut(id)
        else {
            return Err(TransactionsApiError::TransactionNotFound.value());
        };

        transaction.apply(dto);

        Ok(transaction.clone())
    }

    async fn delete_transaction_by_id(&self, id: &Uuid) -> Result<(), ApiError> {
        match self.transactions.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use axum::http::StatusCode;
    use rust_decimal::Decimal;

    use crate::transactions::dtos::create_transaction_dto::CreateTransactionDto;

    use super::*;

    fn transaction(text: &str, amount: &str) -> Transaction {
        Transaction::new(&CreateTransactionDto {
            text: text.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
        })
    }

    #[tokio::test]
    async fn create_then_get() {
        let repository = MemoryTransactionsRepository::default();
        let created = transaction("Salary", "2500");

        repository.create_transaction(&created).await.unwrap();

        assert_eq!(
            repository.get_transaction_by_id(&created.id).await.unwrap(),
            created
        );
    }

    #[tokio::test]
    async fn duplicate_id_conflicts() {
        let repository = MemoryTransactionsRepository::default();
        let created = transaction("Salary", "2500");

        repository.create_transaction(&created).await.unwrap();
        let err = repository.create_transaction(&created).await.unwrap_err();

        assert_eq!(err.code, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let repository = MemoryTransactionsRepository::default();
        let id = Uuid::new_v4();
        let dto = EditTransactionDto {
            text: Some("Rent".to_string()),
            amount: None,
        };

        assert_eq!(
            repository.get_transaction_by_id(&id).await.unwrap_err().code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            repository
                .edit_transaction_by_id(&id, &dto)
                .await
                .unwrap_err()
                .code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            repository.delete_transaction_by_id(&id).await.unwrap_err().code,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn edit_updates_stored_copy() {
        let repository = MemoryTransactionsRepository::default();
        let created = transaction("Rent", "-800");
        repository.create_transaction(&created).await.unwrap();

        let dto = EditTransactionDto {
            text: Some("Rent (March)".to_string()),
            amount: None,
        };
        let edited = repository
            .edit_transaction_by_id(&created.id, &dto)
            .await
            .unwrap();

        assert_eq!(edited.text, "Rent (March)");
        assert_eq!(edited.amount, created.amount);
        assert_eq!(
            repository.get_transaction_by_id(&created.id).await.unwrap(),
            edited
        );
    }

    #[tokio::test]
    async fn delete_removes_from_listing() {
        let repository = MemoryTransactionsRepository::default();
        let kept = transaction("Salary", "2500");
        let deleted = transaction("Coffee", "-3.50");
        repository.create_transaction(&kept).await.unwrap();
        repository.create_transaction(&deleted).await.unwrap();

        repository.delete_transaction_by_id(&deleted.id).await.unwrap();

        let transactions = repository
            .get_transactions(&GetTransactionsFilterDto::default())
            .await
            .unwrap();
        assert_eq!(transactions, vec![kept]);
    }
}
