use async_trait::async_trait;
use uuid::Uuid;

use crate::app::models::api_error::ApiError;

use super::{
    dtos::{
        edit_transaction_dto::EditTransactionDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    models::transaction::Transaction,
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryTransactionsRepository;
pub use postgres::PgTransactionsRepository;

/// Storage for transactions. Every method is a single atomic operation.
#[async_trait]
pub trait TransactionsRepository: Send + Sync {
    /// Stores a new transaction and returns it as stored.
    async fn create_transaction(&self, transaction: &Transaction) -> Result<Transaction, ApiError>;

    async fn get_transactions(
        &self,
        dto: &GetTransactionsFilterDto,
    ) -> Result<Vec<Transaction>, ApiError>;

    async fn get_transaction_by_id(&self, id: &Uuid) -> Result<Transaction, ApiError>;

    async fn edit_transaction_by_id(
        &self,
        id: &Uuid,
        dto: &EditTransactionDto,
    ) -> Result<Transaction, ApiError>;

    async fn delete_transaction_by_id(&self, id: &Uuid) -> Result<(), ApiError>;
}
