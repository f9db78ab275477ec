use async_trait::async_trait;
use axum::http::StatusCode;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::sqlx::{get_code_from_db_err, SqlStateCodes},
    },
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

pub struct PgTransactionsRepository {
    pool: PgPool,
}

impl PgTransactionsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_err(e: sqlx::Error) -> ApiError {
    let Some(db_err) = e.as_database_error()
    else {
        tracing::error!(%e);
        return DefaultApiError::InternalServerError.value();
    };

    let Some(code) = get_code_from_db_err(db_err)
    else {
        tracing::error!(%e);
        return DefaultApiError::InternalServerError.value();
    };

    match code.as_str() {
        SqlStateCodes::UNIQUE_VIOLATION => TransactionsApiError::TransactionAlreadyExists.value(),
        SqlStateCodes::NUMERIC_VALUE_OUT_OF_RANGE => ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "amount is out of range.".to_string(),
        },
        _ => {
            tracing::error!(%e);
            DefaultApiError::InternalServerError.value()
        }
    }
}

#[async_trait]
impl TransactionsRepository for PgTransactionsRepository {
    async fn create_transaction(&self, transaction: &Transaction) -> Result<Transaction, ApiError> {
        let sqlx_result = sqlx::query_as::<_, Transaction>(
            "
            INSERT INTO transactions (
                id, text, amount, created_at
            )
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(transaction.id)
        .bind(&transaction.text)
        .bind(transaction.amount)
        .bind(transaction.created_at)
        .fetch_one(&self.pool)
        .await;

        match sqlx_result {
            Ok(transaction) => Ok(transaction),
            Err(e) => Err(map_write_err(e)),
        }
    }

    async fn get_transactions(
        &self,
        dto: &GetTransactionsFilterDto,
    ) -> Result<Vec<Transaction>, ApiError> {
        let sql = dto.to_sql()?;

        let mut sqlx = sqlx::query_as::<_, Transaction>(&sql);

        if let Some(search) = dto.search_pattern() {
            sqlx = sqlx.bind(search);
        }

        match sqlx.fetch_all(&self.pool).await {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn get_transaction_by_id(&self, id: &Uuid) -> Result<Transaction, ApiError> {
        let sqlx_result = sqlx::query_as::<_, Transaction>(
            "
            SELECT * FROM transactions
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        match sqlx_result {
            Ok(Some(transaction)) => Ok(transaction),
            Ok(None) => Err(TransactionsApiError::TransactionNotFound.value()),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn edit_transaction_by_id(
        &self,
        id: &Uuid,
        dto: &EditTransactionDto,
    ) -> Result<Transaction, ApiError> {
        let sql = dto.to_sql()?;

        let mut sqlx = sqlx::query_as::<_, Transaction>(&sql);

        if let Some(text) = &dto.text {
            sqlx = sqlx.bind(text);
        }
        if let Some(amount) = dto.amount {
            sqlx = sqlx.bind(Transaction::fixed_amount(amount));
        }
        sqlx = sqlx.bind(id);

        match sqlx.fetch_optional(&self.pool).await {
            Ok(Some(transaction)) => Ok(transaction),
            Ok(None) => Err(TransactionsApiError::TransactionNotFound.value()),
            Err(e) => Err(map_write_err(e)),
        }
    }

    async fn delete_transaction_by_id(&self, id: &Uuid) -> Result<(), ApiError> {
        let sqlx_result = sqlx::query(
            "
            DELETE FROM transactions
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await;

        match sqlx_result {
            Ok(result) => match result.rows_affected() > 0 {
                true => Ok(()),
                false => Err(TransactionsApiError::TransactionNotFound.value()),
            },
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }
}
