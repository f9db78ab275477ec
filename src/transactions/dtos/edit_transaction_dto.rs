use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::{app::models::api_error::ApiError, transactions::errors::TransactionsApiError};

use super::{create_transaction_dto::CreateTransactionDto, validate_amount, validate_text};

#[derive(Debug, Deserialize, Validate)]
pub struct EditTransactionDto {
    #[validate(
        length(min = 1, max = 255, message = "text must be between 1 and 255 characters."),
        custom(function = "validate_text")
    )]
    pub text: Option<String>,
    #[validate(custom(function = "validate_amount"))]
    pub amount: Option<Decimal>,
}

impl From<CreateTransactionDto> for EditTransactionDto {
    fn from(dto: CreateTransactionDto) -> Self {
        Self {
            text: Some(dto.text),
            amount: Some(dto.amount),
        }
    }
}

impl EditTransactionDto {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.amount.is_none()
    }

    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE transactions SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.text.is_some() {
            clauses.push(["text = $", &index.to_string()].concat());
            index += 1;
        }
        if self.amount.is_some() {
            clauses.push(["amount = $", &index.to_string()].concat());
            index += 1;
        }

        // CLAUSES BUILDER
        if clauses.is_empty() {
            return Err(TransactionsApiError::NothingToEdit.value());
        }

        sql.push_str(&clauses.join(", "));
        sql.push_str(&[" WHERE id = $", &index.to_string()].concat());
        sql.push_str(" RETURNING *");

        tracing::debug!(sql);

        Ok(sql)
    }
}
