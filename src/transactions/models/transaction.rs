use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::transactions::{
    dtos::{create_transaction_dto::CreateTransactionDto, edit_transaction_dto::EditTransactionDto},
    AMOUNT_DECIMAL_PLACES,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub text: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(dto: &CreateTransactionDto) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: dto.text.to_string(),
            amount: Self::fixed_amount(dto.amount),
            // TIMESTAMPTZ keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    pub fn apply(&mut self, dto: &EditTransactionDto) {
        if let Some(text) = &dto.text {
            self.text = text.to_string();
        }
        if let Some(amount) = dto.amount {
            self.amount = Self::fixed_amount(amount);
        }
    }

    /// Amounts are always rendered with two decimal places, the way a NUMERIC(10, 2)
    /// column returns them.
    pub fn fixed_amount(amount: Decimal) -> Decimal {
        let mut amount = amount;
        amount.rescale(AMOUNT_DECIMAL_PLACES);
        amount
    }

    pub fn sortable_fields() -> [&'static str; 2] {
        return ["created_at", "amount"];
    }
}
