use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

use super::{AMOUNT_DECIMAL_PLACES, AMOUNT_MAX_DIGITS};

pub mod create_transaction_dto;
pub mod edit_transaction_dto;
pub mod get_transactions_filter_dto;

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(validation_error("blank", "text must not be blank."));
    }

    Ok(())
}

pub fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > AMOUNT_DECIMAL_PLACES {
        return Err(validation_error(
            "decimal_places",
            "amount must have at most 2 decimal places.",
        ));
    }

    let max = Decimal::from(10_i64.pow(AMOUNT_MAX_DIGITS - AMOUNT_DECIMAL_PLACES));
    if value.abs() >= max {
        return Err(validation_error(
            "max_digits",
            "amount must have at most 10 digits.",
        ));
    }

    Ok(())
}
