use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::{validate_amount, validate_text};

/// Body of `POST /transactions/`, and of `PUT /transactions/<id>/` where both fields are
/// replaced at once.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionDto {
    #[validate(
        length(min = 1, max = 255, message = "text must be between 1 and 255 characters."),
        custom(function = "validate_text")
    )]
    pub text: String,
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_number_or_string_amount() {
        let dto: CreateTransactionDto =
            serde_json::from_str(r#"{"text": "Salary", "amount": 2500.75}"#).unwrap();
        assert_eq!(dto.amount.to_string(), "2500.75");
        assert!(dto.validate().is_ok());

        let dto: CreateTransactionDto =
            serde_json::from_str(r#"{"text": "Coffee", "amount": "-3.50"}"#).unwrap();
        assert_eq!(dto.amount.to_string(), "-3.50");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn missing_amount_does_not_deserialize() {
        assert!(serde_json::from_str::<CreateTransactionDto>(r#"{"text": "Salary"}"#).is_err());
    }

    #[test]
    fn rejects_long_or_blank_text() {
        let dto: CreateTransactionDto = serde_json::from_value(serde_json::json!({
            "text": "x".repeat(256),
            "amount": 1,
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("text"));

        let dto: CreateTransactionDto =
            serde_json::from_str(r#"{"text": "  ", "amount": 1}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_fractional_cents() {
        let dto: CreateTransactionDto =
            serde_json::from_str(r#"{"text": "Tip", "amount": "0.125"}"#).unwrap();
        let errors = dto.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("amount"));
    }
}
