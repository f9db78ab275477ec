use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn fallback() -> ApiError {
    DefaultApiError::NotFound.value()
}
