use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};

use crate::{
    transactions::{self, routes::TransactionRoute},
    AppState,
};

use super::{controller, middleware::log_request};

static BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // transactions
        .route(
            TransactionRoute::ListCreate.pattern(),
            get(transactions::controller::get_transactions)
                .post(transactions::controller::create_transaction),
        )
        .route(
            TransactionRoute::Detail.pattern(),
            get(transactions::controller::get_transaction_by_id)
                .put(transactions::controller::replace_transaction_by_id)
                .patch(transactions::controller::edit_transaction_by_id)
                .delete(transactions::controller::delete_transaction_by_id)
                .fallback(transactions::controller::transaction_by_id_fallback),
        )
        .fallback(controller::fallback)
        // layers
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
