use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    http::header::CONTENT_TYPE,
    http::{HeaderValue, Method},
    BoxError,
};
use sqlx::postgres::PgPoolOptions;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    transactions::repository::{
        MemoryTransactionsRepository, PgTransactionsRepository, TransactionsRepository,
    },
};

mod app;
mod transactions;

pub struct AppState {
    pub transactions: Arc<dyn TransactionsRepository>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.unwrap_or(8000);
    let rate_limit = match envy.rate_limit() {
        Ok(rate) => rate,
        Err(e) => panic!("invalid RATE_LIMIT_PER_SECOND: {}", e),
    };
    let allow_origin = match &envy.frontend_url {
        Some(url) => match HeaderValue::from_str(url) {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(e) => panic!("invalid FRONTEND_URL: {}", e),
        },
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ]);

    let transactions: Arc<dyn TransactionsRepository> = match &envy.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(envy.database_max_connections.unwrap_or(10))
                .idle_timeout(Some(Duration::from_secs(60)))
                .connect(database_url)
                .await
                .expect("failed to connect to database");

            sqlx::migrate!()
                .run(&pool)
                .await
                .expect("failed to run migrations");

            tracing::info!("connected to db");

            Arc::new(PgTransactionsRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, transactions are kept in memory");
            Arc::new(MemoryTransactionsRepository::default())
        }
    };

    let state = Arc::new(AppState { transactions });

    // app
    let app = app::router::router(state)
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%e);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("shutting down");
}
