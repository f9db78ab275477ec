use std::time::Instant;

use axum::{http::Request, middleware::Next, response::Response};

use crate::transactions::routes;

pub async fn log_request<B>(req: Request<B>, next: Next<B>) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let route = routes::resolve(&path)
        .map(|m| m.route.name())
        .unwrap_or("unmatched");

    let res = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        route,
        status = res.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request"
    );

    res
}
