pub mod health;

use std::any::Any;

use axum::{response::IntoResponse, response::Response, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::assignment::handlers;
use crate::errors::AppError;
use crate::state::AppState;

/// Turns a handler panic into the generic 500 body instead of a dropped connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/assign-character",
            get(handlers::handle_assign_character),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
