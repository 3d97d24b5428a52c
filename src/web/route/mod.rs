mod health;
mod items;

use super::{
    cors::cors,
    error::HttpError,
    extractor::{FromValidate, Query},
    response::Json,
    SharedState,
};

use axum::{middleware, routing::get, Router};

async fn method_not_allowed() -> HttpError {
    HttpError::MethodNotAllowed
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/items", get(items::index).fallback(method_not_allowed))
        .route("/all_items", get(items::all).fallback(method_not_allowed))
        .route("/item", get(items::show).fallback(method_not_allowed))
        .route("/health", get(health::health))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}
