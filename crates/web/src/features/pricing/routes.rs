use axum::{Router, routing::post};

use super::handlers::{calculate, calculate_combined};

pub fn routes() -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/calculate-combined", post(calculate_combined))
}
