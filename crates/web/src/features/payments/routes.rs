use axum::{Router, routing::post};

use super::handlers::{create_payment_plan, validate_allocation};

pub fn routes() -> Router {
    Router::new()
        .route("/validate-allocation", post(validate_allocation))
        .route("/plan", post(create_payment_plan))
}
