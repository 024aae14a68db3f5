use axum::{
    Json,
    response::{IntoResponse, Response},
};
use pricing::dto::payment::{
    PaymentPlanRequest, PaymentPlanResponse, ValidateAllocationRequest, ValidateAllocationResponse,
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/payments/validate-allocation",
    request_body = ValidateAllocationRequest,
    responses(
        (status = 200, description = "Declared amounts match the required total", body = ValidateAllocationResponse),
        (status = 400, description = "Payment amount mismatch")
    ),
    tag = "payments"
)]
pub async fn validate_allocation(
    Json(req): Json<ValidateAllocationRequest>,
) -> WebResult<Response> {
    let response = services::validate_allocation(&req)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/payments/plan",
    request_body = PaymentPlanRequest,
    responses(
        (status = 200, description = "Payment plan built successfully", body = PaymentPlanResponse),
        (status = 400, description = "Validation error or payment amount mismatch")
    ),
    tag = "payments"
)]
pub async fn create_payment_plan(Json(req): Json<PaymentPlanRequest>) -> WebResult<Response> {
    req.validate()?;

    let response = services::create_payment_plan(&req)?;

    Ok(Json(response).into_response())
}
