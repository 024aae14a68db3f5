use axum::{
    Json,
    response::{IntoResponse, Response},
};
use pricing::dto::{
    calculation::{CalculateRequest, CalculateResponse},
    combined::{CombinedCalculateRequest, CombinedCalculateResponse},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/pricing/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Performance priced successfully", body = CalculateResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "pricing"
)]
pub async fn calculate(Json(req): Json<CalculateRequest>) -> WebResult<Response> {
    req.validate()?;

    let response = services::calculate(&req)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/pricing/calculate-combined",
    request_body = CombinedCalculateRequest,
    responses(
        (status = 200, description = "Combined checkout priced successfully", body = CombinedCalculateResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "pricing"
)]
pub async fn calculate_combined(
    Json(req): Json<CombinedCalculateRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let response = services::calculate_combined(&req)?;

    Ok(Json(response).into_response())
}
