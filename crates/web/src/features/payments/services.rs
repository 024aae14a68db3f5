use pricing::dto::payment::{
    PaymentPlanRequest, PaymentPlanResponse, ValidateAllocationRequest, ValidateAllocationResponse,
};
use pricing::error::Result;
use pricing::services::allocation;

/// Check declared cash/card/transfer amounts against a required total.
pub fn validate_allocation(req: &ValidateAllocationRequest) -> Result<ValidateAllocationResponse> {
    allocation::validate_payment_allocation(&req.payments_by_method, req.required_total)?;

    Ok(ValidateAllocationResponse {
        valid: true,
        total_declared: req.payments_by_method.total(),
        required_total: req.required_total,
    })
}

/// Validate a combined checkout's declared amounts and split them into
/// per-registration accounting lines.
pub fn create_payment_plan(req: &PaymentPlanRequest) -> Result<PaymentPlanResponse> {
    allocation::build_payment_plan(req)
}
