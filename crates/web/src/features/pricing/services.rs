use pricing::dto::calculation::{CalculateRequest, CalculateResponse};
use pricing::dto::combined::{CombinedCalculateRequest, CombinedCalculateResponse};
use pricing::error::Result;
use pricing::services::calculation;

/// Price a single performance together with its diplomas and medals.
pub fn calculate(req: &CalculateRequest) -> Result<CalculateResponse> {
    calculation::calculate(req)
}

/// Price a set of registrations as one checkout, with the volume discount
/// resolved against the aggregate performance subtotal.
pub fn calculate_combined(req: &CombinedCalculateRequest) -> Result<CombinedCalculateResponse> {
    calculation::compute_combined_total(req)
}
