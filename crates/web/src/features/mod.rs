pub mod payments;
pub mod pricing;
