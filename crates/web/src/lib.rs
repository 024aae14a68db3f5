use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::pricing::handlers::calculate,
        features::pricing::handlers::calculate_combined,
        features::payments::handlers::validate_allocation,
        features::payments::handlers::create_payment_plan,
    ),
    components(
        schemas(
            pricing::dto::config::EventPricingConfig,
            pricing::dto::calculation::CalculateRequest,
            pricing::dto::calculation::CalculateResponse,
            pricing::dto::calculation::CalculationBreakdown,
            pricing::dto::combined::RegistrationEntry,
            pricing::dto::combined::ComponentToggles,
            pricing::dto::combined::CombinedCalculateRequest,
            pricing::dto::combined::CombinedCalculateResponse,
            pricing::dto::combined::RegistrationBreakdown,
            pricing::dto::payment::ValidateAllocationRequest,
            pricing::dto::payment::ValidateAllocationResponse,
            pricing::dto::payment::PaymentPlanRequest,
            pricing::dto::payment::PaymentPlanResponse,
            pricing::dto::payment::RegistrationStatus,
            pricing::models::PriceRow,
            pricing::models::DiscountTier,
            pricing::models::NominationCategory,
            pricing::models::MethodAmounts,
            pricing::models::AccountingLine,
            pricing::models::PaymentMethod,
            pricing::models::PaymentComponent,
            pricing::models::PaymentStatus,
        )
    ),
    tags(
        (name = "pricing", description = "Performance and combined checkout pricing"),
        (name = "payments", description = "Payment allocation validation and planning"),
    )
)]
struct ApiDoc;

/// Builds the full application router, Swagger UI included.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/pricing", features::pricing::routes::routes())
        .nest("/api/payments", features::payments::routes::routes())
        .layer(cors)
}
