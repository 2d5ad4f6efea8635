use axum::{routing::get, Router};
use calc::PricingConfig;

pub fn build_app(pricing: PricingConfig) -> Router {
    debug_assert!(api::module_ready());
    debug_assert!(ui::module_ready());

    api::app(pricing).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}
