pub mod routes;
pub mod state;

use axum::Router;
use calc::PricingConfig;

pub fn module_ready() -> bool {
    true
}

pub fn app(pricing: PricingConfig) -> Router {
    routes::router(state::AppState::new(pricing))
}
