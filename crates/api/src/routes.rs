use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json,
    Router,
};
use calc::{PricingConfig, ViewModel};

use crate::state::{AppState, SimulationQuery};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/styles.css", get(styles))
        .route("/static/app.js", get(script))
        .route("/api/config", get(pricing_config))
        .route("/api/simulation", get(simulate))
        .route("/api/simulation/reset", post(reset))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(ui::index_html())
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        ui::styles_css(),
    )
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        ui::app_js(),
    )
}

async fn pricing_config(State(state): State<AppState>) -> Json<PricingConfig> {
    Json(*state.pricing())
}

async fn simulate(
    State(state): State<AppState>,
    Query(query): Query<SimulationQuery>,
) -> Json<ViewModel> {
    let view = state.simulate(query);
    tracing::debug!(
        capacity = view.state.capacity,
        days = view.state.days,
        opex = view.state.opex,
        monthly_total = view.calculation.monthly_total,
        "rendered simulation"
    );

    Json(view)
}

async fn reset(State(state): State<AppState>) -> Json<ViewModel> {
    let view = state.reset();
    tracing::debug!("simulation reset to defaults");

    Json(view)
}
