mod config;
mod logging;
mod wiring;

use std::error::Error;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = config::Config::from_env()?;
    let pricing = config.pricing();
    tracing::info!(
        price_per_barrel = pricing.price_per_barrel,
        investor_equity_fraction = pricing.investor_equity_fraction,
        stress_opex_threshold = pricing.stress_opex_threshold,
        "pricing configured"
    );

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "refinery simulator listening");

    axum::serve(listener, wiring::build_app(pricing)).await?;
    Ok(())
}
