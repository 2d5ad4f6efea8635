use crate::{config::PricingConfig, state::SimulationState};

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Calculation {
    pub margin_per_barrel: u32,
    pub monthly_total: u128,
    pub investor_share: f64,
}

/// Selling price minus opex, floored at zero. A loss-making opex never
/// surfaces as a negative margin.
pub fn margin_per_barrel(opex: u32, config: &PricingConfig) -> u32 {
    config.price_per_barrel.saturating_sub(opex)
}

/// Exact for every input: three `u32` factors always fit in a `u128`.
pub fn monthly_total(state: &SimulationState, margin_per_barrel: u32) -> u128 {
    u128::from(state.capacity) * u128::from(state.days) * u128::from(margin_per_barrel)
}

pub fn investor_share(monthly_total: u128, config: &PricingConfig) -> f64 {
    monthly_total as f64 * config.investor_equity_fraction
}

pub fn calculate(state: &SimulationState, config: &PricingConfig) -> Calculation {
    let margin_per_barrel = margin_per_barrel(state.opex, config);
    let monthly_total = monthly_total(state, margin_per_barrel);

    Calculation {
        margin_per_barrel,
        monthly_total,
        investor_share: investor_share(monthly_total, config),
    }
}
