pub const DEFAULT_PRICE_PER_BARREL: u32 = 60;
pub const DEFAULT_INVESTOR_EQUITY_FRACTION: f64 = 0.05;
pub const DEFAULT_STRESS_OPEX_THRESHOLD: u32 = 45;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PricingConfig {
    pub price_per_barrel: u32,
    pub investor_equity_fraction: f64,
    pub stress_opex_threshold: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price_per_barrel: DEFAULT_PRICE_PER_BARREL,
            investor_equity_fraction: DEFAULT_INVESTOR_EQUITY_FRACTION,
            stress_opex_threshold: DEFAULT_STRESS_OPEX_THRESHOLD,
        }
    }
}
