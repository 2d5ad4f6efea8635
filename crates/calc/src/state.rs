pub const DEFAULT_CAPACITY: u32 = 1200;
pub const DEFAULT_DAYS: u32 = 24;
pub const DEFAULT_OPEX: u32 = 40;

/// Slider-driven inputs: barrels per day, operating days per month and
/// operating cost per barrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SimulationState {
    pub capacity: u32,
    pub days: u32,
    pub opex: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            days: DEFAULT_DAYS,
            opex: DEFAULT_OPEX,
        }
    }
}
