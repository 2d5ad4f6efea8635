use calc::{InputEvent, PricingConfig, Simulator, ViewModel};

/// Query-string form of a slider snapshot. Omitted fields keep their
/// page-load defaults.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
pub struct SimulationQuery {
    pub capacity: Option<u32>,
    pub days: Option<u32>,
    pub opex: Option<u32>,
}

impl SimulationQuery {
    pub fn events(&self) -> impl Iterator<Item = InputEvent> {
        [
            self.capacity.map(InputEvent::Capacity),
            self.days.map(InputEvent::Days),
            self.opex.map(InputEvent::Opex),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pricing: PricingConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl AppState {
    pub fn new(pricing: PricingConfig) -> Self {
        Self { pricing }
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Replays the query as input events against a fresh simulator and
    /// renders the resulting state.
    pub fn simulate(&self, query: SimulationQuery) -> ViewModel {
        let mut simulator = Simulator::new(self.pricing);
        for event in query.events() {
            simulator.apply(event);
        }
        simulator.view()
    }

    pub fn reset(&self) -> ViewModel {
        let mut simulator = Simulator::new(self.pricing);
        simulator.apply(InputEvent::Reset);
        simulator.view()
    }
}
