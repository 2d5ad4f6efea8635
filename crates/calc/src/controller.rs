use crate::{
    config::PricingConfig,
    state::SimulationState,
    view::{render, Presenter, ViewModel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Capacity(u32),
    Days(u32),
    Opex(u32),
    Reset,
}

/// Owns the one mutable state record. Each event is applied and
/// re-rendered to completion before the next one is accepted.
#[derive(Debug, Clone)]
pub struct Simulator {
    state: SimulationState,
    config: PricingConfig,
}

impl Simulator {
    pub fn new(config: PricingConfig) -> Self {
        Self::with_state(SimulationState::default(), config)
    }

    pub fn with_state(state: SimulationState, config: PricingConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Capacity(capacity) => self.state.capacity = capacity,
            InputEvent::Days(days) => self.state.days = days,
            InputEvent::Opex(opex) => self.state.opex = opex,
            InputEvent::Reset => self.state = SimulationState::default(),
        }
    }

    pub fn handle(&mut self, event: InputEvent, presenter: &mut impl Presenter) {
        self.apply(event);
        self.redraw(presenter);
    }

    pub fn reset(&mut self, presenter: &mut impl Presenter) {
        self.handle(InputEvent::Reset, presenter);
    }

    pub fn redraw(&self, presenter: &mut impl Presenter) {
        presenter.present(&self.view());
    }

    pub fn view(&self) -> ViewModel {
        render(&self.state, &self.config)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
