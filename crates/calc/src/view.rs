use crate::{
    calculator::{calculate, Calculation},
    config::PricingConfig,
    format::{format_currency, format_opex_label},
    projection::{project, ChartSeries},
    state::SimulationState,
};

/// Everything the page shows for one state: the input echo, the three
/// result fields and the chart dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ViewModel {
    pub state: SimulationState,
    pub capacity_label: String,
    pub days_label: String,
    pub opex_label: String,
    pub opex_stressed: bool,
    pub net_per_barrel: String,
    pub monthly_net: String,
    pub investor_share: String,
    pub calculation: Calculation,
    pub chart: ChartSeries,
}

pub fn is_opex_stressed(opex: u32, config: &PricingConfig) -> bool {
    opex > config.stress_opex_threshold
}

pub fn render(state: &SimulationState, config: &PricingConfig) -> ViewModel {
    let calculation = calculate(state, config);

    ViewModel {
        state: *state,
        capacity_label: state.capacity.to_string(),
        days_label: state.days.to_string(),
        opex_label: format_opex_label(state.opex),
        opex_stressed: is_opex_stressed(state.opex, config),
        net_per_barrel: format_currency(f64::from(calculation.margin_per_barrel)),
        monthly_net: format_currency(calculation.monthly_total as f64),
        investor_share: format_currency(calculation.investor_share),
        chart: project(calculation.monthly_total, config),
        calculation,
    }
}

/// Presentation adapter fed with every freshly rendered view.
pub trait Presenter {
    fn present(&mut self, view: &ViewModel);
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    views: Vec<ViewModel>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> &[ViewModel] {
        &self.views
    }

    pub fn last(&self) -> Option<&ViewModel> {
        self.views.last()
    }

    pub fn into_last(self) -> Option<ViewModel> {
        self.views.into_iter().last()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, view: &ViewModel) {
        self.views.push(view.clone());
    }
}
