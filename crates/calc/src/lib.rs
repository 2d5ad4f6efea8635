pub mod calculator;
pub mod config;
pub mod controller;
pub mod format;
pub mod projection;
pub mod state;
pub mod view;

pub use calculator::{calculate, Calculation};
pub use config::PricingConfig;
pub use controller::{InputEvent, Simulator};
pub use format::format_currency;
pub use projection::{project, ChartSeries};
pub use state::SimulationState;
pub use view::{render, Presenter, RecordingPresenter, ViewModel};
