use crate::{calculator::investor_share, config::PricingConfig, format::format_currency};

pub const PERIOD_COUNT: usize = 6;
pub const SETUP_PERIODS: usize = 3;

pub const PERIOD_LABELS: [&str; PERIOD_COUNT] = [
    "Mes 1-2 (Inv)",
    "Mes 3 (Log)",
    "Mes 4 (Inst)",
    "Mes 5 (Inicio)",
    "Mes 6",
    "Mes 7",
];

pub const DATASET_LABEL: &str = "Flujo de Caja Inversionista (Acumulado)";

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartSeries {
    pub labels: [&'static str; PERIOD_COUNT],
    pub dataset_label: &'static str,
    pub values: [f64; PERIOD_COUNT],
    pub tooltips: [String; PERIOD_COUNT],
}

/// Six-period investor cash flow. The setup periods never earn; every
/// revenue period repeats the current monthly share with no growth, even
/// though the dataset is labelled as accumulated.
pub fn project(monthly_total: u128, config: &PricingConfig) -> ChartSeries {
    let mut values = [0.0; PERIOD_COUNT];
    for value in values.iter_mut().skip(SETUP_PERIODS) {
        *value = investor_share(monthly_total, config);
    }

    ChartSeries {
        labels: PERIOD_LABELS,
        dataset_label: DATASET_LABEL,
        values,
        tooltips: values.map(format_currency),
    }
}
