// File: crates/series-core/src/view.rs
// Summary: Per-mode chart output model and the ChartModel seam.

use crate::axis::{Axis, AxisSide};
use crate::series::SeriesData;
use crate::year::YearRange;

/// One named plotted sequence, assigned to a left or right axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub side: AxisSide,
    pub values: SeriesData,
}

impl Dataset {
    pub fn new(label: impl Into<String>, side: AxisSide, values: SeriesData) -> Self {
        Self { label: label.into(), side, values }
    }
}

/// Everything the rendering collaborator needs for one chart in one mode.
/// Rebuilt from the raw tables on every request; holds no state of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub heading: String,
    /// Currency/unit suffix for the active mode (e.g. "$", "Int. $", "2024 $").
    pub unit: String,
    /// Normalization anchor year when the mode uses one.
    pub base_year: Option<i32>,
    pub years: YearRange,
    pub axes: Vec<Axis>,
    pub datasets: Vec<Dataset>,
}

/// Seam between the generic deriver and a concrete chart model.
pub trait ChartModel {
    type Mode: Copy + PartialEq;

    /// Stable identifier used for artifact names.
    fn slug(&self) -> &'static str;

    fn years(&self) -> YearRange;

    /// Project the chart under `mode`. Pure: same mode, same view.
    fn view(&self, mode: Self::Mode) -> ChartView;
}
