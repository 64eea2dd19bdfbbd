// File: crates/econ-charts/src/hunger_min_wage.rs
// Summary: Turkey hunger line vs minimum wage chart; nominal vs CPI-deflated
//          USD, derived minimum-wage series and hunger/minimum ratio.

use series_core::{
    companion_from_multiplier, inflation_adjust, override_at, ratio_of, Axis, AxisSide,
    ChartError, ChartModel, ChartView, Dataset, SeriesData, ValueRange, YearRange,
};

const YEARS: YearRange = YearRange::inclusive(2002, 2026);

// Annual CPI-U (1982-84 = 100) from BLS; 2024-2026 use ~2% projections to
// keep comparisons stable.
const CPI_INDEX: [f64; 25] = [
    179.9, 184.0, 188.9, 195.3, 201.6, 207.3, 215.3, 214.5, 218.1, 224.9,
    229.6, 232.96, 236.74, 237.02, 240.01, 245.12, 251.11, 255.66, 258.81,
    270.97, 292.66, 305.36, 318.13, 324.49, 330.99,
];

const CPI_BASE_YEAR: i32 = 2024;

// Hunger line in USD (bilbilgilen.com)
const HUNGER_USD: [f64; 25] = [
    212.06, 242.09, 338.84, 386.16, 410.92, 444.4, 594.08, 478.3, 545.66,
    559.69, 508.45, 563.44, 505.12, 535.1, 490.99, 417.82, 428.17, 376.13,
    372.41, 359.84, 315.75, 470.95, 495.68, 627.79, 700.7,
];

// Hunger line as a multiple of the minimum wage; the 2026 entry comes from
// the announced TRY figures (30126 / 28075).
const HUNGER_OVER_MINWAGE: [f64; 25] = [
    1.88, 1.77, 1.49, 1.49, 1.46, 1.5, 1.38, 1.35, 1.36, 1.32, 1.3, 1.25,
    1.23, 1.26, 1.11, 1.05, 1.0, 0.99, 0.95, 0.94, 1.0, 1.04, 0.89, 1.0,
    30126.0 / 28075.0,
];

// Directly reported 2026 minimum wage in USD; overrides the derived quotient
// at the final position.
const MINWAGE_2026_USD: f64 = 653.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DollarMode {
    Nominal,
    Real,
}

pub struct HungerMinWageChart {
    years: YearRange,
    cpi: SeriesData,
    hunger: SeriesData,
    hunger_over_minwage: SeriesData,
}

impl HungerMinWageChart {
    pub fn new() -> Result<Self, ChartError> {
        let chart = Self {
            years: YEARS,
            cpi: SeriesData::from_slice(&CPI_INDEX),
            hunger: SeriesData::from_slice(&HUNGER_USD),
            hunger_over_minwage: SeriesData::from_slice(&HUNGER_OVER_MINWAGE),
        };
        chart.years.check_aligned("cpi index", chart.cpi.len())?;
        chart.years.check_aligned("hunger usd", chart.hunger.len())?;
        chart.years.check_aligned("hunger over minwage", chart.hunger_over_minwage.len())?;
        log::debug!("hunger-min-wage: {} years, 3 tables", chart.years.len());
        Ok(chart)
    }

    /// Companion minimum-wage series: derived from the multipliers, then the
    /// reported 2026 figure replaces the final quotient.
    fn min_wage(&self) -> SeriesData {
        let derived = companion_from_multiplier(&self.hunger, &self.hunger_over_minwage);
        override_at(&derived, self.years.len() - 1, MINWAGE_2026_USD)
    }
}

impl ChartModel for HungerMinWageChart {
    type Mode = DollarMode;

    fn slug(&self) -> &'static str {
        "hunger-min-wage"
    }

    fn years(&self) -> YearRange {
        self.years
    }

    fn view(&self, mode: DollarMode) -> ChartView {
        let min_wage = self.min_wage();
        // Ratio of the rounded, overridden companion; identical in both modes.
        let ratio = ratio_of(&self.hunger, &min_wage);
        let base_pos = self.years.base_position(CPI_BASE_YEAR);

        let (hunger, wage) = match mode {
            DollarMode::Nominal => (self.hunger.clone(), min_wage),
            DollarMode::Real => (
                inflation_adjust(&self.hunger, &self.cpi, base_pos),
                inflation_adjust(&min_wage, &self.cpi, base_pos),
            ),
        };

        let (suffix, axis_title, heading_mode, base_year) = match mode {
            DollarMode::Nominal => (
                "$".to_string(),
                "USD ($)".to_string(),
                "Nominal USD".to_string(),
                None,
            ),
            DollarMode::Real => (
                format!("{CPI_BASE_YEAR} $"),
                format!("USD ({CPI_BASE_YEAR} $)"),
                format!("Reel USD ({CPI_BASE_YEAR})"),
                Some(self.years.year_at(base_pos).unwrap_or(CPI_BASE_YEAR)),
            ),
        };

        ChartView {
            heading: format!("Türkiye — Açlık Sınırı vs Asgari Ücret ({heading_mode}) + Oran"),
            unit: suffix.clone(),
            base_year,
            years: self.years,
            axes: vec![
                Axis::left(axis_title),
                Axis::right("Oran (Açlık / Asgari)").with_suggested(ValueRange::new(0.8, 2.0)),
            ],
            datasets: vec![
                Dataset::new(format!("Açlık Sınırı ({suffix})"), AxisSide::Left, hunger),
                Dataset::new(format!("Asgari Ücret ({suffix})"), AxisSide::Left, wage),
                Dataset::new("Oran: Açlık / Asgari", AxisSide::Right, ratio),
            ],
        }
    }
}
