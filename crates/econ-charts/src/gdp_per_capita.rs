// File: crates/econ-charts/src/gdp_per_capita.rs
// Summary: Turkey GDP per capita chart; nominal vs PPP, current and constant prices.

use series_core::{
    Axis, AxisSide, ChartError, ChartModel, ChartView, Dataset, SeriesData, ValueRange, YearRange,
};

const YEARS: YearRange = YearRange::inclusive(2002, 2024);

// Turkey GDP per capita - Nominal Current ($) (World Bank data via StatisticsTimes.com)
const NOMINAL_CURRENT: [f64; 23] = [
    3591.0, 4650.0, 5980.0, 7332.0, 7990.0, 9767.0, 10913.0, 9077.0, 10699.0,
    11374.0, 11777.0, 12636.0, 12209.0, 11065.0, 10984.0, 10756.0, 9684.0,
    9395.0, 8798.0, 9982.0, 10898.0, 13375.0, 15893.0,
];

// Turkey GDP per capita - Nominal Constant ($), 2015 base year
const NOMINAL_CONSTANT: [f64; 23] = [
    6212.0, 6496.0, 7062.0, 7623.0, 8079.0, 8478.0, 8448.0, 7925.0, 8473.0,
    9266.0, 9588.0, 10269.0, 10598.0, 11065.0, 11280.0, 12006.0, 12255.0,
    12238.0, 12339.0, 13671.0, 14274.0, 14933.0, 15395.0,
];

// Turkey GDP per capita - PPP Current (Int.$)
const PPP_CURRENT: [f64; 23] = [
    9154.0, 9475.0, 10761.0, 11803.0, 13558.0, 14952.0, 16142.0, 15552.0,
    17468.0, 19717.0, 20739.0, 22475.0, 24193.0, 25897.0, 26731.0, 28354.0,
    28640.0, 29016.0, 29209.0, 32106.0, 39919.0, 43196.0, 45123.0,
];

// Turkey GDP per capita - PPP Constant (Int.$), 2021 base year
const PPP_CONSTANT: [f64; 23] = [
    14588.0, 15256.0, 16584.0, 17903.0, 18972.0, 19909.0, 19840.0, 18612.0,
    19897.0, 21760.0, 22518.0, 24117.0, 24889.0, 25985.0, 26490.0, 28195.0,
    28780.0, 28741.0, 28977.0, 32106.0, 33521.0, 35069.0, 36154.0,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GdpMode {
    Nominal,
    Ppp,
}

impl GdpMode {
    pub fn heading_label(self) -> &'static str {
        match self {
            GdpMode::Nominal => "Nominal",
            GdpMode::Ppp => "SGP (PPP)",
        }
    }

    pub fn currency_label(self) -> &'static str {
        match self {
            GdpMode::Nominal => "$",
            GdpMode::Ppp => "Int. $",
        }
    }

    /// Base year of the constant-price series in this mode.
    pub fn constant_base_year(self) -> i32 {
        match self {
            GdpMode::Nominal => 2015,
            GdpMode::Ppp => 2021,
        }
    }
}

pub struct GdpPerCapitaChart {
    years: YearRange,
    nominal_current: SeriesData,
    nominal_constant: SeriesData,
    ppp_current: SeriesData,
    ppp_constant: SeriesData,
}

impl GdpPerCapitaChart {
    pub fn new() -> Result<Self, ChartError> {
        let chart = Self {
            years: YEARS,
            nominal_current: SeriesData::from_slice(&NOMINAL_CURRENT),
            nominal_constant: SeriesData::from_slice(&NOMINAL_CONSTANT),
            ppp_current: SeriesData::from_slice(&PPP_CURRENT),
            ppp_constant: SeriesData::from_slice(&PPP_CONSTANT),
        };
        chart.years.check_aligned("nominal current", chart.nominal_current.len())?;
        chart.years.check_aligned("nominal constant", chart.nominal_constant.len())?;
        chart.years.check_aligned("ppp current", chart.ppp_current.len())?;
        chart.years.check_aligned("ppp constant", chart.ppp_constant.len())?;
        log::debug!("gdp-per-capita: {} years, 4 tables", chart.years.len());
        Ok(chart)
    }
}

impl ChartModel for GdpPerCapitaChart {
    type Mode = GdpMode;

    fn slug(&self) -> &'static str {
        "gdp-per-capita"
    }

    fn years(&self) -> YearRange {
        self.years
    }

    fn view(&self, mode: GdpMode) -> ChartView {
        let (current, constant) = match mode {
            GdpMode::Nominal => (&self.nominal_current, &self.nominal_constant),
            GdpMode::Ppp => (&self.ppp_current, &self.ppp_constant),
        };
        let currency = mode.currency_label();

        let mut axis = Axis::left(format!("Kisi Basi GSYiH ({currency})"));
        if let Some(range) = ValueRange::from_values([current, constant]) {
            axis = axis.with_suggested(range.padded(2000.0).floored(0.0));
        }

        ChartView {
            heading: format!(
                "Turkiye - Kisi Basi GSYiH ({}, 2002-2024)",
                mode.heading_label()
            ),
            unit: currency.to_string(),
            base_year: Some(mode.constant_base_year()),
            years: self.years,
            axes: vec![axis],
            datasets: vec![
                Dataset::new(format!("Current ({currency})"), AxisSide::Left, current.clone()),
                Dataset::new(format!("Constant ({currency})"), AxisSide::Left, constant.clone()),
            ],
        }
    }
}
