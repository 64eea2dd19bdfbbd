// File: crates/econ-charts/src/gdp_ranking.rs
// Summary: Turkey GDP per capita world ranking chart; ranking on a reversed
//          left axis, percent-of-world-average on the right axis.

use series_core::{
    Axis, AxisSide, ChartError, ChartModel, ChartView, Dataset, SeriesData, ValueRange, YearRange,
};

const YEARS: YearRange = YearRange::inclusive(2002, 2024);

// Turkey GDP per capita world ranking - Nominal (World Bank data via StatisticsTimes.com)
const NOMINAL_RANKING: [f64; 23] = [
    91.0, 83.0, 77.0, 77.0, 79.0, 78.0, 76.0, 81.0, 80.0, 81.0, 84.0, 81.0,
    84.0, 81.0, 81.0, 83.0, 93.0, 96.0, 90.0, 92.0, 92.0, 87.0, 83.0,
];

// Turkey GDP per capita world ranking - PPP
const PPP_RANKING: [f64; 23] = [
    81.0, 81.0, 79.0, 77.0, 75.0, 75.0, 76.0, 78.0, 76.0, 72.0, 71.0, 67.0,
    67.0, 62.0, 63.0, 63.0, 66.0, 67.0, 61.0, 62.0, 60.0, 59.0, 59.0,
];

// Turkey GDP per capita as % of world average - Nominal
const NOMINAL_PERCENT_WORLD: [f64; 23] = [
    64.9, 76.0, 87.8, 101.0, 102.0, 113.0, 116.0, 103.0, 112.0, 108.0, 111.0,
    118.0, 112.0, 109.0, 108.0, 100.0, 85.6, 82.6, 80.4, 80.6, 85.2, 101.0,
    117.0,
];

// Turkey GDP per capita as % of world average - PPP
const PPP_PERCENT_WORLD: [f64; 23] = [
    106.0, 105.0, 112.0, 116.0, 123.0, 127.0, 131.0, 126.0, 135.0, 144.0,
    146.0, 153.0, 160.0, 169.0, 170.0, 173.0, 166.0, 160.0, 163.0, 162.0,
    182.0, 186.0, 185.0,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankingMode {
    Nominal,
    Ppp,
}

impl RankingMode {
    pub fn heading_label(self) -> &'static str {
        match self {
            RankingMode::Nominal => "Nominal",
            RankingMode::Ppp => "SGP (PPP)",
        }
    }
}

pub struct GdpRankingChart {
    years: YearRange,
    nominal_ranking: SeriesData,
    ppp_ranking: SeriesData,
    nominal_percent: SeriesData,
    ppp_percent: SeriesData,
}

impl GdpRankingChart {
    pub fn new() -> Result<Self, ChartError> {
        let chart = Self {
            years: YEARS,
            nominal_ranking: SeriesData::from_slice(&NOMINAL_RANKING),
            ppp_ranking: SeriesData::from_slice(&PPP_RANKING),
            nominal_percent: SeriesData::from_slice(&NOMINAL_PERCENT_WORLD),
            ppp_percent: SeriesData::from_slice(&PPP_PERCENT_WORLD),
        };
        chart.years.check_aligned("nominal ranking", chart.nominal_ranking.len())?;
        chart.years.check_aligned("ppp ranking", chart.ppp_ranking.len())?;
        chart.years.check_aligned("nominal percent", chart.nominal_percent.len())?;
        chart.years.check_aligned("ppp percent", chart.ppp_percent.len())?;
        log::debug!("gdp-ranking: {} years, 4 tables", chart.years.len());
        Ok(chart)
    }
}

impl ChartModel for GdpRankingChart {
    type Mode = RankingMode;

    fn slug(&self) -> &'static str {
        "gdp-ranking"
    }

    fn years(&self) -> YearRange {
        self.years
    }

    fn view(&self, mode: RankingMode) -> ChartView {
        let (ranking, percent) = match mode {
            RankingMode::Nominal => (&self.nominal_ranking, &self.nominal_percent),
            RankingMode::Ppp => (&self.ppp_ranking, &self.ppp_percent),
        };

        // Rank 1 is best: plot the ranking on a reversed axis.
        let mut ranking_axis = Axis::left("Siralama (Dusuk = Daha Iyi)").reversed();
        if let Some(range) = ValueRange::from_values([ranking]) {
            ranking_axis = ranking_axis.with_suggested(range.padded(5.0));
        }
        let mut percent_axis = Axis::right("Dunya Ortalamasi %");
        if let Some(range) = ValueRange::from_values([percent]) {
            percent_axis = percent_axis.with_suggested(range.padded(20.0).floored(0.0));
        }

        let label = mode.heading_label();
        ChartView {
            heading: format!("Turkiye - Kisi Basi GSYiH ({label}, 2002-2024)"),
            unit: String::new(),
            base_year: None,
            years: self.years,
            axes: vec![ranking_axis, percent_axis],
            datasets: vec![
                Dataset::new(format!("Dunya Siralamasi ({label})"), AxisSide::Left, ranking.clone()),
                Dataset::new(format!("Dunya % ({label})"), AxisSide::Right, percent.clone()),
            ],
        }
    }
}
