// File: crates/econ-charts/src/lib.rs
// Summary: Chart models for the economic statistics pages.

pub mod gdp_per_capita;
pub mod gdp_ranking;
pub mod hunger_min_wage;

pub use gdp_per_capita::{GdpMode, GdpPerCapitaChart};
pub use gdp_ranking::{GdpRankingChart, RankingMode};
pub use hunger_min_wage::{DollarMode, HungerMinWageChart};
