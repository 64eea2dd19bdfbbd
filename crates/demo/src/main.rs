// File: crates/demo/src/main.rs
// Summary: Demo derives all charts in every mode and writes per-mode CSV
//          tables for the rendering layer.

use anyhow::{Context, Result};
use econ_charts::{
    DollarMode, GdpMode, GdpPerCapitaChart, GdpRankingChart, HungerMinWageChart, RankingMode,
};
use series_core::{ChartModel, ChartView};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).context("creating target/out")?;

    let gdp = GdpPerCapitaChart::new()?;
    for (mode, name) in [(GdpMode::Nominal, "nominal"), (GdpMode::Ppp, "ppp")] {
        let view = gdp.view(mode);
        let out = export_view(&out_dir, gdp.slug(), name, &view)?;
        println!("Wrote {}", out.display());
    }

    let ranking = GdpRankingChart::new()?;
    for (mode, name) in [(RankingMode::Nominal, "nominal"), (RankingMode::Ppp, "ppp")] {
        let view = ranking.view(mode);
        let out = export_view(&out_dir, ranking.slug(), name, &view)?;
        println!("Wrote {}", out.display());
    }

    let hunger = HungerMinWageChart::new()?;
    for (mode, name) in [(DollarMode::Nominal, "nominal"), (DollarMode::Real, "real")] {
        let view = hunger.view(mode);
        let out = export_view(&out_dir, hunger.slug(), name, &view)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Write one chart view as target/out/<slug>_<mode>.csv: a year column plus
/// one column per dataset. Sentinel positions become empty cells, never "0"
/// or "NaN".
fn export_view(dir: &Path, slug: &str, mode: &str, view: &ChartView) -> Result<PathBuf> {
    let path = dir.join(format!("{slug}_{mode}.csv"));
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut header = vec!["year".to_string()];
    header.extend(view.datasets.iter().map(|d| d.label.clone()));
    wtr.write_record(&header)?;

    for (i, year) in view.years.years().enumerate() {
        let mut row = vec![year.to_string()];
        for ds in &view.datasets {
            let v = ds.values.get(i);
            row.push(if v.is_finite() { format!("{v}") } else { String::new() });
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;

    log::info!(
        "{slug} [{mode}]: {} datasets over {} years",
        view.datasets.len(),
        view.years.len()
    );
    Ok(path)
}
