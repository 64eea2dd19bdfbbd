// File: crates/series-core/src/derive.rs
// Summary: Pure derivation passes over aligned series: inflation adjustment,
//          companion-from-multiplier, ratio, and position override.
// Notes:
// - Every pass allocates a fresh output; inputs are never mutated.
// - Per-point failures degrade to the sentinel and never abort the pass.

use crate::round::{round2, round3};
use crate::series::{SeriesData, MISSING};

/// Re-express a nominal currency series in base-position prices:
/// `adjusted[i] = round2(value[i] * cpi[base_pos] / cpi[i])`.
///
/// Positions where the value, the deflator, or the computed multiplier is
/// not finite (e.g. `cpi[i] == 0`) come out as the sentinel.
pub fn inflation_adjust(values: &SeriesData, cpi: &SeriesData, base_pos: usize) -> SeriesData {
    let base = cpi.get(base_pos);
    let out = (0..values.len())
        .map(|i| {
            let v = values.get(i);
            let multiplier = base / cpi.get(i);
            if !v.is_finite() || !multiplier.is_finite() {
                MISSING
            } else {
                round2(v * multiplier)
            }
        })
        .collect();
    SeriesData::from_values(out)
}

/// Derive the companion series from a primary series and per-position
/// multipliers: `B[i] = round2(A[i] / k[i])`.
pub fn companion_from_multiplier(primary: &SeriesData, multiplier: &SeriesData) -> SeriesData {
    let out = (0..primary.len())
        .map(|i| {
            let q = primary.get(i) / multiplier.get(i);
            if q.is_finite() { round2(q) } else { MISSING }
        })
        .collect();
    SeriesData::from_values(out)
}

/// Normalized ratio `R[i] = round3(A[i] / B[i])`.
pub fn ratio_of(primary: &SeriesData, companion: &SeriesData) -> SeriesData {
    let out = (0..primary.len())
        .map(|i| {
            let r = primary.get(i) / companion.get(i);
            if r.is_finite() { round3(r) } else { MISSING }
        })
        .collect();
    SeriesData::from_values(out)
}

/// Replace the value at `pos` with an authoritative out-of-band figure.
/// Runs after the general derivation pass and takes precedence over the
/// computed value at that single position. Out-of-range positions are ignored.
pub fn override_at(series: &SeriesData, pos: usize, value: f64) -> SeriesData {
    let mut out = series.clone();
    if pos < out.len() {
        log::debug!("override at position {pos}: {} -> {value}", out.get(pos));
        out.values[pos] = value;
    }
    out
}
