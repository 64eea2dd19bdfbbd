// File: crates/series-core/tests/derive.rs
// Purpose: Validate inflation adjustment semantics.

use series_core::{inflation_adjust, round2, SeriesData};

#[test]
fn output_matches_input_length() {
    let value = SeriesData::from_slice(&[100.0, 200.0, 300.0]);
    let cpi = SeriesData::from_slice(&[100.0, 110.0, 120.0]);
    let adjusted = inflation_adjust(&value, &cpi, 2);
    assert_eq!(adjusted.len(), value.len());
    assert_eq!(adjusted.len(), cpi.len());
}

#[test]
fn halves_value_when_cpi_doubles() {
    let value = SeriesData::from_slice(&[100.0, 100.0]);
    let cpi = SeriesData::from_slice(&[100.0, 200.0]);
    let adjusted = inflation_adjust(&value, &cpi, 0);
    assert_eq!(adjusted.values, vec![100.0, 50.0]);
}

#[test]
fn anchor_position_is_unchanged_up_to_cents() {
    let value = SeriesData::from_slice(&[212.06, 444.4, 700.7]);
    let cpi = SeriesData::from_slice(&[179.9, 207.3, 318.13]);
    let adjusted = inflation_adjust(&value, &cpi, 2);
    // Multiplier is exactly 1 at the base position.
    assert_eq!(adjusted.get(2), round2(700.7));
}

#[test]
fn zero_or_missing_cpi_yields_sentinel_only_there() {
    let value = SeriesData::from_slice(&[100.0, 100.0, 100.0]);
    let cpi = SeriesData::from_slice(&[100.0, 0.0, f64::NAN]);
    let adjusted = inflation_adjust(&value, &cpi, 0);
    assert_eq!(adjusted.get(0), 100.0);
    assert!(adjusted.is_missing(1));
    assert!(adjusted.is_missing(2));
}

#[test]
fn missing_value_stays_missing() {
    let value = SeriesData::from_slice(&[100.0, f64::NAN, 300.0]);
    let cpi = SeriesData::from_slice(&[100.0, 100.0, 100.0]);
    let adjusted = inflation_adjust(&value, &cpi, 0);
    assert!(!adjusted.is_missing(0));
    assert!(adjusted.is_missing(1));
    assert!(!adjusted.is_missing(2));
}

#[test]
fn out_of_range_base_blanks_the_series() {
    let value = SeriesData::from_slice(&[100.0, 100.0]);
    let cpi = SeriesData::from_slice(&[100.0, 200.0]);
    let adjusted = inflation_adjust(&value, &cpi, 5);
    assert!(adjusted.is_missing(0));
    assert!(adjusted.is_missing(1));
}

#[test]
fn idempotent_bit_identical() {
    let value = SeriesData::from_slice(&[212.06, f64::NAN, 700.7]);
    let cpi = SeriesData::from_slice(&[179.9, 207.3, 318.13]);
    let a = inflation_adjust(&value, &cpi, 2);
    let b = inflation_adjust(&value, &cpi, 2);
    // SeriesData equality is bit-pattern based, so sentinel positions match too.
    assert_eq!(a, b);
}
