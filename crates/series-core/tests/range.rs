// File: crates/series-core/tests/range.rs
// Purpose: Validate sentinel-skipping value range scans.

use series_core::{SeriesData, ValueRange};

#[test]
fn skips_sentinels_and_spans_all_sets() {
    let a = SeriesData::from_values(vec![3.0, f64::NAN, 9.0]);
    let b = SeriesData::from_values(vec![f64::NAN, 1.0, 4.0]);
    let r = ValueRange::from_values([&a, &b]).unwrap();
    assert_eq!(r.min, 1.0);
    assert_eq!(r.max, 9.0);
}

#[test]
fn all_missing_has_no_range() {
    let a = SeriesData::missing(4);
    assert_eq!(ValueRange::from_values([&a]), None);
}

#[test]
fn padding_and_floor() {
    let r = ValueRange::new(500.0, 1500.0).padded(2000.0).floored(0.0);
    assert_eq!(r.min, 0.0);
    assert_eq!(r.max, 3500.0);
}
