// File: crates/series-core/tests/year.rs
// Purpose: Validate year range positions, base-year fallback, alignment check.

use series_core::{ChartError, YearRange};

#[test]
fn positions_and_years_align() {
    let y = YearRange::inclusive(2002, 2026);
    assert_eq!(y.len(), 25);
    assert_eq!(y.year_at(0), Some(2002));
    assert_eq!(y.year_at(24), Some(2026));
    assert_eq!(y.year_at(25), None);
    assert_eq!(y.position_of(2024), Some(22));
    assert_eq!(y.position_of(1999), None);
    assert_eq!(y.position_of(2027), None);
    assert_eq!(y.years().collect::<Vec<_>>().len(), 25);
}

#[test]
fn absent_base_year_falls_back_to_last_position() {
    let y = YearRange::inclusive(2002, 2024);
    assert_eq!(y.base_position(2015), 13);
    assert_eq!(y.base_position(2030), 22);
    assert_eq!(y.base_position(1990), 22);
}

#[test]
fn misaligned_dataset_is_rejected() {
    let y = YearRange::inclusive(2002, 2024);
    assert!(y.check_aligned("cpi", 23).is_ok());
    let err = y.check_aligned("cpi", 10).unwrap_err();
    assert!(matches!(
        err,
        ChartError::LengthMismatch { expected: 23, actual: 10, .. }
    ));
}
