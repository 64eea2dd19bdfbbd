// File: crates/series-core/tests/ratio.rs
// Purpose: Validate companion derivation, ratio, and override precedence.

use series_core::{companion_from_multiplier, override_at, ratio_of, round3, SeriesData};

#[test]
fn derives_companion_and_ratio() {
    let a = SeriesData::from_slice(&[212.06]);
    let k = SeriesData::from_slice(&[1.88]);
    let b = companion_from_multiplier(&a, &k);
    assert_eq!(b.values, vec![112.80]);
    let r = ratio_of(&a, &b);
    assert_eq!(r.values, vec![1.880]);
}

#[test]
fn ratio_consistent_with_rounded_companion() {
    let a = SeriesData::from_slice(&[594.08, 478.3, 545.66]);
    let k = SeriesData::from_slice(&[1.38, 1.35, 1.36]);
    let b = companion_from_multiplier(&a, &k);
    let r = ratio_of(&a, &b);
    for i in 0..a.len() {
        assert_eq!(r.get(i), round3(a.get(i) / b.get(i)));
    }
}

#[test]
fn zero_or_missing_multiplier_yields_sentinel() {
    let a = SeriesData::from_slice(&[100.0, 100.0, f64::NAN]);
    let k = SeriesData::from_slice(&[0.0, f64::NAN, 2.0]);
    let b = companion_from_multiplier(&a, &k);
    assert!(b.is_missing(0));
    assert!(b.is_missing(1));
    assert!(b.is_missing(2));
}

#[test]
fn missing_companion_blanks_the_ratio_pointwise() {
    let a = SeriesData::from_slice(&[100.0, 100.0]);
    let b = SeriesData::from_slice(&[50.0, f64::NAN]);
    let r = ratio_of(&a, &b);
    assert_eq!(r.get(0), 2.0);
    assert!(r.is_missing(1));
}

#[test]
fn override_takes_precedence_and_feeds_the_ratio() {
    let a = SeriesData::from_slice(&[100.0, 100.0]);
    let k = SeriesData::from_slice(&[2.0, 2.0]);
    let derived = companion_from_multiplier(&a, &k);
    assert_eq!(derived.values, vec![50.0, 50.0]);

    // The authoritative figure replaces the quotient at its position only.
    let wage = override_at(&derived, 1, 40.0);
    assert_eq!(wage.values, vec![50.0, 40.0]);

    // The ratio reflects the overridden companion, not the pre-override one.
    let r = ratio_of(&a, &wage);
    assert_eq!(r.values, vec![2.0, 2.5]);
}

#[test]
fn out_of_range_override_is_ignored() {
    let b = SeriesData::from_slice(&[50.0, 50.0]);
    assert_eq!(override_at(&b, 10, 1.0), b);
}
