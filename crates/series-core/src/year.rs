// File: crates/series-core/src/year.rs
// Summary: Contiguous year index shared by every series of a chart.

use crate::error::ChartError;

/// Ordered range of consecutive calendar years.
/// Contract: position i always means year `first + i`, across every series
/// of the chart that carries this range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    pub first: i32,
    pub len: usize,
}

impl YearRange {
    pub const fn new(first: i32, len: usize) -> Self {
        Self { first, len }
    }

    /// Inclusive constructor, e.g. `YearRange::inclusive(2002, 2024)`.
    pub const fn inclusive(first: i32, last: i32) -> Self {
        Self { first, len: (last - first + 1) as usize }
    }

    pub const fn len(&self) -> usize { self.len }
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    pub fn year_at(&self, pos: usize) -> Option<i32> {
        if pos < self.len { Some(self.first + pos as i32) } else { None }
    }

    pub fn position_of(&self, year: i32) -> Option<usize> {
        if year < self.first { return None; }
        let pos = (year - self.first) as usize;
        if pos < self.len { Some(pos) } else { None }
    }

    /// Normalization anchor for a base year: its position, or the last
    /// position when the year falls outside the range.
    pub fn base_position(&self, base_year: i32) -> usize {
        self.position_of(base_year)
            .unwrap_or_else(|| self.len.saturating_sub(1))
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        let first = self.first;
        (0..self.len).map(move |i| first + i as i32)
    }

    /// Verify a dataset covers exactly this range.
    pub fn check_aligned(&self, label: &str, len: usize) -> Result<(), ChartError> {
        if len != self.len {
            return Err(ChartError::LengthMismatch {
                label: label.to_string(),
                expected: self.len,
                actual: len,
            });
        }
        Ok(())
    }
}
