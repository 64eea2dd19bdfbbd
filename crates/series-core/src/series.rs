// File: crates/series-core/src/series.rs
// Summary: Series data model with a NaN missing-value sentinel.
// Notes:
// - MISSING marks "no data" and is distinct from the numeric value zero;
//   downstream renderers must draw a gap there, never a zero.

/// Missing-value sentinel. Any non-finite arithmetic result degrades to it.
pub const MISSING: f64 = f64::NAN;

#[derive(Clone, Debug, Default)]
pub struct SeriesData {
    pub values: Vec<f64>,
}

impl SeriesData {
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self { values: values.to_vec() }
    }

    /// Series of `len` sentinel placeholders.
    pub fn missing(len: usize) -> Self {
        Self { values: vec![MISSING; len] }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Value at `pos`, or the sentinel when out of range.
    pub fn get(&self, pos: usize) -> f64 {
        self.values.get(pos).copied().unwrap_or(MISSING)
    }

    pub fn is_missing(&self, pos: usize) -> bool {
        !self.get(pos).is_finite()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

impl From<Vec<f64>> for SeriesData {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

// Bit-pattern equality: sentinel positions compare equal.
impl PartialEq for SeriesData {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}
