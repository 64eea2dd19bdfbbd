// File: crates/series-core/src/axis.rs
// Summary: Axis metadata handed to the rendering collaborator.

use crate::range::ValueRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub side: AxisSide,
    /// Lower values plotted higher (world rankings: rank 1 is best).
    pub reversed: bool,
    pub suggested: Option<ValueRange>,
}

impl Axis {
    pub fn left(title: impl Into<String>) -> Self {
        Self { title: title.into(), side: AxisSide::Left, reversed: false, suggested: None }
    }

    pub fn right(title: impl Into<String>) -> Self {
        Self { title: title.into(), side: AxisSide::Right, reversed: false, suggested: None }
    }

    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    pub fn with_suggested(mut self, range: ValueRange) -> Self {
        self.suggested = Some(range);
        self
    }
}
