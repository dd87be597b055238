//! Candidate pools that fill template placeholders.
//!
//! A pool is either an ordered list of strings or a half-open numeric range.
//! Ranges are kept symbolic so large spans (e.g. mastery levels 2..100) never
//! need to be materialized unless the caller asks for the candidate list.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Half-open arithmetic range `[start, stop)` advancing by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumericRange {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl NumericRange {
    /// Build a range for use in constant tables.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero. In a `const` context this is a compile error.
    #[must_use]
    pub const fn new(start: i64, stop: i64, step: i64) -> Self {
        assert!(step != 0, "numeric range step must be non-zero");
        Self { start, stop, step }
    }

    /// Unit-step range `[start, stop)`.
    #[must_use]
    pub const fn span(start: i64, stop: i64) -> Self {
        Self::new(start, stop, 1)
    }

    /// Checked constructor for ranges coming from outside the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ZeroStep`] when `step` is zero.
    pub fn try_new(start: i64, stop: i64, step: i64) -> Result<Self, CatalogError> {
        if step == 0 {
            return Err(CatalogError::ZeroStep { start, stop });
        }
        Ok(Self { start, stop, step })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let (distance, stride) = match self.step.signum() {
            1 if self.start < self.stop => (
                i128::from(self.stop) - i128::from(self.start),
                i128::from(self.step),
            ),
            -1 if self.start > self.stop => (
                i128::from(self.start) - i128::from(self.stop),
                -i128::from(self.step),
            ),
            _ => return 0,
        };
        let count = (distance + stride - 1) / stride;
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at position `index`, if the range is that long.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<i64> {
        if index >= self.len() {
            return None;
        }
        let offset = i64::try_from(index).ok()?.checked_mul(self.step)?;
        self.start.checked_add(offset)
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        if self.step == 0 {
            return false;
        }
        let in_bounds = if self.step > 0 {
            self.start <= value && value < self.stop
        } else {
            self.stop < value && value <= self.start
        };
        in_bounds && (i128::from(value) - i128::from(self.start)) % i128::from(self.step) == 0
    }

    #[must_use]
    pub fn first(&self) -> Option<i64> {
        self.nth(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<i64> {
        self.len().checked_sub(1).and_then(|idx| self.nth(idx))
    }

    #[must_use]
    pub const fn iter(&self) -> RangeIter {
        RangeIter {
            range: *self,
            index: 0,
        }
    }
}

impl IntoIterator for NumericRange {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct RangeIter {
    range: NumericRange,
    index: usize,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.range.nth(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeIter {}

/// Candidate values for one placeholder kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "candidates", rename_all = "snake_case")]
pub enum Pool {
    Values(Vec<String>),
    Range(NumericRange),
}

impl Pool {
    #[must_use]
    pub fn from_slice(values: &[&str]) -> Self {
        Self::Values(values.iter().map(|value| (*value).to_string()).collect())
    }

    /// Integer lists (skill levels and the like) rendered as decimal strings.
    #[must_use]
    pub fn from_numbers(values: &[u32]) -> Self {
        Self::Values(values.iter().map(u32::to_string).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Range(range) => range.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate at `index`, rendered the way it would appear in a label.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<String> {
        match self {
            Self::Values(values) => values.get(index).cloned(),
            Self::Range(range) => range.nth(index).map(|value| value.to_string()),
        }
    }

    /// Every candidate rendered as a string, in pool order.
    #[must_use]
    pub fn candidates(&self) -> Vec<String> {
        match self {
            Self::Values(values) => values.clone(),
            Self::Range(range) => range.iter().map(|value| value.to_string()).collect(),
        }
    }

    #[must_use]
    pub fn as_values(&self) -> Option<&[String]> {
        match self {
            Self::Values(values) => Some(values),
            Self::Range(_) => None,
        }
    }

    #[must_use]
    pub const fn as_range(&self) -> Option<NumericRange> {
        match self {
            Self::Values(_) => None,
            Self::Range(range) => Some(*range),
        }
    }
}

impl From<Vec<String>> for Pool {
    fn from(values: Vec<String>) -> Self {
        Self::Values(values)
    }
}

impl From<NumericRange> for Pool {
    fn from(range: NumericRange) -> Self {
        Self::Range(range)
    }
}
