//! Position arithmetic over the ordered period sequence.
//!
//! The period list is the single source of truth for what "n periods back"
//! means: lag offsets are index subtractions on this sequence, never date
//! arithmetic on the labels. Whether the labels actually form a contiguous
//! monthly run is an input contract, checked by [`crate::validate`].

use rustc_hash::FxHashMap;

use crate::model::Period;

/// Ordered period labels with O(1) label → position lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodIndex {
    periods: Vec<Period>,
    positions: FxHashMap<Period, usize>,
}

impl PeriodIndex {
    /// Build an index from chronologically ordered labels. A duplicate label
    /// keeps its first position.
    #[must_use]
    pub fn new(periods: Vec<Period>) -> Self {
        let mut positions = FxHashMap::default();
        for (i, p) in periods.iter().enumerate() {
            positions.entry(p.clone()).or_insert(i);
        }
        Self { periods, positions }
    }

    /// Zero-based position of a period, or `None` if unknown.
    #[must_use]
    pub fn index_of(&self, period: &Period) -> Option<usize> {
        self.positions.get(period).copied()
    }

    /// Period at a position, or `None` past the end.
    #[must_use]
    pub fn period_at(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    /// Period `lag` positions before `index`; `None` when the offset falls
    /// before the first period.
    #[must_use]
    pub fn offset(&self, index: usize, lag: usize) -> Option<&Period> {
        let i = index.checked_sub(lag)?;
        self.period_at(i)
    }

    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl FromIterator<Period> for PeriodIndex {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for PeriodIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Period::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> PeriodIndex {
        ["2024-01", "2024-02", "2024-03"].into_iter().collect()
    }

    #[test]
    fn index_of_known_and_unknown() {
        let idx = index();
        assert_eq!(idx.index_of(&Period::from("2024-02")), Some(1));
        assert_eq!(idx.index_of(&Period::from("2030-01")), None);
    }

    #[test]
    fn period_at_bounds() {
        let idx = index();
        assert_eq!(idx.period_at(0), Some(&Period::from("2024-01")));
        assert_eq!(idx.period_at(3), None);
    }

    #[test]
    fn offset_stops_at_sequence_start() {
        let idx = index();
        assert_eq!(idx.offset(2, 1), Some(&Period::from("2024-02")));
        assert_eq!(idx.offset(2, 2), Some(&Period::from("2024-01")));
        assert_eq!(idx.offset(1, 2), None);
    }
}
