use crate::cuts::Cut;
use crate::numbers::Number;
use crate::ranges::Range;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;

/// A set of non-empty, pairwise disconnected ranges.
///
/// Ranges added to the set are merged with the ranges they overlap or
/// touch, so that `[1..5)` and `[5..7)` are stored as `[1..7)`.
///
/// ```text
///      [---A---)        [---B---]
///           [-----C-----)
///
///      [------------------------]     after add(A), add(B), add(C)
/// ```
#[derive(Clone)]
pub struct RangeSet<T> {
    //  indexed by lower edge
    ranges_by_lower: BTreeMap<Cut<T>, Range<T>>,
}

impl<T: Number> RangeSet<T> {
    /// An empty set.
    pub fn new() -> Self {
        Self {
            ranges_by_lower: BTreeMap::new(),
        }
    }

    /// Adds all values of the range to the set.  Empty ranges are ignored.
    pub fn add(&mut self, range: Range<T>) {
        if range.is_empty() {
            return;
        }

        let mut lower = range.lower_cut();
        let mut upper = range.upper_cut();

        // A range starting further left and reaching at least our lower
        // edge absorbs us from below.
        if let Some((_, below)) = self.ranges_by_lower.range(..lower).next_back() {
            if below.upper_cut() >= lower {
                if below.upper_cut() >= upper {
                    upper = below.upper_cut();
                }
                lower = below.lower_cut();
            }
        }

        // The last range starting before our upper edge may reach further.
        if let Some((_, below)) = self.ranges_by_lower.range(..=upper).next_back() {
            if below.upper_cut() >= upper {
                upper = below.upper_cut();
            }
        }

        // Drop every range starting in [lower, upper)
        let mut tail = self.ranges_by_lower.split_off(&lower);
        let mut kept = tail.split_off(&upper);
        log::trace!(
            "add {range}: merged into {}, absorbing {} range(s)",
            Range::from_cuts(lower, upper),
            tail.len(),
        );
        self.ranges_by_lower.append(&mut kept);

        self.ranges_by_lower
            .insert(lower, Range::from_cuts(lower, upper));
    }

    /// The stored range containing the value, if any.
    pub fn range_containing(&self, value: T) -> Option<&Range<T>> {
        if value.is_nan() {
            // Only a range without lower bound can contain NaN, and it is
            // necessarily the first one.
            return self
                .ranges_by_lower
                .values()
                .next()
                .filter(|r| r.contains(value));
        }
        self.ranges_by_lower
            .range(..=Cut::BelowValue(value))
            .next_back()
            .map(|(_, r)| r)
            .filter(|r| r.contains(value))
    }

    /// Whether some range of the set contains the value.
    pub fn contains(&self, value: T) -> bool {
        self.range_containing(value).is_some()
    }

    /// Whether some range of the set encloses the given range.
    pub fn encloses(&self, range: &Range<T>) -> bool {
        self.ranges_by_lower
            .range(..=range.lower_cut())
            .next_back()
            .is_some_and(|(_, r)| r.encloses(range))
    }

    /// The stored ranges, in ascending order.
    pub fn as_ranges(&self) -> impl DoubleEndedIterator<Item = &Range<T>> + ExactSizeIterator {
        self.ranges_by_lower.values()
    }

    /// The smallest range enclosing every range of the set, None if the
    /// set is empty.
    pub fn span(&self) -> Option<Range<T>> {
        let first = self.ranges_by_lower.values().next()?;
        let last = self.ranges_by_lower.values().next_back()?;
        Some(first.span(last))
    }

    /// True if the set holds no range, hence contains no value.
    pub fn is_empty(&self) -> bool {
        self.ranges_by_lower.is_empty()
    }

    /// Number of disconnected ranges in the set.
    pub fn len(&self) -> usize {
        self.ranges_by_lower.len()
    }
}

impl<T: Number> PartialEq for RangeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ranges_by_lower == other.ranges_by_lower
    }
}

impl<T: Number> Eq for RangeSet<T> {}

impl<T: Number> Default for RangeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> Extend<Range<T>> for RangeSet<T> {
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}

impl<T: Number> FromIterator<Range<T>> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Number> fmt::Display for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.as_ranges().join(", "))
    }
}

impl<T: Number> fmt::Debug for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.as_ranges()).finish()
    }
}
