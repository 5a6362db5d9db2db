use crate::bound_type::BoundType;
use crate::numbers::Number;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One edge of a range.
///
/// A cut sits between two values of the domain rather than on one of them,
/// so that lower and upper edges share a single order:
///
/// ```text
///     BelowAll < BelowValue(3) < AboveValue(3) < BelowValue(4) < AboveAll
///                  [3 or 3)        (3 or 3]
/// ```
///
/// `BelowValue(v)` is the lower edge `[v` or the upper edge `v)`, and
/// `AboveValue(v)` is the lower edge `(v` or the upper edge `v]`.  A closed
/// lower edge thus sorts before an open one at the same value, and a closed
/// upper edge after an open one.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Cut<T> {
    BelowAll,
    BelowValue(T),
    AboveValue(T),
    AboveAll,
}

impl<T: Number> Cut<T> {
    /// The lower edge of a range starting at `value`.
    pub(crate) fn lower(value: T, kind: BoundType) -> Self {
        if value.is_lowest_limit() {
            return Cut::BelowAll;
        }
        Cut::lower_at(value, kind)
    }

    /// The upper edge of a range ending at `value`.
    pub(crate) fn upper(value: T, kind: BoundType) -> Self {
        if value.is_highest_limit() {
            return Cut::AboveAll;
        }
        Cut::upper_at(value, kind)
    }

    /// The lower edge next to `value`, bounded even on an infinity.
    pub(crate) fn lower_at(value: T, kind: BoundType) -> Self {
        match kind {
            BoundType::Closed => Cut::BelowValue(value),
            BoundType::Open => Cut::AboveValue(value),
        }
    }

    /// The upper edge next to `value`, bounded even on an infinity.
    pub(crate) fn upper_at(value: T, kind: BoundType) -> Self {
        match kind {
            BoundType::Closed => Cut::AboveValue(value),
            BoundType::Open => Cut::BelowValue(value),
        }
    }

    /// The value this cut sits next to, None for the unbounded cuts.
    pub(crate) fn value(&self) -> Option<T> {
        match self {
            Cut::BelowAll | Cut::AboveAll => None,
            Cut::BelowValue(v) | Cut::AboveValue(v) => Some(*v),
        }
    }

    pub(crate) fn is_bounded(&self) -> bool {
        self.value().is_some()
    }

    /// The kind of this cut when used as a lower edge.
    pub(crate) fn lower_bound_type(&self) -> BoundType {
        match self {
            Cut::BelowValue(_) => BoundType::Closed,
            Cut::BelowAll | Cut::AboveValue(_) | Cut::AboveAll => {
                BoundType::Open
            }
        }
    }

    /// The kind of this cut when used as an upper edge.
    pub(crate) fn upper_bound_type(&self) -> BoundType {
        match self {
            Cut::AboveValue(_) => BoundType::Closed,
            Cut::BelowAll | Cut::BelowValue(_) | Cut::AboveAll => {
                BoundType::Open
            }
        }
    }

    /// True if the value is to the right of the cut.
    /// The cut below everything admits NaN, no other cut does.
    pub(crate) fn is_less_than(&self, value: T) -> bool {
        match self {
            Cut::BelowAll => true,
            Cut::BelowValue(v) => *v <= value,
            Cut::AboveValue(v) => *v < value,
            Cut::AboveAll => false,
        }
    }

    /// True if the value is to the left of the cut.
    /// The cut above everything admits NaN, no other cut does.
    pub(crate) fn is_greater_than(&self, value: T) -> bool {
        match self {
            Cut::BelowAll => false,
            Cut::BelowValue(v) => value < *v,
            Cut::AboveValue(v) => value <= *v,
            Cut::AboveAll => true,
        }
    }

    /// Rank among the cuts sitting next to the same value.
    fn side(&self) -> u8 {
        match self {
            Cut::BelowAll => 0,
            Cut::BelowValue(_) => 1,
            Cut::AboveValue(_) => 2,
            Cut::AboveAll => 3,
        }
    }

    pub(crate) fn fmt_as_lower(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cut::BelowAll | Cut::AboveAll => {
                write!(f, "(-{}", crate::INFINITY)
            }
            Cut::BelowValue(v) => {
                write!(f, "[")?;
                v.write_value(f)
            }
            Cut::AboveValue(v) => {
                write!(f, "(")?;
                v.write_value(f)
            }
        }
    }

    pub(crate) fn fmt_as_upper(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cut::BelowAll | Cut::AboveAll => {
                write!(f, "{})", crate::INFINITY)
            }
            Cut::BelowValue(v) => {
                v.write_value(f)?;
                write!(f, ")")
            }
            Cut::AboveValue(v) => {
                v.write_value(f)?;
                write!(f, "]")
            }
        }
    }
}

impl<T: Number> Ord for Cut<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.value(), other.value()) {
            (Some(left), Some(right)) => left
                .compare(&right)
                .then_with(|| self.side().cmp(&other.side())),
            (None, Some(_)) | (Some(_), None) | (None, None) => {
                self.side().cmp(&other.side())
            }
        }
    }
}

impl<T: Number> PartialOrd for Cut<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Number> PartialEq for Cut<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Number> Eq for Cut<T> {}

impl<T: Number> Hash for Cut<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.side().hash(state);
        if let Some(v) = self.value() {
            v.hash_bits().hash(state);
        }
    }
}
