use crate::bound_type::BoundType;
use crate::cuts::Cut;
use crate::errors::Error;
use crate::numbers::Number;
use itertools::{Itertools, MinMaxResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A range of values of a numeric kind.
///
/// Each edge is closed (the value is part of the range), open (it is not),
/// or unbounded.  Ranges are immutable; every combinator returns a new one.
///
/// For floating kinds, `-inf` as a lower edge and `+inf` as an upper edge
/// are unbounded edges, unless both edges sit on that same infinity: then
/// the range is bounded, so that `[inf..inf)` is empty and `[inf..inf]`
/// contains only `inf`.  NaN is never accepted as an edge, and is contained
/// in [`Range::all()`] only.
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "RangeRepr<T>",
        try_from = "RangeRepr<T>",
        bound(
            serialize = "T: Number + serde::Serialize",
            deserialize = "T: Number + serde::Deserialize<'de>"
        )
    )
)]
pub struct Range<T> {
    lower: Cut<T>,
    upper: Cut<T>,
}

impl<T: Number> Range<T> {
    /// Construct a range from its two edges.
    ///
    /// Fails when either edge is NaN, when `lower > upper`, or when both
    /// edges are open on the same value.
    pub fn range(
        lower: T,
        lower_type: BoundType,
        upper: T,
        upper_type: BoundType,
    ) -> Result<Self, Error> {
        if lower.is_nan() || upper.is_nan() {
            log::debug!("rejected range with NaN bound {lower:?}..{upper:?}");
            return Err(Error::NanBoundary);
        }
        match lower.compare(&upper) {
            Ordering::Greater => Err(Error::InvalidBounds {
                lower: Value(lower).to_string(),
                upper: Value(upper).to_string(),
            }),
            Ordering::Equal
                if lower_type == BoundType::Open
                    && upper_type == BoundType::Open =>
            {
                Err(Error::OpenRangeIsEmpty)
            }
            //  both edges on the same infinity stay bounded
            Ordering::Equal => Ok(Self::from_cuts(
                Cut::lower_at(lower, lower_type),
                Cut::upper_at(upper, upper_type),
            )),
            Ordering::Less => Ok(Self::from_cuts(
                Cut::lower(lower, lower_type),
                Cut::upper(upper, upper_type),
            )),
        }
    }

    /// Construct a left-open, right-open range (`(A..B)`)
    pub fn open(lower: T, upper: T) -> Result<Self, Error> {
        Self::range(lower, BoundType::Open, upper, BoundType::Open)
    }

    /// Construct a left-closed, right-closed range (`[A..B]`)
    pub fn closed(lower: T, upper: T) -> Result<Self, Error> {
        Self::range(lower, BoundType::Closed, upper, BoundType::Closed)
    }

    /// Construct a left-closed, right-open range (`[A..B)`)
    pub fn closed_open(lower: T, upper: T) -> Result<Self, Error> {
        Self::range(lower, BoundType::Closed, upper, BoundType::Open)
    }

    /// Construct a left-open, right-closed range (`(A..B]`)
    pub fn open_closed(lower: T, upper: T) -> Result<Self, Error> {
        Self::range(lower, BoundType::Open, upper, BoundType::Closed)
    }

    /// All values up to the endpoint, which is part of the range if
    /// `bound_type` is closed.
    ///
    /// Same as [`Range::range`] with an open `-inf` lower edge: `up_to(-inf,
    /// Open)` fails, and `up_to(-inf, Closed)` is the empty `(-inf..-inf]`.
    pub fn up_to(endpoint: T, bound_type: BoundType) -> Result<Self, Error> {
        if endpoint.is_nan() || endpoint.is_lowest_limit() {
            return Self::range(endpoint, BoundType::Open, endpoint, bound_type);
        }
        Ok(Self::from_cuts(Cut::BelowAll, Cut::upper(endpoint, bound_type)))
    }

    /// All values down to the endpoint, which is part of the range if
    /// `bound_type` is closed.
    ///
    /// Same as [`Range::range`] with an open `+inf` upper edge.
    pub fn down_to(endpoint: T, bound_type: BoundType) -> Result<Self, Error> {
        if endpoint.is_nan() || endpoint.is_highest_limit() {
            return Self::range(endpoint, bound_type, endpoint, BoundType::Open);
        }
        Ok(Self::from_cuts(Cut::lower(endpoint, bound_type), Cut::AboveAll))
    }

    /// Values strictly less than the endpoint (`(-Infinity..B)`)
    pub fn less_than(endpoint: T) -> Result<Self, Error> {
        Self::up_to(endpoint, BoundType::Open)
    }

    /// Values less than or equal to the endpoint (`(-Infinity..B]`)
    pub fn at_most(endpoint: T) -> Result<Self, Error> {
        Self::up_to(endpoint, BoundType::Closed)
    }

    /// Values strictly greater than the endpoint (`(A..Infinity)`)
    pub fn greater_than(endpoint: T) -> Result<Self, Error> {
        Self::down_to(endpoint, BoundType::Open)
    }

    /// Values greater than or equal to the endpoint (`[A..Infinity)`)
    pub fn at_least(endpoint: T) -> Result<Self, Error> {
        Self::down_to(endpoint, BoundType::Closed)
    }

    /// The range that contains only `value` (`[A..A]`)
    pub fn singleton(value: T) -> Result<Self, Error> {
        Self::closed(value, value)
    }

    /// The range that contains every value, NaN included.
    pub fn all() -> Self {
        Self::from_cuts(Cut::BelowAll, Cut::AboveAll)
    }

    /// The smallest closed range that contains all the given values.
    ///
    /// ```
    ///    use primitive_ranges::IntRange;
    ///    assert_eq!(
    ///        IntRange::enclose_all([3, -1, 7]).unwrap(),
    ///        IntRange::closed(-1, 7).unwrap(),
    ///    );
    /// ```
    pub fn enclose_all<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        match values.into_iter().minmax_by(nan_last) {
            MinMaxResult::NoElements => Err(Error::NoElements),
            MinMaxResult::OneElement(value) => Self::singleton(value),
            MinMaxResult::MinMax(min, max) => Self::closed(min, max),
        }
    }

    pub(crate) fn from_cuts(lower: Cut<T>, upper: Cut<T>) -> Self {
        debug_assert!(lower <= upper);
        Self { lower, upper }
    }

    pub(crate) fn lower_cut(&self) -> Cut<T> {
        self.lower
    }

    pub(crate) fn upper_cut(&self) -> Cut<T> {
        self.upper
    }

    /// False if the range extends to the lowest value.
    pub fn has_lower_bound(&self) -> bool {
        self.lower.is_bounded()
    }

    /// The lower endpoint, None if the range has no lower bound.
    pub fn lower_endpoint(&self) -> Option<T> {
        self.lower.value()
    }

    /// Whether the lower endpoint is part of the range.  Unbounded edges
    /// are open.
    pub fn lower_bound_type(&self) -> BoundType {
        self.lower.lower_bound_type()
    }

    /// False if the range extends to the highest value.
    pub fn has_upper_bound(&self) -> bool {
        self.upper.is_bounded()
    }

    /// The upper endpoint, None if the range has no upper bound.
    pub fn upper_endpoint(&self) -> Option<T> {
        self.upper.value()
    }

    /// Whether the upper endpoint is part of the range.  Unbounded edges
    /// are open.
    pub fn upper_bound_type(&self) -> BoundType {
        self.upper.upper_bound_type()
    }

    /// True if the range is of the form `[A..A)` or `(A..A]`.
    ///
    /// An open range such as `(3..4)` over integers contains no value but
    /// is not empty: emptiness only looks at the edges.
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// Whether value is contained in the range
    pub fn contains(&self, value: T) -> bool {
        self.lower.is_less_than(value) && self.upper.is_greater_than(value)
    }

    /// Whether every one of the values is contained in the range
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    /// Whether self contains all values of the other range (and possibly
    /// more).  Every range encloses itself.
    pub fn encloses(&self, other: &Self) -> bool {
        self == other
            || (self.lower <= other.lower && other.upper <= self.upper)
    }

    /// True if there is no gap between the two ranges.
    ///
    /// Touching ranges are connected even though no value belongs to both:
    /// ```
    ///    use primitive_ranges::IntRange;
    ///    let left = IntRange::closed_open(1, 4).unwrap();
    ///    let right = IntRange::closed_open(4, 6).unwrap();
    ///    assert!(left.is_connected(&right));
    ///    assert!(left.intersection(&right).unwrap().is_empty());
    /// ```
    pub fn is_connected(&self, other: &Self) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// The largest range enclosed by both ranges.  Fails when the ranges
    /// are not connected.
    pub fn intersection(&self, other: &Self) -> Result<Self, Error> {
        if !self.is_connected(other) {
            return Err(Error::Disconnected(self.to_string(), other.to_string()));
        }
        Ok(Self::from_cuts(
            self.lower.max(other.lower),
            self.upper.min(other.upper),
        ))
    }

    /// The smallest range that encloses both ranges.  The ranges do not
    /// need to be connected.
    pub fn span(&self, other: &Self) -> Self {
        Self::from_cuts(
            self.lower.min(other.lower),
            self.upper.max(other.upper),
        )
    }
}

/// Sorts NaN after every other value, so that [`Range::enclose_all`] picks
/// it as the upper bound and rejects it.
fn nan_last<T: Number>(left: &T, right: &T) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (false, false) => left.compare(right),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

impl<T: Number> PartialEq for Range<T> {
    /// True if both edges match, value and bound type.
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<T: Number> Eq for Range<T> {}

impl<T: Number> Hash for Range<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower.hash(state);
        self.upper.hash(state);
    }
}

impl<T: Number> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lower.fmt_as_lower(f)?;
        write!(f, "..")?;
        self.upper.fmt_as_upper(f)
    }
}

impl<T: Number> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?},{:?})", self.lower, self.upper)
    }
}

/// Displays a single value in its canonical text form.
pub(crate) struct Value<T>(pub(crate) T);

impl<T: Number> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_value(f)
    }
}

/// Serialized form of a range, a missing endpoint being unbounded.
#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct RangeRepr<T> {
    lower: Option<T>,
    lower_type: BoundType,
    upper: Option<T>,
    upper_type: BoundType,
}

#[cfg(feature = "serde")]
impl<T: Number> From<Range<T>> for RangeRepr<T> {
    fn from(range: Range<T>) -> Self {
        RangeRepr {
            lower: range.lower_endpoint(),
            lower_type: range.lower_bound_type(),
            upper: range.upper_endpoint(),
            upper_type: range.upper_bound_type(),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Number> TryFrom<RangeRepr<T>> for Range<T> {
    type Error = Error;

    fn try_from(repr: RangeRepr<T>) -> Result<Self, Error> {
        match (repr.lower, repr.upper) {
            (Some(lower), Some(upper)) => {
                Range::range(lower, repr.lower_type, upper, repr.upper_type)
            }
            (None, Some(upper)) => Range::up_to(upper, repr.upper_type),
            (Some(lower), None) => Range::down_to(lower, repr.lower_type),
            (None, None) => Ok(Range::all()),
        }
    }
}
