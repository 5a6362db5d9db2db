//! This crate provides ranges over primitive numeric types, and a set of
//! ranges that merges connected ranges as they are added.
//!
//! Each edge of a range is closed, open or unbounded:
//!
//!  |Range         |Constructor               |Description
//!  |--------------|--------------------------|--------------
//!  | `[A..B]`     |[`Range::closed`]         |left-closed, right-closed
//!  | `[A..B)`     |[`Range::closed_open`]    |left-closed, right-open
//!  | `(A..B)`     |[`Range::open`]           |left-open, right-open
//!  | `(A..B]`     |[`Range::open_closed`]    |left-open, right-closed
//!  | `(-Infinity..B]` |[`Range::at_most`]    |left-unbounded, right-closed
//!  | `(-Infinity..B)` |[`Range::less_than`]  |left-unbounded, right-open
//!  | `[A..Infinity)`  |[`Range::at_least`]   |left-closed, right-unbounded
//!  | `(A..Infinity)`  |[`Range::greater_than`]|left-open, right-unbounded
//!  | `(-Infinity..Infinity)` |[`Range::all`] |doubly unbounded
//!  | `[A..A]`     |[`Range::singleton`]      |a single value
//!
//! The four supported kinds are aliased as [`IntRange`], [`LongRange`],
//! [`FloatRange`] and [`DoubleRange`].  With the `rust_decimal` feature,
//! ranges of `rust_decimal::Decimal` are also available.
//!
//! Construction fails (see [`Error`]) when the lower edge is greater than
//! the upper edge, when an open range has the same value on both sides, or
//! when an edge is NaN.
//!
//! Floating ranges follow the IEEE view of values: `-inf` and `+inf` are
//! ordinary values except when used as the lower, respectively upper, edge,
//! where they mean the range has no limit on that side.  NaN is contained in
//! [`Range::all()`] and in no other range.
//!
//! Given two connected ranges:
//!
//! ```text
//!        [------ A ------)
//!               [----- B -------]
//!
//!        [----------------------]     Span
//!               [--------)            Intersection
//! ```
//!
//! and two ranges with a gap between them:
//! ```text
//!      [---A---]   [----B----]
//!
//!      [---------------------]    Span
//!                                 Intersection is an error
//! ```
//!
//! A [`RangeSet`] stores non-empty, pairwise disconnected ranges:
//!
//! ```
//!    use primitive_ranges::{IntRange, IntRangeSet};
//!    let mut set = IntRangeSet::new();
//!    set.add(IntRange::closed_open(1, 5).unwrap());
//!    set.add(IntRange::closed_open(2, 7).unwrap());
//!    set.add(IntRange::closed_open(10, 20).unwrap());
//!    assert_eq!(set.to_string(), "{[1..7), [10..20)}");
//!    assert!(set.contains(6));
//!    assert!(!set.contains(7));
//! ```

mod bound_type;
mod cuts;
mod errors;
mod numbers;
mod range_sets;
mod ranges;

pub use crate::bound_type::BoundType;
pub use crate::errors::Error;
pub use crate::numbers::Number;
pub use crate::range_sets::RangeSet;
pub use crate::ranges::Range;

/// How unbounded edges and infinite values are written.
pub(crate) const INFINITY: &str = "Infinity";

pub type IntRange = Range<i32>;
pub type LongRange = Range<i64>;
pub type FloatRange = Range<f32>;
pub type DoubleRange = Range<f64>;

pub type IntRangeSet = RangeSet<i32>;
pub type LongRangeSet = RangeSet<i64>;
pub type FloatRangeSet = RangeSet<f32>;
pub type DoubleRangeSet = RangeSet<f64>;
