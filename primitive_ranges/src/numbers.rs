use std::cmp::Ordering;
use std::fmt;

/// The numeric kinds a [`crate::Range`] can be built over.
///
/// Integral kinds express "no limit" only through the unbounded edges of a
/// range, so every one of their values is a finite edge.  Floating kinds
/// also have genuine infinities: `-inf` as a lower edge or `+inf` as an
/// upper edge means that side of the range has no limit.  NaN is never a
/// valid edge.
pub trait Number: Copy + PartialOrd + fmt::Debug {
    /// True for values that cannot be ordered (floating NaN).
    fn is_nan(self) -> bool {
        false
    }

    /// Whether this value, used as a lower edge, leaves the range without a
    /// lower limit.
    ///
    /// Such an edge is unbounded whatever bound type was requested: it
    /// reports [`crate::BoundType::Open`] and no endpoint, so
    /// `DoubleRange::closed(-inf, 1.0)` prints as `(-Infinity..1.0]`.  An
    /// upper edge on the same value keeps the range bounded, as in
    /// `[-Infinity..-Infinity]`.
    fn is_lowest_limit(self) -> bool {
        false
    }

    /// Whether this value, used as an upper edge, leaves the range without
    /// an upper limit.
    ///
    /// As for [`Number::is_lowest_limit`], `DoubleRange::closed(1.0, inf)`
    /// prints as `[1.0..Infinity)`, reports an open upper bound, and equals
    /// `DoubleRange::at_least(1.0)`.
    fn is_highest_limit(self) -> bool {
        false
    }

    /// Total order on all values except NaN.
    fn compare(&self, other: &Self) -> Ordering;

    /// A hash key such that values comparing equal share the same key.
    fn hash_bits(self) -> u64;

    /// Writes the canonical text of the value.
    fn write_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! integral_number {
    ($t:ty) => {
        impl Number for $t {
            fn compare(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn hash_bits(self) -> u64 {
                i64::from(self) as u64
            }

            fn write_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self)
            }
        }
    };
}

integral_number!(i32);
integral_number!(i64);

/// Number of fractional digits kept by the canonical text of floats.
const FRACTION_DIGITS: usize = 6;

macro_rules! floating_number {
    ($t:ty) => {
        impl Number for $t {
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            fn is_lowest_limit(self) -> bool {
                self == <$t>::NEG_INFINITY
            }

            fn is_highest_limit(self) -> bool {
                self == <$t>::INFINITY
            }

            fn compare(&self, other: &Self) -> Ordering {
                //  NaN never reaches a cut, and -0.0 must equal 0.0
                self.partial_cmp(other).unwrap_or(Ordering::Equal)
            }

            fn hash_bits(self) -> u64 {
                if self == 0.0 {
                    0
                } else {
                    u64::from(self.to_bits())
                }
            }

            fn write_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_infinite() {
                    if self.is_sign_negative() {
                        write!(f, "-")?;
                    }
                    return write!(f, "{}", crate::INFINITY);
                }
                write!(f, "{}", trim_fraction(format!("{:.*}", FRACTION_DIGITS, self)))
            }
        }
    };
}

floating_number!(f32);
floating_number!(f64);

/// Drops trailing zeros from a fixed-point rendering, keeping at least one
/// fractional digit: `"2.500000"` becomes `"2.5"`, `"1.000000"` becomes
/// `"1.0"`.
fn trim_fraction(mut text: String) -> String {
    if let Some(dot) = text.find('.') {
        let keep = text.trim_end_matches('0').len().max(dot + 2);
        text.truncate(keep);
    }
    text
}

#[cfg(feature = "rust_decimal")]
impl Number for rust_decimal::Decimal {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn hash_bits(self) -> u64 {
        //  1.0 and 1.00 compare equal, so hash the normalized form
        self.normalize()
            .serialize()
            .chunks_exact(8)
            .fold(0, |acc, chunk| {
                acc ^ u64::from_le_bytes(chunk.try_into().unwrap_or([0; 8]))
            })
    }

    fn write_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
