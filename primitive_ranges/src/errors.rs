/// Misuse of the range API.  Bounds and ranges are reported through their
/// canonical text form.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("lower bound {lower} must be less than or equal to upper bound {upper}")]
    InvalidBounds { lower: String, upper: String },

    #[error(
        "when specifying an open range, the lower bound must be strictly less than the upper bound"
    )]
    OpenRangeIsEmpty,

    #[error("No boundary can be NaN")]
    NanBoundary,

    #[error("Cannot create intersection from two unconnected ranges ({0} and {1})")]
    Disconnected(String, String),

    #[error("Given array is empty")]
    NoElements,
}
