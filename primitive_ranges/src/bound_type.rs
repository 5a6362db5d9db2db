/// The kind of one edge of a range.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundType {
    /// The edge value is part of the range.
    Closed,

    /// The edge value is not part of the range.
    Open,
}

