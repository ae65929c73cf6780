use std::error::Error;
use std::fmt;

/// An error related to resolving an index expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl IndexError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }
}

/// Error code for an error related to resolving an index expression.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// a string/field index was used
    UnsupportedIndexKind,
    /// more consuming indices than the target has dimensions
    TooManyIndices,
    /// a scalar index falls outside its dimension after wraparound
    InvalidIndex,
    /// an array index appeared where only basic indexing is permitted
    ArrayIndicesNotAllowed,
    /// an unbound index kind reached the view resolver
    UnboundIndexKind,
    /// more than one ellipsis in a single index expression
    MultipleEllipses,
    /// target or mask rank exceeds the supported maximum
    RankTooLarge,
}

#[inline(always)]
pub(crate) fn from_kind(k: ErrorKind) -> IndexError
{
    IndexError { repr: k }
}

impl Error for IndexError {}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::UnsupportedIndexKind => "string index not allowed",
            ErrorKind::TooManyIndices => "too many indices",
            ErrorKind::InvalidIndex => "invalid index",
            ErrorKind::ArrayIndicesNotAllowed => "array indices are not allowed",
            ErrorKind::UnboundIndexKind => "index is not bound to an array",
            ErrorKind::MultipleEllipses => "an index can only have a single ellipsis",
            ErrorKind::RankTooLarge => "rank exceeds the supported maximum",
        };
        description.fmt(f)
    }
}
