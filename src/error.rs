use std::error::Error;
use std::fmt;

/// Crate-wide error type, shared by every container.
///
/// `Duplicate` and `Absent` aren't failures in the usual sense — they're
/// distinguishable non-zero outcomes an RB-tree insert/search can hit
/// without anything actually going wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerError {
    /// A precondition on an argument was violated (bad size, out-of-range
    /// position, an unsorted-only op called on a sorted container, etc).
    BadArg,
    /// The underlying allocator failed.
    AllocError,
    /// Pop/peek on an empty stack, or min/max/to_array on an empty tree.
    Empty,
    /// Insert of a key already present (RB-tree).
    Duplicate,
    /// Search/delete of a key not present.
    Absent,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ContainerError::BadArg => "invalid argument",
            ContainerError::AllocError => "allocation failed",
            ContainerError::Empty => "container is empty",
            ContainerError::Duplicate => "key already present",
            ContainerError::Absent => "key not present",
        };
        write!(f, "{}", msg)
    }
}

impl Error for ContainerError {}
