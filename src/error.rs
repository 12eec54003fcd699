use std::fmt;

/// Errors surfaced at the [`decompose`](crate::decompose::decompose) boundary.
///
/// Mirrors the taxonomy `geo` itself uses for its own `geometry::Error`: a
/// plain enum with a `Display` impl, no `thiserror`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input failed validation before any heavy computation ran.
    InvalidInput { reason: String },
    /// An invariant of the pseudo-vertex / intersection graph was violated
    /// after construction. This indicates a bug in the intersection finder
    /// adapter or in the graph wiring, never a property of the input.
    GraphInconsistency { reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Error::GraphInconsistency { reason } => write!(f, "graph inconsistency: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
