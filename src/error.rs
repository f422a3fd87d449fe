//! Public error types for the extseq operations.

use thiserror::Error;

/// Error type for all fallible extseq operations.
///
/// Both variants are produced synchronously by the failing call; there are
/// no transient failure modes and no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument violated a precondition (e.g., an empty source sequence).
    ///
    /// Carries the parameter name so the misuse is diagnosable at the call
    /// site.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// An index fell outside the bounds of the materialized sequence under
    /// [`IndexingPolicy::Default`](crate::IndexingPolicy::Default).
    #[error("index {index} is out of range for a sequence of {len} elements")]
    IndexOutOfRange { index: isize, len: usize },
}
