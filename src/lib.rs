//! extseq - sequence-manipulation helpers for iterators
//!
//! # Overview
//!
//! Two independent, pure helpers over anything iterable:
//!
//! - [`element_at`]: indexed access with a configurable
//!   [`IndexingPolicy`] for out-of-range indices (error out, wrap
//!   cyclically, or clamp).
//! - [`repeat`]: repeats a sequence a given number of times while
//!   enumerating the underlying source **at most once**, replaying a
//!   memoized buffer for every pass after the first.
//!
//! Both are also available as methods on any iterator via [`SequenceExt`].
//!
//! # Quick Start
//!
//! ```
//! use extseq::{IndexingPolicy, SequenceExt};
//!
//! // Cyclic indexing: -1 wraps to the last element.
//! let last = [10, 20, 30].into_iter().element_at(-1, IndexingPolicy::Cyclic);
//! assert_eq!(last, Ok(30));
//!
//! // Repetition: three passes, but the source is enumerated only once.
//! let repeated: Vec<i32> = [1, 2].into_iter().repeat_seq(3).collect();
//! assert_eq!(repeated, [1, 2, 1, 2, 1, 2]);
//! ```
//!
//! # Single-pass sources
//!
//! Both helpers fully support sources that can only be enumerated once.
//! [`element_at`] materializes the source into a buffer scoped to the call;
//! [`repeat`] keeps its buffer alive for the lifetime of the returned
//! iterator and never touches the source after the first pass. Neither
//! helper ever enumerates the source twice.

pub mod element_at;
pub mod error;
pub mod repeat;

pub use element_at::{IndexingPolicy, element_at};
pub use error::Error;
pub use repeat::{Repeat, repeat};

/// Extension methods mirroring the free functions on any iterator.
pub trait SequenceExt: Iterator + Sized {
    /// Method form of [`element_at`]. See the free function for the policy
    /// semantics and error conditions.
    fn element_at(self, index: isize, policy: IndexingPolicy) -> Result<Self::Item, Error> {
        element_at(self, index, policy)
    }

    /// Method form of [`repeat`]. Named `repeat_seq` to stay clear of
    /// [`std::iter::repeat`] in the method namespace.
    fn repeat_seq(self, count: usize) -> Repeat<Self>
    where
        Self::Item: Clone,
    {
        repeat(self, count)
    }
}

impl<I: Iterator> SequenceExt for I {}
