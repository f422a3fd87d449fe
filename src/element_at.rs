//! Indexed element access with configurable out-of-range handling.

use crate::error::Error;

/// Strategy for resolving an out-of-range index against a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexingPolicy {
    /// The index is used unmodified; anything outside `[0, len - 1]` is an
    /// [`Error::IndexOutOfRange`].
    #[default]
    Default,
    /// The index wraps modulo the sequence length. Negative indices count
    /// backwards from the end, so `-1` resolves to the last element.
    Cyclic,
    /// The index saturates into `[0, len - 1]`.
    Clamp,
}

/// Returns the element at `index` in `source`, resolving out-of-range
/// indices according to `policy`.
///
/// The source is enumerated exactly once, into an internal buffer; the
/// matching element is moved out of that buffer, so no `Clone` bound is
/// required.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `source` yields no elements, regardless
///   of policy.
/// - [`Error::IndexOutOfRange`] under [`IndexingPolicy::Default`] when
///   `index` is negative or `>= len`.
///
/// # Examples
///
/// ```
/// use extseq::{element_at, IndexingPolicy};
///
/// let s = [10, 20, 30];
/// assert_eq!(element_at(s, 1, IndexingPolicy::Default), Ok(20));
/// assert_eq!(element_at(s, -1, IndexingPolicy::Cyclic), Ok(30));
/// assert_eq!(element_at(s, 99, IndexingPolicy::Clamp), Ok(30));
/// ```
pub fn element_at<I>(source: I, index: isize, policy: IndexingPolicy) -> Result<I::Item, Error>
where
    I: IntoIterator,
{
    // One enumeration pass; every policy needs the length up front.
    let mut buffer: Vec<I::Item> = source.into_iter().collect();

    if buffer.is_empty() {
        return Err(Error::InvalidArgument {
            name: "source",
            reason: "must not be empty",
        });
    }

    let len = buffer.len();
    let resolved = match policy {
        IndexingPolicy::Cyclic => cyclic_index(index, len),
        IndexingPolicy::Clamp => clamp_index(index, len),
        IndexingPolicy::Default => {
            if index < 0 || index as usize >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
            index as usize
        }
    };

    // The buffer is discarded right after, so the swap is harmless.
    Ok(buffer.swap_remove(resolved))
}

/// Wraps `index` into `[0, len - 1]` by mathematical modulo.
fn cyclic_index(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

/// Saturates `index` into `[0, len - 1]`.
fn clamp_index(index: isize, len: usize) -> usize {
    index.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
#[path = "element_at_test.rs"]
mod element_at_test;
