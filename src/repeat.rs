//! Sequence repetition with memoized replay of a single-pass source.

use std::fmt;
use std::iter::FusedIterator;

/// Repeats the elements of `source`, in order, `count` times total.
///
/// The source is enumerated **at most once**: the first pass yields each
/// element downstream as it is pulled from the source while buffering a
/// clone, and every later pass replays the buffer. This makes `repeat`
/// safe for single-pass sources (e.g. a consuming reader adapter), which
/// `collect`-then-`cycle` style approaches are not.
///
/// `count == 0` produces an empty iterator and the source is never touched,
/// not even to convert it into an iterator. An empty source produces an
/// empty iterator for every `count`.
///
/// The source must be finite: the whole first pass is buffered.
///
/// # Examples
///
/// ```
/// use extseq::repeat;
///
/// let repeated: Vec<i32> = repeat([1, 2], 3).collect();
/// assert_eq!(repeated, [1, 2, 1, 2, 1, 2]);
///
/// assert_eq!(repeat([1, 2], 0).count(), 0);
/// ```
pub fn repeat<I>(source: I, count: usize) -> Repeat<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let source = if count == 0 {
        None
    } else {
        Some(source.into_iter())
    };

    let buffer = match &source {
        // Pre-size only when the source reports an exact length.
        Some(iter) => match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Vec::with_capacity(lower),
            _ => Vec::new(),
        },
        None => Vec::new(),
    };

    Repeat {
        source,
        buffer,
        pos: 0,
        passes_left: count.saturating_sub(1),
    }
}

/// Iterator returned by [`repeat`].
///
/// Two phases: while `source` is `Some`, elements are pulled from it,
/// yielded, and buffered; once it is drained, the buffer is replayed
/// `passes_left` more times. Each value of this type owns its buffer
/// exclusively and is not rewindable mid-iteration; call [`repeat`] again
/// to restart (which re-enumerates the source).
pub struct Repeat<I: Iterator> {
    source: Option<I>,
    buffer: Vec<I::Item>,
    /// Cursor into `buffer` during replay.
    pos: usize,
    /// Replay passes not yet completed, including the one in progress.
    passes_left: usize,
}

impl<I> fmt::Debug for Repeat<I>
where
    I: Iterator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repeat")
            .field("source", &self.source)
            .field("buffered", &self.buffer.len())
            .field("pos", &self.pos)
            .field("passes_left", &self.passes_left)
            .finish()
    }
}

impl<I> Iterator for Repeat<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.as_mut() {
            match source.next() {
                Some(item) => {
                    self.buffer.push(item.clone());
                    return Some(item);
                }
                None => {
                    self.source = None;
                    if self.buffer.is_empty() {
                        // Empty source: repeating it changes nothing.
                        self.passes_left = 0;
                    }
                }
            }
        }

        loop {
            if self.passes_left == 0 {
                return None;
            }
            if self.pos < self.buffer.len() {
                let item = self.buffer[self.pos].clone();
                self.pos += 1;
                return Some(item);
            }
            self.pos = 0;
            self.passes_left -= 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => {
                let (lower, upper) = source.size_hint();
                // n more source elements means the final buffer holds
                // buffer.len() + n, replayed passes_left times, plus the n
                // still owed from the first pass.
                let project = |n: usize| {
                    self.buffer
                        .len()
                        .checked_add(n)?
                        .checked_mul(self.passes_left)?
                        .checked_add(n)
                };
                (project(lower).unwrap_or(usize::MAX), upper.and_then(project))
            }
            None => {
                let remaining = if self.passes_left == 0 {
                    Some(0)
                } else {
                    self.buffer
                        .len()
                        .checked_mul(self.passes_left - 1)
                        .and_then(|n| n.checked_add(self.buffer.len() - self.pos))
                };
                (remaining.unwrap_or(usize::MAX), remaining)
            }
        }
    }
}

impl<I> FusedIterator for Repeat<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
#[path = "repeat_test.rs"]
mod repeat_test;
