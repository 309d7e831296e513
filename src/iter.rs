//! Iterator adapter for sequences.
//!
//! [`SeqIter`] lets a [`Sequence`] drive `for` loops and std iterator chains.
//! Items come out as `Ok`, a failure comes out once as `Err` and ends the
//! iteration.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let mut iter = from_vec::<_, &str>(vec![1, 2, 3]).map(|x| x * 10).into_results();
//! let values: Result<Vec<_>, _> = iter.by_ref().collect();
//! assert_eq!(values, Ok(vec![10, 20, 30]));
//! assert!(iter.is_exhausted());
//! ```

use crate::{Sequence, pull::Pull};

/// Iterator adapter for [`Sequence`].
///
/// Both `SeqIter` and `&mut SeqIter` implement `Iterator`, so the wrapper can be
/// inspected after a loop to learn how the sequence ended.
pub struct SeqIter<S> {
    state: SeqIterState<S>,
}

enum SeqIterState<S> {
    Active(S),
    Exhausted,
    Failed,
}

impl<S> SeqIter<S>
where
    S: Sequence,
{
    /// Create an iterator from a sequence.
    pub fn new(seq: S) -> Self {
        Self {
            state: SeqIterState::Active(seq),
        }
    }

    /// Check if the sequence ran out normally.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, SeqIterState::Exhausted)
    }

    /// Check if iteration ended on a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, SeqIterState::Failed)
    }

    /// Recover the sequence if it has not ended yet.
    pub fn into_inner(self) -> Option<S> {
        match self.state {
            SeqIterState::Active(seq) => Some(seq),
            _ => None,
        }
    }
}

impl<S> Iterator for SeqIter<S>
where
    S: Sequence,
{
    type Item = Result<S::Item, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let SeqIterState::Active(ref mut seq) = self.state else {
            return None;
        };
        match seq.advance() {
            Pull::Item(item) => Some(Ok(item)),
            Pull::Exhausted => {
                self.state = SeqIterState::Exhausted;
                None
            }
            Pull::Failed(e) => {
                self.state = SeqIterState::Failed;
                Some(Err(e))
            }
        }
    }
}

impl<S> std::iter::FusedIterator for SeqIter<S> where S: Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_vec};

    #[test]
    fn test_seq_iter_yields_ok_items() {
        let mut iter = from_vec::<_, ()>(vec![1, 2]).into_results();
        assert_eq!(iter.next(), Some(Ok(1)));
        assert_eq!(iter.next(), Some(Ok(2)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert!(iter.is_exhausted());
        assert!(iter.into_inner().is_none());
    }

    #[test]
    fn test_seq_iter_ends_after_failure() {
        let mut iter = from_fn(|i| if i == 0 { Pull::Item(1) } else { Pull::Failed("bad") })
            .into_results();
        assert_eq!(iter.next(), Some(Ok(1)));
        assert_eq!(iter.next(), Some(Err("bad")));
        assert_eq!(iter.next(), None);
        assert!(iter.is_failed());
        assert!(!iter.is_exhausted());
    }

    #[test]
    fn test_for_loop_with_mut_ref() {
        let mut iter = from_vec::<_, ()>(vec!['x', 'y']).into_results();
        let mut values = Vec::new();
        for value in &mut iter {
            values.push(value);
        }
        assert_eq!(values, vec![Ok('x'), Ok('y')]);
        assert!(iter.is_exhausted());
    }

    #[test]
    fn test_into_inner_resumes_sequence() {
        let mut iter = from_vec::<_, ()>(vec![1, 2, 3]).into_results();
        assert_eq!(iter.next(), Some(Ok(1)));
        let mut seq = iter.into_inner().expect("still active");
        assert_eq!(seq.advance(), Pull::Item(2));
    }
}
