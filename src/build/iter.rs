use std::marker::PhantomData;

use crate::{Sequence, pull::Pull};

/// Adapts a std [`Iterator`] into an infallible sequence.
pub struct FromIter<I, E> {
    iter: I,
    _phantom: PhantomData<fn() -> E>,
}

/// Create a sequence over anything iterable.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let total = from_iter::<_, ()>(1..=100).reduce(|a, b| Ok(a + b));
/// assert_eq!(total, Ok(5050));
/// ```
pub fn from_iter<I, E>(iter: I) -> FromIter<I::IntoIter, E>
where
    I: IntoIterator,
{
    FromIter {
        iter: iter.into_iter(),
        _phantom: PhantomData,
    }
}

impl<I, E> Sequence for FromIter<I, E>
where
    I: Iterator,
{
    type Item = I::Item;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self.iter.next() {
            Some(t) => Pull::Item(t),
            None => Pull::Exhausted,
        }
    }
}

/// Adapts an iterator of `Result`s, turning each `Err` into a failure.
pub struct FromResults<I>(I);

/// Create a sequence from an iterator of `Result<T, E>`.
pub fn from_results<I, T, E>(iter: I) -> FromResults<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    FromResults(iter.into_iter())
}

impl<I, T, E> Sequence for FromResults<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self.0.next() {
            Some(result) => Pull::from_result(result),
            None => Pull::Exhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_over_range() {
        let mut seq = from_iter::<_, ()>(0..2);
        assert_eq!(seq.advance(), Pull::Item(0));
        assert_eq!(seq.advance(), Pull::Item(1));
        assert_eq!(seq.advance(), Pull::Exhausted);
    }

    #[test]
    fn test_from_results_keeps_going_after_err() {
        let mut seq = from_results(vec![Ok(1), Err("bad"), Ok(3)]);
        assert_eq!(seq.advance(), Pull::Item(1));
        assert_eq!(seq.advance(), Pull::Failed("bad"));
        assert_eq!(seq.advance(), Pull::Item(3));
        assert_eq!(seq.advance(), Pull::Exhausted);
    }
}
