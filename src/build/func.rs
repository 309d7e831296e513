use std::marker::PhantomData;

use crate::{Sequence, pull::Pull};

/// Generates items from a closure called with the pull count.
///
/// The closure runs once per [`advance`](Sequence::advance), with no lookahead,
/// and the count moves on every call whatever the closure returns. The closure
/// alone decides what happens after it returns [`Pull::Exhausted`]; wrap with
/// [`fuse`](Sequence::fuse) to pin the tail.
pub struct FromFn<F> {
    f: F,
    index: usize,
}

/// Create a sequence from a closure taking the zero-based call index.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let squares = from_fn(|i| if i < 4 { Pull::<_, ()>::Item(i * i) } else { Pull::Exhausted });
/// assert_eq!(squares.collect_vec(), Ok(vec![0, 1, 4, 9]));
/// ```
pub fn from_fn<T, E, F>(f: F) -> FromFn<F>
where
    F: FnMut(usize) -> Pull<T, E>,
{
    FromFn { f, index: 0 }
}

impl<F> FromFn<F> {
    /// Number of times the closure has been called.
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl<T, E, F> Sequence for FromFn<F>
where
    F: FnMut(usize) -> Pull<T, E>,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        let pulled = (self.f)(self.index);
        self.index += 1;
        pulled
    }
}

/// Yields a seed, then each value derived from the one before it.
///
/// The step runs once per [`advance`](Sequence::advance) after the seed, never
/// ahead of the consumer. The last yielded value is kept as the step's input, so
/// items are handed out as clones. Once the step exhausts or fails, the sequence
/// is exhausted for good.
pub struct Unfold<T, F> {
    state: UnfoldState<T>,
    step: F,
}

enum UnfoldState<T> {
    Seed(T),
    Last(T),
    Done,
}

/// Create a sequence starting at `seed` where every next item is `step(&previous)`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let powers = unfold(1u32, |prev| {
///     if *prev < 8 { Pull::<_, ()>::Item(prev * 2) } else { Pull::Exhausted }
/// });
/// assert_eq!(powers.collect_vec(), Ok(vec![1, 2, 4, 8]));
/// ```
pub fn unfold<T, E, F>(seed: T, step: F) -> Unfold<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Pull<T, E>,
{
    Unfold {
        state: UnfoldState::Seed(seed),
        step,
    }
}

impl<T, E, F> Sequence for Unfold<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Pull<T, E>,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        let current = match std::mem::replace(&mut self.state, UnfoldState::Done) {
            UnfoldState::Seed(seed) => seed,
            UnfoldState::Last(prev) => match (self.step)(&prev) {
                Pull::Item(next) => next,
                other => return other,
            },
            UnfoldState::Done => return Pull::Exhausted,
        };
        self.state = UnfoldState::Last(current.clone());
        Pull::Item(current)
    }
}

/// Yields a single value.
pub struct Once<T, E>(Option<T>, PhantomData<fn() -> E>);

/// Create a sequence holding exactly `value`.
pub fn once<T, E>(value: T) -> Once<T, E> {
    Once(Some(value), PhantomData)
}

impl<T, E> Sequence for Once<T, E> {
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self.0.take() {
            Some(t) => Pull::Item(t),
            None => Pull::Exhausted,
        }
    }
}
