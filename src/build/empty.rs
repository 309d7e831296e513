use std::marker::PhantomData;

use crate::{Sequence, pull::Pull};

/// A sequence with no items.
pub struct Empty<T, E>(PhantomData<fn() -> (T, E)>);

/// Create a sequence that is exhausted from the first pull.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut nothing = empty::<i32, ()>();
/// assert_eq!(nothing.advance(), Pull::Exhausted);
/// ```
pub fn empty<T, E>() -> Empty<T, E> {
    Empty(PhantomData)
}

impl<T, E> Sequence for Empty<T, E> {
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        Pull::Exhausted
    }
}

impl<T, E> Clone for Empty<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for Empty<T, E> {}

impl<T, E> Default for Empty<T, E> {
    fn default() -> Self {
        empty()
    }
}
