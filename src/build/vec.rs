//! Sequences backed by in-memory collections.

use std::{marker::PhantomData, vec};

use crate::{Sequence, pull::Pull};

/// Yields the elements of an owned `Vec` in order.
pub struct FromVec<T, E> {
    items: vec::IntoIter<T>,
    _phantom: PhantomData<fn() -> E>,
}

/// Create a sequence over the elements of `items`.
///
/// Each pull moves one element out; no copies are made.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut seq = from_vec::<_, ()>(vec![1, 2]);
/// assert_eq!(seq.advance(), Pull::Item(1));
/// assert_eq!(seq.advance(), Pull::Item(2));
/// assert_eq!(seq.advance(), Pull::Exhausted);
/// ```
pub fn from_vec<T, E>(items: Vec<T>) -> FromVec<T, E> {
    FromVec {
        items: items.into_iter(),
        _phantom: PhantomData,
    }
}

impl<T, E> FromVec<T, E> {
    /// Elements not yet pulled.
    pub fn remaining(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T, E> Sequence for FromVec<T, E> {
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self.items.next() {
            Some(t) => Pull::Item(t),
            None => Pull::Exhausted,
        }
    }
}

/// Yields clones of the elements of a borrowed slice.
pub struct FromSlice<'a, T, E> {
    items: &'a [T],
    index: usize,
    _phantom: PhantomData<fn() -> E>,
}

/// Create a sequence over a borrowed slice, cloning each element as it is pulled.
pub fn from_slice<T, E>(items: &[T]) -> FromSlice<'_, T, E>
where
    T: Clone,
{
    FromSlice {
        items,
        index: 0,
        _phantom: PhantomData,
    }
}

impl<T, E> Sequence for FromSlice<'_, T, E>
where
    T: Clone,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self.items.get(self.index) {
            Some(t) => {
                self.index += 1;
                Pull::Item(t.clone())
            }
            None => Pull::Exhausted,
        }
    }
}
