//! Core trait for pull-based sequences.
//!
//! A [`Sequence`] is a stateful, single-pass producer. Each call to
//! [`advance`](Sequence::advance) returns a [`Pull`]: the next item, exhaustion,
//! or a failure. There is no separate "has more" query.
//!
//! Sources live in [`build`](crate::build), adapters in
//! [`compose`](crate::compose), and consumers are provided methods on the trait.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let mut odds = from_vec::<_, ()>(vec![1, 2, 3, 4]).filter(|x| x % 2 == 1);
//! assert_eq!(odds.advance(), Pull::Item(1));
//! assert_eq!(odds.advance(), Pull::Item(3));
//! assert_eq!(odds.advance(), Pull::Exhausted);
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{
    compose::{
        AndThen, Chain, Enumerate, Filter, FilterAll, Fuse, Inspect, Map, MapErr, Predicate, Take,
        Then, TryMap,
    },
    consume,
    iter::SeqIter,
    pull::Pull,
};

/// A stateful producer of items that is advanced by the consumer.
///
/// Implementors must keep returning [`Pull::Exhausted`] once they have returned
/// it. Failures must be passed up unchanged by every adapter; only
/// [`flatten`](Sequence::flatten) reacts to exhaustion of an inner sequence.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Item = u32;
///     type Error = std::convert::Infallible;
///
///     fn advance(&mut self) -> Pull<u32, Self::Error> {
///         if self.0 == 0 {
///             return Pull::Exhausted;
///         }
///         self.0 -= 1;
///         Pull::Item(self.0 + 1)
///     }
/// }
///
/// assert_eq!(Countdown(3).collect_vec(), Ok(vec![3, 2, 1]));
/// ```
pub trait Sequence {
    /// Type of produced items
    type Item;
    /// Type of failures surfaced by this sequence or its closures
    type Error;

    /// Pull the next item.
    fn advance(&mut self) -> Pull<Self::Item, Self::Error>;

    /// Erase the concrete type behind a `Box<dyn Sequence>`.
    fn boxed<'a>(self) -> Box<dyn Sequence<Item = Self::Item, Error = Self::Error> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Transform each item with an infallible function.
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        crate::compose::map(self, f)
    }

    /// Transform each item with a function that may fail.
    ///
    /// A failure from `f` is surfaced as [`Pull::Failed`].
    fn try_map<R, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<R, Self::Error>,
    {
        crate::compose::try_map(self, f)
    }

    /// Transform each item into a full [`Pull`], so the function can also fail or
    /// end the sequence with [`Pull::Exhausted`].
    fn and_then<R, F>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Pull<R, Self::Error>,
    {
        crate::compose::and_then(self, f)
    }

    /// Convert failures into another error type.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Error) -> E2,
    {
        crate::compose::map_err(self, f)
    }

    /// Observe each item as it passes through.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        crate::compose::inspect(self, f)
    }

    /// Skip items that do not satisfy `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::compose::filter(self, predicate)
    }

    /// Skip items that do not satisfy every predicate in `predicates`.
    fn filter_all(self, predicates: Vec<Predicate<Self::Item>>) -> FilterAll<Self>
    where
        Self: Sized,
    {
        crate::compose::filter_all(self, predicates)
    }

    /// Flatten a sequence of sequences into one.
    fn flatten(self) -> Chain<Self>
    where
        Self: Sized,
        Self::Item: Sequence<Error = Self::Error>,
    {
        crate::compose::chain(self)
    }

    /// Run this sequence to exhaustion, then continue with `next`.
    fn then<S>(self, next: S) -> Then<Self, S>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item, Error = Self::Error>,
    {
        crate::compose::then(self, next)
    }

    /// Pair each item with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        crate::compose::enumerate(self)
    }

    /// Guarantee exhaustion on every pull after the first exhaustion or failure.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        crate::compose::fuse(self)
    }

    /// Yield at most `n` items.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::compose::take(self, n)
    }

    /// Fold every item into an accumulator, starting from `init`.
    fn fold<A, F>(self, init: A, f: F) -> Result<A, Self::Error>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> Result<A, Self::Error>,
    {
        consume::fold(self, init, f)
    }

    /// Fold using the first item as the seed. Empty sequences give `Item::default()`.
    fn reduce<F>(self, f: F) -> Result<Self::Item, Self::Error>
    where
        Self: Sized,
        Self::Item: Default,
        F: FnMut(Self::Item, Self::Item) -> Result<Self::Item, Self::Error>,
    {
        consume::reduce(self, None, f)
    }

    /// Fold with an optional seed; see [`reduce`](crate::reduce).
    fn reduce_with<F>(self, seed: Option<Self::Item>, f: F) -> Result<Self::Item, Self::Error>
    where
        Self: Sized,
        Self::Item: Default,
        F: FnMut(Self::Item, Self::Item) -> Result<Self::Item, Self::Error>,
    {
        consume::reduce(self, seed, f)
    }

    /// First item satisfying `predicate`, or `None` if the sequence runs out.
    fn find<P>(&mut self, predicate: P) -> Result<Option<Self::Item>, Self::Error>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Result<bool, Self::Error>,
    {
        consume::find(self, predicate)
    }

    /// Like [`find`](Sequence::find), also returning the item's position.
    fn position<P>(&mut self, predicate: P) -> Result<Option<(usize, Self::Item)>, Self::Error>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::position(self, predicate)
    }

    /// Call `f` on every item, stopping at the first error.
    fn for_each<F>(self, f: F) -> Result<(), Self::Error>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), Self::Error>,
    {
        consume::for_each(self, f)
    }

    /// Drain every item into a `Vec`.
    fn collect_vec(self) -> Result<Vec<Self::Item>, Self::Error>
    where
        Self: Sized,
    {
        consume::collect_vec(self)
    }

    /// Number of items left in the sequence.
    fn count(self) -> Result<usize, Self::Error>
    where
        Self: Sized,
    {
        consume::count(self)
    }

    /// Bridge into a std [`Iterator`] over `Result<Item, Error>`.
    fn into_results(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }
}

impl<S> Sequence for &'_ mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        (**self).advance()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        (**self).advance()
    }
}

/// `None` behaves like an empty sequence.
///
/// `Option`'s inherent `map`, `filter`, `take` and `inspect` shadow the adapters of
/// the same name, so `Some(seq).map(f)` maps the option. Call the adapter as
/// `Sequence::map(Some(seq), f)`, or only use the option where a sequence is
/// expected.
impl<S> Sequence for Option<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self {
            Some(s) => s.advance(),
            None => Pull::Exhausted,
        }
    }
}

impl<S> Sequence for Rc<RefCell<S>>
where
    S: Sequence,
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        self.as_ref().borrow_mut().advance()
    }
}

impl<L, R> Sequence for either::Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item, Error = L::Error>,
{
    type Item = L::Item;
    type Error = L::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_vec};
    use either::Either;

    #[test]
    fn test_mut_ref_advances_underlying_sequence() {
        let mut seq = from_vec::<_, ()>(vec![1, 2, 3]);
        assert_eq!((&mut seq).take(2).collect_vec(), Ok(vec![1, 2]));
        assert_eq!(seq.advance(), Pull::Item(3));
        assert_eq!(seq.advance(), Pull::Exhausted);
    }

    #[test]
    fn test_boxed_dyn_sequence() {
        let mut seq = from_vec::<_, ()>(vec!["a", "b"]).boxed();
        assert_eq!(seq.advance(), Pull::Item("a"));
        assert_eq!(seq.advance(), Pull::Item("b"));
        assert_eq!(seq.advance(), Pull::Exhausted);
    }

    #[test]
    fn test_option_none_is_empty() {
        let mut none: Option<crate::build::FromVec<i32, ()>> = None;
        assert_eq!(none.advance(), Pull::Exhausted);

        let mut some = Some(from_vec::<_, ()>(vec![5]));
        assert_eq!(some.advance(), Pull::Item(5));
        assert_eq!(some.advance(), Pull::Exhausted);
    }

    #[test]
    fn test_option_adapters_need_qualified_call() {
        let some = Some(from_vec::<_, ()>(vec![1, 2]));
        let doubled = Sequence::map(some, |x| x * 2);
        assert_eq!(doubled.collect_vec(), Ok(vec![2, 4]));

        let none: Option<crate::build::FromVec<i32, ()>> = None;
        assert_eq!(Sequence::map(none, |x| x * 2).collect_vec(), Ok(vec![]));
    }

    #[test]
    fn test_either_dispatches_to_active_side() {
        let pick = |full: bool| {
            if full {
                Either::Left(from_vec::<_, ()>(vec![1, 2]))
            } else {
                Either::Right(empty::<i32, ()>())
            }
        };

        assert_eq!(pick(true).collect_vec(), Ok(vec![1, 2]));
        assert_eq!(pick(false).collect_vec(), Ok(vec![]));
    }

    #[test]
    fn test_shared_sequence_is_consumed_once() {
        let shared = Rc::new(RefCell::new(from_vec::<_, ()>(vec![1, 2, 3, 4])));
        let mut a = Rc::clone(&shared);
        let mut b = Rc::clone(&shared);

        assert_eq!(a.advance(), Pull::Item(1));
        assert_eq!(b.advance(), Pull::Item(2));
        assert_eq!(a.advance(), Pull::Item(3));
        assert_eq!(b.advance(), Pull::Item(4));
        assert_eq!(a.advance(), Pull::Exhausted);
    }
}
