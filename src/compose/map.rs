//! Transforming items and errors of a sequence.
//!
//! [`Map`] and [`TryMap`] rewrite items, [`MapErr`] rewrites failures and
//! [`Inspect`] only looks. Exhaustion passes through all of them untouched.
//! [`AndThen`] is the one transform allowed to end the sequence itself.

use crate::{Sequence, pull::Pull};

/// Transforms items with an infallible function.
pub struct Map<S, F> {
    stage: S,
    f: F,
}

/// Create a sequence that applies `f` to every item of `stage`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let doubled = map(from_vec::<_, ()>(vec![1, 2, 3]), |x| x * 2);
/// assert_eq!(doubled.collect_vec(), Ok(vec![2, 4, 6]));
/// ```
pub fn map<S, R, F>(stage: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> R,
{
    Map { stage, f }
}

impl<S, R, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> R,
{
    type Item = R;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        self.stage.advance().map(&mut self.f)
    }
}

/// Transforms items with a function that may fail.
///
/// Upstream exhaustion and failure are returned without calling the function.
pub struct TryMap<S, F> {
    stage: S,
    f: F,
}

/// Create a sequence that applies a fallible `f` to every item of `stage`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut parsed = try_map(from_vec(vec!["1", "x"]), |s: &str| {
///     s.parse::<i32>().map_err(|_| format!("bad number {s:?}"))
/// });
/// assert_eq!(parsed.advance(), Pull::Item(1));
/// assert_eq!(parsed.advance(), Pull::Failed("bad number \"x\"".to_string()));
/// ```
pub fn try_map<S, R, F>(stage: S, f: F) -> TryMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<R, S::Error>,
{
    TryMap { stage, f }
}

impl<S, R, F> Sequence for TryMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<R, S::Error>,
{
    type Item = R;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self.stage.advance() {
            Pull::Item(t) => Pull::from_result((self.f)(t)),
            Pull::Exhausted => Pull::Exhausted,
            Pull::Failed(e) => Pull::Failed(e),
        }
    }
}

/// Transforms items with a function that decides the outcome of the pull.
///
/// The function may return an item, a failure, or [`Pull::Exhausted`] to end the
/// sequence. After that the wrapped sequence is dropped and never pulled again.
pub struct AndThen<S, F> {
    stage: Option<S>,
    f: F,
}

/// Create a sequence that passes every item of `stage` through `f`, using the
/// returned [`Pull`] as the result of the pull.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let until_zero = and_then(from_vec::<_, ()>(vec![3, 1, 0, 5]), |x| {
///     if x == 0 { Pull::Exhausted } else { Pull::Item(10 / x) }
/// });
/// assert_eq!(until_zero.collect_vec(), Ok(vec![3, 10]));
/// ```
pub fn and_then<S, R, F>(stage: S, f: F) -> AndThen<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Pull<R, S::Error>,
{
    AndThen {
        stage: Some(stage),
        f,
    }
}

impl<S, R, F> Sequence for AndThen<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Pull<R, S::Error>,
{
    type Item = R;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        let Some(ref mut stage) = self.stage else {
            return Pull::Exhausted;
        };
        let pulled = stage.advance().and_then(&mut self.f);
        if pulled.is_exhausted() {
            self.stage = None;
        }
        pulled
    }
}

/// Transforms failures of the wrapped sequence.
pub struct MapErr<S, F> {
    stage: S,
    f: F,
}

/// Create a sequence whose failures are converted with `f`.
pub fn map_err<S, E2, F>(stage: S, f: F) -> MapErr<S, F>
where
    S: Sequence,
    F: FnMut(S::Error) -> E2,
{
    MapErr { stage, f }
}

impl<S, E2, F> Sequence for MapErr<S, F>
where
    S: Sequence,
    F: FnMut(S::Error) -> E2,
{
    type Item = S::Item;
    type Error = E2;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        self.stage.advance().map_err(&mut self.f)
    }
}

/// Calls a function on each item before handing it on.
pub struct Inspect<S, F> {
    stage: S,
    f: F,
}

/// Create a sequence that shows every item of `stage` to `f` by reference.
pub fn inspect<S, F>(stage: S, f: F) -> Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    Inspect { stage, f }
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        let pulled = self.stage.advance();
        if let Pull::Item(ref t) = pulled {
            (self.f)(t);
        }
        pulled
    }
}
