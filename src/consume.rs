//! Functions for driving sequences to completion.
//!
//! Every function here pulls until the sequence is exhausted or something fails.
//! The first failure, whether from the sequence or from a closure, stops the run
//! and is returned as is. Work already folded in is discarded.
//!
//! The same operations are available as provided methods on
//! [`Sequence`](crate::Sequence).

use crate::{Sequence, pull::Pull};

/// Fold every item into an accumulator starting from `init`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let words = from_vec::<_, ()>(vec!["a", "b", "c"]);
/// let joined = fold(words, String::new(), |mut acc, w| {
///     acc.push_str(w);
///     Ok(acc)
/// });
/// assert_eq!(joined, Ok("abc".to_string()));
/// ```
pub fn fold<S, A, F>(mut seq: S, init: A, mut f: F) -> Result<A, S::Error>
where
    S: Sequence,
    F: FnMut(A, S::Item) -> Result<A, S::Error>,
{
    let mut acc = init;
    loop {
        match seq.advance() {
            Pull::Item(item) => acc = f(acc, item)?,
            Pull::Exhausted => return Ok(acc),
            Pull::Failed(e) => return Err(e),
        }
    }
}

/// Fold with an optional seed.
///
/// Without a seed the first item becomes the accumulator and folding starts at the
/// second item. An empty sequence without a seed reduces to `S::Item::default()`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let sum = reduce(from_vec::<i32, ()>(vec![]), None, |a, b| Ok(a + b));
/// assert_eq!(sum, Ok(0));
///
/// let sum = reduce(from_vec::<i32, ()>(vec![1, 2]), Some(10), |a, b| Ok(a + b));
/// assert_eq!(sum, Ok(13));
/// ```
pub fn reduce<S, F>(mut seq: S, seed: Option<S::Item>, f: F) -> Result<S::Item, S::Error>
where
    S: Sequence,
    S::Item: Default,
    F: FnMut(S::Item, S::Item) -> Result<S::Item, S::Error>,
{
    let seed = match seed {
        Some(seed) => seed,
        None => match seq.advance() {
            Pull::Item(first) => first,
            Pull::Exhausted => return Ok(S::Item::default()),
            Pull::Failed(e) => return Err(e),
        },
    };
    fold(seq, seed, f)
}

/// Pull until `predicate` accepts an item.
///
/// Returns `Ok(None)` when the sequence runs out without a match. The sequence is
/// borrowed, so pulling can resume after a match.
pub fn find<S, P>(seq: &mut S, mut predicate: P) -> Result<Option<S::Item>, S::Error>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> Result<bool, S::Error>,
{
    loop {
        match seq.advance() {
            Pull::Item(item) => {
                if predicate(&item)? {
                    return Ok(Some(item));
                }
            }
            Pull::Exhausted => return Ok(None),
            Pull::Failed(e) => return Err(e),
        }
    }
}

/// Like [`find`], with an infallible predicate and the match's offset among the
/// items pulled by this call.
pub fn position<S, P>(seq: &mut S, mut predicate: P) -> Result<Option<(usize, S::Item)>, S::Error>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut index = 0;
    find(seq, |item| {
        let found = predicate(item);
        if !found {
            index += 1;
        }
        Ok(found)
    })
    .map(|found| found.map(|item| (index, item)))
}

/// Call `f` on every item, stopping at the first error.
pub fn for_each<S, F>(seq: S, mut f: F) -> Result<(), S::Error>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<(), S::Error>,
{
    fold(seq, (), |(), item| f(item))
}

/// Drain all items into a `Vec`.
pub fn collect_vec<S>(seq: S) -> Result<Vec<S::Item>, S::Error>
where
    S: Sequence,
{
    fold(seq, Vec::new(), |mut items, item| {
        items.push(item);
        Ok(items)
    })
}

/// Count the remaining items.
pub fn count<S>(seq: S) -> Result<usize, S::Error>
where
    S: Sequence,
{
    fold(seq, 0, |n, _| Ok(n + 1))
}
