//! Adapters that bound how much of a sequence is observed.

use crate::{Sequence, pull::Pull};

/// Latches the end of a sequence.
///
/// After the wrapped sequence first exhausts or fails it is dropped, and every
/// later pull returns [`Pull::Exhausted`]. This gives sequences that may restart
/// (such as [`from_fn`](crate::build::from_fn)) a stable tail.
pub struct Fuse<S>(Option<S>);

/// Create a sequence that stays exhausted once `stage` has ended.
pub fn fuse<S>(stage: S) -> Fuse<S>
where
    S: Sequence,
{
    Fuse(Some(stage))
}

impl<S> Sequence for Fuse<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        let Some(ref mut stage) = self.0 else {
            return Pull::Exhausted;
        };
        let pulled = stage.advance();
        if !pulled.is_item() {
            self.0 = None;
        }
        pulled
    }
}

/// Yields at most a fixed number of items.
pub struct Take<S> {
    stage: S,
    remaining: usize,
}

/// Create a sequence that stops after `n` items of `stage`.
///
/// Once `n` items have been produced `stage` is not pulled again.
pub fn take<S>(stage: S, n: usize) -> Take<S>
where
    S: Sequence,
{
    Take {
        stage,
        remaining: n,
    }
}

impl<S> Sequence for Take<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        if self.remaining == 0 {
            return Pull::Exhausted;
        }
        let pulled = self.stage.advance();
        if pulled.is_item() {
            self.remaining -= 1;
        }
        pulled
    }
}
