use crate::{
    Sequence,
    build::{FromFn, FromVec, from_fn, from_vec},
    compose::{Chain, Fuse, TryMap, chain, fuse, try_map},
    pull::Pull,
};

type Batch<T, E> = fn(Vec<T>) -> Result<FromVec<T, E>, E>;

/// A flat sequence over batches fetched on demand.
///
/// Built as `chain(try_map(fuse(from_fn(step)), from_vec))`: the step function is
/// only called when the previous batch has been drained, and never again once it
/// has ended the stream.
pub struct Lazy<F, T, E>
where
    F: FnMut(usize) -> Pull<Vec<T>, E>,
{
    inner: Chain<TryMap<Fuse<FromFn<F>>, Batch<T, E>>>,
}

/// Create a flat sequence from a batch-producing step function.
///
/// `step` receives the batch index, starting at 0, and returns the next batch,
/// [`Pull::Exhausted`] to end the stream or [`Pull::Failed`] to abort it. Empty
/// batches are skipped.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let pages = lazy(|page| match page {
///     0 => Pull::Item(vec!["a", "b"]),
///     1 => Pull::Item(vec!["c"]),
///     _ => Pull::<_, ()>::Exhausted,
/// });
/// assert_eq!(pages.collect_vec(), Ok(vec!["a", "b", "c"]));
/// ```
pub fn lazy<F, T, E>(step: F) -> Lazy<F, T, E>
where
    F: FnMut(usize) -> Pull<Vec<T>, E>,
{
    Lazy {
        inner: chain(try_map(fuse(from_fn(step)), into_batch as Batch<T, E>)),
    }
}

fn into_batch<T, E>(rows: Vec<T>) -> Result<FromVec<T, E>, E> {
    tracing::trace!(len = rows.len(), "fetched batch");
    Ok(from_vec(rows))
}

impl<F, T, E> Sequence for Lazy<F, T, E>
where
    F: FnMut(usize) -> Pull<Vec<T>, E>,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        self.inner.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_batches(index: usize) -> Pull<Vec<i32>, ()> {
        if index > 1 {
            return Pull::Exhausted;
        }
        Pull::Item(vec![1, 2, 3])
    }

    #[test]
    fn test_lazy_flattens_batches() {
        let seq = lazy(two_batches);
        assert_eq!(seq.collect_vec(), Ok(vec![1, 2, 3, 1, 2, 3]));
    }

    #[test]
    fn test_lazy_then_map_to_float() {
        let seq = lazy(two_batches).map(|x| x as f32);
        assert_eq!(seq.collect_vec(), Ok(vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_lazy_fetches_only_when_batch_drained() {
        let mut fetched = Vec::new();
        let mut seq = lazy(|index| {
            fetched.push(index);
            if index < 3 {
                Pull::<_, ()>::Item(vec![index; 2])
            } else {
                Pull::Exhausted
            }
        });

        assert_eq!(seq.advance(), Pull::Item(0));
        assert_eq!(seq.advance(), Pull::Item(0));
        assert_eq!(seq.advance(), Pull::Item(1));
        drop(seq);
        assert_eq!(fetched, vec![0, 1]);
    }

    #[test]
    fn test_lazy_skips_empty_batches() {
        let seq = lazy(|index| match index {
            0 | 2 => Pull::<Vec<u8>, ()>::Item(Vec::new()),
            1 => Pull::Item(vec![7]),
            3 => Pull::Item(vec![8, 9]),
            _ => Pull::Exhausted,
        });
        assert_eq!(seq.collect_vec(), Ok(vec![7, 8, 9]));
    }

    #[test]
    fn test_lazy_propagates_step_failure() {
        let mut seq = lazy(|index| match index {
            0 => Pull::Item(vec![1]),
            _ => Pull::Failed("fetch failed"),
        });
        assert_eq!(seq.advance(), Pull::Item(1));
        assert_eq!(seq.advance(), Pull::Failed("fetch failed"));
    }

    #[test]
    fn test_lazy_does_not_restart_after_exhaustion() {
        let mut fetched = 0;
        let mut seq = lazy(|index| {
            fetched += 1;
            match index {
                0 => Pull::<_, ()>::Item(vec![1]),
                1 => Pull::Exhausted,
                _ => Pull::Item(vec![99]),
            }
        });
        assert_eq!(seq.advance(), Pull::Item(1));
        assert_eq!(seq.advance(), Pull::Exhausted);
        assert_eq!(seq.advance(), Pull::Exhausted);
        assert_eq!(seq.advance(), Pull::Exhausted);
        drop(seq);
        assert_eq!(fetched, 2);
    }
}
