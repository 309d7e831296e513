use crate::{Sequence, pull::Pull};

/// Pairs each item with its zero-based position.
///
/// The counter only moves on items; exhaustion and failure leave it alone.
pub struct Enumerate<S> {
    stage: S,
    count: usize,
}

/// Create a sequence of `(index, item)` pairs.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut seq = enumerate(from_vec::<_, ()>(vec!['a', 'b']));
/// assert_eq!(seq.advance(), Pull::Item((0, 'a')));
/// assert_eq!(seq.advance(), Pull::Item((1, 'b')));
/// assert_eq!(seq.advance(), Pull::Exhausted);
/// ```
pub fn enumerate<S>(stage: S) -> Enumerate<S>
where
    S: Sequence,
{
    Enumerate { stage, count: 0 }
}

impl<S> Sequence for Enumerate<S>
where
    S: Sequence,
{
    type Item = (usize, S::Item);
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        self.stage.advance().map(|t| {
            let index = self.count;
            self.count += 1;
            (index, t)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_vec};

    #[test]
    fn test_enumerate_pairs_items_with_index() {
        let mut seq = from_vec::<_, ()>(vec![1, 2, 3, 4]).enumerate();
        assert_eq!(seq.advance(), Pull::Item((0, 1)));
        assert_eq!(seq.advance(), Pull::Item((1, 2)));
        assert_eq!(seq.advance(), Pull::Item((2, 3)));
        assert_eq!(seq.advance(), Pull::Item((3, 4)));
        assert_eq!(seq.advance(), Pull::Exhausted);
    }

    #[test]
    fn test_enumerate_counts_only_items() {
        let upstream = from_fn(|i| match i {
            1 => Pull::Failed("skip me"),
            3 => Pull::Exhausted,
            _ => Pull::Item(i),
        });
        let mut seq = upstream.enumerate();
        assert_eq!(seq.advance(), Pull::Item((0, 0)));
        assert_eq!(seq.advance(), Pull::Failed("skip me"));
        assert_eq!(seq.advance(), Pull::Item((1, 2)));
        assert_eq!(seq.advance(), Pull::Exhausted);
        assert_eq!(seq.advance(), Pull::Item((2, 4)));
    }
}
