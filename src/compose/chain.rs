use crate::{
    Sequence,
    build::{FromVec, from_vec},
    pull::Pull,
};

/// Flatten a sequence of sequences into a single sequence.
///
/// Inner sequences are drained in order. An exhausted inner sequence is dropped
/// and the next one is pulled from `outer`; a failure from either level is
/// returned as is.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let nested = from_vec::<_, ()>(vec![
///     from_vec(vec![1, 2]),
///     from_vec(vec![]),
///     from_vec(vec![3]),
/// ]);
/// assert_eq!(chain(nested).collect_vec(), Ok(vec![1, 2, 3]));
/// ```
pub fn chain<O>(outer: O) -> Chain<O>
where
    O: Sequence,
    O::Item: Sequence<Error = O::Error>,
{
    Chain {
        outer,
        current: None,
    }
}

/// Concatenate a list of sequences of the same type.
pub fn chain_all<S>(sequences: Vec<S>) -> Chain<FromVec<S, S::Error>>
where
    S: Sequence,
{
    chain(from_vec(sequences))
}

/// Flattens nested sequences.
///
/// Created via [`chain()`] or [`Sequence::flatten`]. An outer sequence that keeps
/// producing empty inner sequences keeps `advance` looping.
pub struct Chain<O>
where
    O: Sequence,
{
    outer: O,
    current: Option<O::Item>,
}

impl<O> Sequence for Chain<O>
where
    O: Sequence,
    O::Item: Sequence<Error = O::Error>,
{
    type Item = <O::Item as Sequence>::Item;
    type Error = O::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        loop {
            let inner = match self.current {
                Some(ref mut inner) => inner,
                None => match self.outer.advance() {
                    Pull::Item(inner) => self.current.insert(inner),
                    Pull::Exhausted => return Pull::Exhausted,
                    Pull::Failed(e) => return Pull::Failed(e),
                },
            };
            match inner.advance() {
                Pull::Exhausted => self.current = None,
                pulled => return pulled,
            }
        }
    }
}

/// Create a sequence that drains `first`, then `second`.
pub fn then<A, B>(first: A, second: B) -> Then<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item, Error = A::Error>,
{
    Then(Some(first), second)
}

/// Two sequences back to back.
///
/// Created via [`then()`] or [`Sequence::then`]. The first sequence is dropped
/// once it is exhausted.
pub struct Then<A, B>(Option<A>, B);

impl<A, B> Sequence for Then<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item, Error = A::Error>,
{
    type Item = A::Item;
    type Error = A::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        if let Some(ref mut first) = self.0 {
            match first.advance() {
                Pull::Exhausted => self.0 = None,
                pulled => return pulled,
            }
        }
        self.1.advance()
    }
}
