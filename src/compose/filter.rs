use crate::{Sequence, pull::Pull};

/// Boxed item predicate, used where several predicates are combined.
pub type Predicate<T> = Box<dyn FnMut(&T) -> bool>;

/// Yields only the items that satisfy a predicate.
///
/// Rejected items are dropped, never buffered. A sequence with no matching items
/// is scanned until it runs out.
pub struct Filter<S, P> {
    stage: S,
    predicate: P,
}

/// Create a sequence that keeps the items of `stage` matching `predicate`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let odd = filter(from_vec::<_, ()>(vec![1, 2, 3, 4]), |x| x % 2 == 1);
/// assert_eq!(odd.collect_vec(), Ok(vec![1, 3]));
/// ```
pub fn filter<S, P>(stage: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter { stage, predicate }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        loop {
            match self.stage.advance() {
                Pull::Item(t) if !(self.predicate)(&t) => continue,
                pulled => return pulled,
            }
        }
    }
}

/// Yields only the items that satisfy every predicate in a list.
///
/// Predicates run in order and stop at the first rejection. An empty list
/// accepts everything.
pub struct FilterAll<S>
where
    S: Sequence,
{
    stage: S,
    predicates: Vec<Predicate<S::Item>>,
}

/// Create a sequence that keeps the items of `stage` matching all `predicates`.
pub fn filter_all<S>(stage: S, predicates: Vec<Predicate<S::Item>>) -> FilterAll<S>
where
    S: Sequence,
{
    FilterAll { stage, predicates }
}

impl<S> Sequence for FilterAll<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        loop {
            match self.stage.advance() {
                Pull::Item(t) if !self.predicates.iter_mut().all(|p| p(&t)) => continue,
                pulled => return pulled,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_vec};
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn test_filter_odd() {
        let seq = from_vec::<_, ()>(vec![1, 2, 3, 4]).filter(|x| x % 2 == 1);
        assert_eq!(seq.collect_vec(), Ok(vec![1, 3]));
    }

    #[test]
    fn test_filter_without_matches_runs_to_exhaustion() {
        let mut seq = from_vec::<_, ()>(vec![2, 4, 6, 8]).filter(|x| x % 2 == 1);
        assert_eq!(seq.advance(), Pull::Exhausted);
        assert_eq!(seq.advance(), Pull::Exhausted);
    }

    #[test]
    fn test_filter_propagates_failure_while_skipping() {
        let upstream = from_fn(|i| match i {
            0 | 1 => Pull::Item(i * 2),
            2 => Pull::Failed("broken"),
            _ => Pull::Item(1),
        });
        let mut seq = upstream.filter(|x| x % 2 == 1);
        assert_eq!(seq.advance(), Pull::Failed("broken"));
        assert_eq!(seq.advance(), Pull::Item(1));
    }

    #[test]
    fn test_filter_all_requires_every_predicate() {
        let preds: Vec<Predicate<i32>> =
            vec![Box::new(|x: &i32| *x > 1), Box::new(|x: &i32| x % 2 == 1)];
        let seq = from_vec::<_, ()>(vec![1, 2, 3, 4, 5]).filter_all(preds);
        assert_eq!(seq.collect_vec(), Ok(vec![3, 5]));
    }

    #[test]
    fn test_filter_all_short_circuits() {
        let second_calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&second_calls);
        let preds: Vec<Predicate<i32>> = vec![
            Box::new(|x: &i32| *x > 2),
            Box::new(move |_: &i32| {
                counter.set(counter.get() + 1);
                true
            }),
        ];
        let seq = from_vec::<_, ()>(vec![1, 2, 3, 4]).filter_all(preds);
        assert_eq!(seq.collect_vec(), Ok(vec![3, 4]));
        assert_eq!(second_calls.get(), 2);
    }

    #[test]
    fn test_filter_all_empty_accepts_everything() {
        let seq = filter_all(from_vec::<_, ()>(vec![1, 2]), Vec::new());
        assert_eq!(seq.collect_vec(), Ok(vec![1, 2]));
    }
}
