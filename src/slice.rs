//! Eager helpers over in-memory slices.
//!
//! These are the slice counterparts of the sequence adapters, for data that is
//! already materialized.

/// Apply `f` to every element, collecting the results.
pub fn map<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    items.iter().map(f).collect()
}

/// Apply a fallible `f` to every element, stopping at the first error.
pub fn try_map<T, R, E, F>(items: &[T], f: F) -> Result<Vec<R>, E>
where
    F: FnMut(&T) -> Result<R, E>,
{
    items.iter().map(f).collect()
}

/// Clone the elements that satisfy `predicate`, keeping their order.
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|t| predicate(t)).cloned().collect()
}

/// `true` if every element satisfies `predicate`; `true` for an empty slice.
pub fn all<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// `true` if some element satisfies `predicate`; `false` for an empty slice.
pub fn any<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

/// Rewrite every element in place.
pub fn apply<T, F>(items: &mut [T], f: F)
where
    F: FnMut(&mut T),
{
    items.iter_mut().for_each(f)
}

/// First element satisfying `predicate`, with its index.
///
/// ```rust
/// use pullseq::slice;
///
/// assert_eq!(slice::find(&[0, 1, 2, 3], |x| x % 2 == 1), Some((1, &1)));
/// assert_eq!(slice::find(&[0, 2], |x| x % 2 == 1), None);
/// ```
pub fn find<T, P>(items: &[T], mut predicate: P) -> Option<(usize, &T)>
where
    P: FnMut(&T) -> bool,
{
    items.iter().enumerate().find(|(_, t)| predicate(t))
}

/// Call a fallible `f` on every element, stopping at the first error.
pub fn for_each<T, E, F>(items: &[T], f: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    items.iter().try_for_each(f)
}
