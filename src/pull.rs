/// Result of advancing a sequence: the next item, normal exhaustion, or a failure.
///
/// `Pull` plays the role `Option` plays for [`Iterator`], with a third arm for
/// errors. Exhaustion and failure share the channel but never the variant, so a
/// consumer can always tell "no more items" apart from "something went wrong".
///
/// # Examples
///
/// ```rust
/// use pullseq::Pull;
///
/// let item: Pull<i32, &str> = Pull::Item(21);
/// assert_eq!(item.map(|x| x * 2), Pull::Item(42));
///
/// let done: Pull<i32, &str> = Pull::Exhausted;
/// assert!(done.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T, E> {
    /// The sequence produced a value
    Item(T),
    /// The sequence has no more values
    Exhausted,
    /// The sequence or a closure it runs failed
    Failed(E),
}

impl<T, E> Pull<T, E> {
    /// Returns `true` if the pull produced an item.
    ///
    /// ```rust
    /// use pullseq::Pull;
    ///
    /// assert!(Pull::<i32, ()>::Item(1).is_item());
    /// assert!(!Pull::<i32, ()>::Exhausted.is_item());
    /// ```
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Pull::Item(_))
    }

    /// Returns `true` if the pull signalled exhaustion.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Exhausted)
    }

    /// Returns `true` if the pull failed.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Pull::Failed(_))
    }

    /// Converts from `Pull<T, E>` to `Option<T>`, discarding exhaustion and failure.
    ///
    /// ```rust
    /// use pullseq::Pull;
    ///
    /// assert_eq!(Pull::<i32, &str>::Item(7).item(), Some(7));
    /// assert_eq!(Pull::<i32, &str>::Failed("boom").item(), None);
    /// ```
    #[inline]
    pub fn item(self) -> Option<T> {
        match self {
            Pull::Item(t) => Some(t),
            _ => None,
        }
    }

    /// Converts from `Pull<T, E>` to `Option<E>`, discarding items and exhaustion.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Pull::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Maps the item, leaving exhaustion and failure untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Item(t) => Pull::Item(f(t)),
            Pull::Exhausted => Pull::Exhausted,
            Pull::Failed(e) => Pull::Failed(e),
        }
    }

    /// Maps the failure, leaving items and exhaustion untouched.
    ///
    /// ```rust
    /// use pullseq::Pull;
    ///
    /// let failed: Pull<i32, &str> = Pull::Failed("io");
    /// assert_eq!(failed.map_err(str::len), Pull::Failed(2));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Pull<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Pull::Item(t) => Pull::Item(t),
            Pull::Exhausted => Pull::Exhausted,
            Pull::Failed(e) => Pull::Failed(f(e)),
        }
    }

    /// Feeds the item into `f`, which may itself exhaust or fail.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Pull<U, E>
    where
        F: FnOnce(T) -> Pull<U, E>,
    {
        match self {
            Pull::Item(t) => f(t),
            Pull::Exhausted => Pull::Exhausted,
            Pull::Failed(e) => Pull::Failed(e),
        }
    }

    /// Converts from `&Pull<T, E>` to `Pull<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Pull<&T, &E> {
        match self {
            Pull::Item(t) => Pull::Item(t),
            Pull::Exhausted => Pull::Exhausted,
            Pull::Failed(e) => Pull::Failed(e),
        }
    }

    /// Converts into a `Result`, reporting exhaustion as [`PullError::Exhausted`].
    ///
    /// ```rust
    /// use pullseq::{Pull, PullError};
    ///
    /// let done: Pull<i32, &str> = Pull::Exhausted;
    /// assert_eq!(done.into_result(), Err(PullError::Exhausted));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, PullError<E>> {
        match self {
            Pull::Item(t) => Ok(t),
            Pull::Exhausted => Err(PullError::Exhausted),
            Pull::Failed(e) => Err(PullError::Failed(e)),
        }
    }

    /// Builds a pull from a closure result: `Ok` is an item, `Err` a failure.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(t) => Pull::Item(t),
            Err(e) => Pull::Failed(e),
        }
    }

    /// Returns the item, panicking with `msg` otherwise.
    #[inline]
    #[track_caller]
    pub fn expect_item(self, msg: &str) -> T {
        match self {
            Pull::Item(t) => t,
            _ => panic!("{}", msg),
        }
    }

    /// Returns the item.
    ///
    /// # Panics
    ///
    /// Panics if the pull is `Exhausted` or `Failed`.
    #[inline]
    #[track_caller]
    pub fn unwrap_item(self) -> T {
        match self {
            Pull::Item(t) => t,
            Pull::Exhausted => panic!("called `Pull::unwrap_item()` on an `Exhausted` value"),
            Pull::Failed(_) => panic!("called `Pull::unwrap_item()` on a `Failed` value"),
        }
    }

    /// Returns the failure.
    ///
    /// # Panics
    ///
    /// Panics if the pull is not `Failed`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failed(self) -> E {
        match self {
            Pull::Failed(e) => e,
            _ => panic!("called `Pull::unwrap_failed()` on a non-`Failed` value"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Pull<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Pull::from_result(result)
    }
}

/// A pull that did not produce an item, as an error value.
///
/// `Exhausted` is the end-of-sequence sentinel. It compares equal only to itself,
/// so callers match on it instead of inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PullError<E> {
    /// The sequence has no more items.
    #[error("sequence exhausted")]
    Exhausted,
    /// The sequence or one of its closures failed.
    #[error(transparent)]
    Failed(E),
}

impl<E> PullError<E> {
    /// Returns `true` for the end-of-sequence sentinel.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, PullError::Exhausted)
    }

    /// Returns the wrapped failure, or `None` for exhaustion.
    pub fn into_failure(self) -> Option<E> {
        match self {
            PullError::Exhausted => None,
            PullError::Failed(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let i: Pull<i32, &str> = Pull::Item(1);
        let x: Pull<i32, &str> = Pull::Exhausted;
        let f: Pull<i32, &str> = Pull::Failed("boom");

        assert!(i.is_item() && !i.is_exhausted() && !i.is_failed());
        assert!(x.is_exhausted() && !x.is_item() && !x.is_failed());
        assert!(f.is_failed() && !f.is_item() && !f.is_exhausted());
    }

    #[test]
    fn test_item_and_failure() {
        assert_eq!(Pull::<i32, &str>::Item(3).item(), Some(3));
        assert_eq!(Pull::<i32, &str>::Exhausted.item(), None);
        assert_eq!(Pull::<i32, &str>::Failed("e").failure(), Some("e"));
        assert_eq!(Pull::<i32, &str>::Item(3).failure(), None);
    }

    #[test]
    fn test_map_leaves_non_items_alone() {
        assert_eq!(Pull::<i32, &str>::Item(2).map(|x| x + 1), Pull::Item(3));
        assert_eq!(Pull::<i32, &str>::Exhausted.map(|x| x + 1), Pull::Exhausted);
        assert_eq!(
            Pull::<i32, &str>::Failed("e").map(|x| x + 1),
            Pull::Failed("e")
        );
    }

    #[test]
    fn test_and_then() {
        let halve = |x: i32| {
            if x % 2 == 0 {
                Pull::Item(x / 2)
            } else {
                Pull::Failed("odd")
            }
        };
        assert_eq!(Pull::Item(8).and_then(halve), Pull::Item(4));
        assert_eq!(Pull::Item(3).and_then(halve), Pull::Failed("odd"));
        assert_eq!(Pull::Exhausted.and_then(halve), Pull::Exhausted);
    }

    #[test]
    fn test_into_result_distinguishes_exhaustion() {
        let done: Pull<i32, &str> = Pull::Exhausted;
        let failed: Pull<i32, &str> = Pull::Failed("exhausted");

        let done = done.into_result().unwrap_err();
        let failed = failed.into_result().unwrap_err();
        assert!(done.is_exhausted());
        assert!(!failed.is_exhausted());
        assert_ne!(done, failed);
        assert_eq!(failed.into_failure(), Some("exhausted"));
    }

    #[test]
    fn test_from_result() {
        assert_eq!(Pull::from(Ok::<i32, &str>(1)), Pull::Item(1));
        assert_eq!(Pull::from(Err::<i32, &str>("e")), Pull::Failed("e"));
    }

    #[test]
    fn test_pull_error_display() {
        let e: PullError<std::fmt::Error> = PullError::Exhausted;
        assert_eq!(e.to_string(), "sequence exhausted");
        let e = PullError::Failed(std::fmt::Error);
        assert_eq!(e.to_string(), std::fmt::Error.to_string());
    }

    #[test]
    #[should_panic(expected = "called `Pull::unwrap_item()` on an `Exhausted` value")]
    fn test_unwrap_item_panics_on_exhausted() {
        Pull::<i32, &str>::Exhausted.unwrap_item();
    }

    #[test]
    #[should_panic(expected = "should have an item")]
    fn test_expect_item_panics() {
        Pull::<i32, &str>::Failed("e").expect_item("should have an item");
    }
}
