//! # Pullseq: Lazy Pull-Based Sequences
//!
//! Build lazy sequences of any item type, transform them with combinators, and
//! drive them to a result, with errors flowing through the same channel as items.
//!
//! ## Core Types
//!
//! - **[`Sequence`]**: A single-pass producer advanced by its consumer
//! - **[`Pull`]**: What one advance returns: `Item`, `Exhausted` or `Failed`
//!
//! ## Key Features
//!
//! - **Lazy**: Nothing runs until a consumer pulls
//! - **Composable**: Flatten, map, filter and enumerate with provided methods
//! - **Fallible**: Closures may fail; failures are never swallowed
//!
//! ## Example
//!
//! ```
//! use pullseq::prelude::*;
//!
//! // Two pages of results, fetched only when the previous page is drained
//! let rows = lazy(|page| match page {
//!     0 | 1 => Pull::Item(vec![1, 2, 3]),
//!     _ => Pull::<_, String>::Exhausted,
//! });
//!
//! let total = rows
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * 10)
//!     .reduce(|a, b| Ok(a + b));
//! assert_eq!(total, Ok(80));
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`from_vec(items)`](build::from_vec) - Yield the elements of a `Vec`
//! - [`from_fn(f)`](build::from_fn) - Call `f(index)` on every pull
//! - [`lazy(step)`](compose::lazy) - Flatten batches fetched on demand
//!
//! **Consumers:**
//! - [`fold`], [`reduce`], [`find`] - Drive a sequence to a single result
//! - [`retry(op, attempts, delay)`](retry()) - Rerun a fallible operation

mod backoff;
pub mod build;
pub mod compose;
mod consume;
pub mod iter;
pub mod prelude;
mod pull;
mod sequence;
pub mod slice;

pub use backoff::*;
pub use consume::*;
pub use pull::*;
pub use sequence::*;
