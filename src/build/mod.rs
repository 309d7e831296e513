//! Building sequences from scratch
//!
//! This module provides the source sequences every pipeline starts from.

mod empty;
mod func;
mod iter;
mod vec;

pub use empty::{Empty, empty};
pub use func::{FromFn, Once, Unfold, from_fn, once, unfold};
pub use iter::{FromIter, FromResults, from_iter, from_results};
pub use vec::{FromSlice, FromVec, from_slice, from_vec};
