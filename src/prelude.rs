//! Commonly used imports
//!
//! Use `use pullseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Pull, PullError, Sequence};

// Sources
pub use crate::build::{empty, from_fn, from_iter, from_results, from_slice, from_vec, once, unfold};

// Composition
pub use crate::compose::{
    Predicate, and_then, chain, chain_all, enumerate, filter, filter_all, lazy, map, map_err, then,
    try_map,
};

// Terminal operations
pub use crate::{RetryPolicy, collect_vec, find, fold, reduce, retry};
