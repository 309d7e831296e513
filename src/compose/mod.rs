//! Adapting and combining sequences
//!
//! Every adapter pulls from the sequence it wraps on demand and passes failures
//! up unchanged.

mod chain;
mod enumerate;
mod filter;
mod lazy;
mod limit;
mod map;

pub use chain::{Chain, Then, chain, chain_all, then};
pub use enumerate::{Enumerate, enumerate};
pub use filter::{Filter, FilterAll, Predicate, filter, filter_all};
pub use lazy::{Lazy, lazy};
pub use limit::{Fuse, Take, fuse, take};
pub use map::{AndThen, Inspect, Map, MapErr, TryMap, and_then, inspect, map, map_err, try_map};
