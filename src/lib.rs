//! Chained hash map keyed by 64-bit signed integers.
//!
//! [`LongMap`] maps `i64` keys to arbitrary values through a bucket table of
//! singly-linked collision chains. Chains live in a bump arena and link to
//! each other by index, so no entry owns a pointer and the whole crate is
//! free of `unsafe`.
//!
//! # Key properties
//!
//! - **Deterministic iteration**: bucket order first, chain order within
//! - **Growth-only table**: 16 buckets at construction, doubled whenever
//!   occupancy reaches 3/4 ahead of an insert, reset only by
//!   [`clear`](LongMap::clear)
//! - **COW chain edits**: mutations re-link copied prefixes instead of
//!   touching allocated entries
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod iter;
pub mod node;

mod arena;
mod map;
mod ops;

#[cfg(test)]
mod tests;

pub use map::LongMap;
