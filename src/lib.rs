//! # `capital` - Central Node Election on Branded Road Maps
//!
//! Given `N` directed roads `sources[i] -> targets[i]` over the cities
//! `{0, …, N}`, elect the *capital*: the city every other city can reach.
//! If no such city exists the answer is "none" (the classic `-1`).
//!
//! ## Safety Guarantees
//!
//! - **No unsafe code**: the crate forbids `unsafe`.
//! - **Validated once**: edge lists are checked when the [`RoadMap`] is built.
//!   Every [`NodeId`] afterwards is produced by the map itself, so traversals
//!   never index out of bounds.
//! - **Branded indices**: a [`RoadMap<'brand>`](RoadMap) consumes the
//!   [`GhostToken<'brand>`](GhostToken) of its scope. Node ids carry the same
//!   invariant brand and cannot be mixed with ids of another map.
//!
//! ## Architecture
//!
//! 1. **Graph Builder** ([`RoadMap`]): compressed successor lists (CSR layout)
//!    for `N + 1` nodes, built once per call.
//! 2. **Reachability** ([`Reachability`]): iterative depth-first search with an
//!    explicit stack and a word-packed visited set, reused across checks.
//! 3. **Central Node Finder** ([`CentralNodeFinder`]): candidate elimination
//!    followed by verification.
//!
//! ### Correctness
//!
//! **Theorem 1 (Elimination Soundness)**: if a universal node exists, the
//! elimination pass ends holding one. Once the candidate is universal it is
//! never replaced, since every node reaches it. When the pass meets a
//! universal node `u` while holding `c`, either `u` cannot reach `c` and
//! becomes the candidate, or it can, in which case `c` is universal too.
//! This holds for arbitrary directed graphs, not only functional ones.
//!
//! **Theorem 2 (Uniqueness)**: with `N` roads over `N + 1` cities there is at
//! most one universal node. The other `N` cities each need an outgoing road,
//! so a universal node has none and reaches no one else.
//!
//! Elimination alone cannot detect absence, so verification always runs.
//!
//! ## Example
//!
//! ```rust
//! use capital::{find_central_node, find_central_node_or_sentinel};
//!
//! // 1 -> 0, 2 -> 0, 3 -> 0
//! assert_eq!(find_central_node(&[1, 2, 3], &[0, 0, 0]).unwrap(), Some(0));
//!
//! // 0 -> 1 and an isolated node 2.
//! assert_eq!(find_central_node_or_sentinel(&[0, 2], &[1, 2]).unwrap(), -1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;
pub mod token;

pub use error::{GraphError, Result};
pub use graph::{
    can_reach, find_central_node, find_central_node_or_sentinel, CentralNodeFinder, Direction,
    FinderOptions, NodeId, Reachability, RoadMap, ShapePolicy, Strategy, NO_CENTRAL_NODE,
};
pub use token::GhostToken;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // The brand is free: a node id is exactly one machine word.
    assert!(mem::size_of::<NodeId<'static>>() == mem::size_of::<usize>());
    assert!(mem::align_of::<NodeId<'static>>() == mem::align_of::<usize>());
};
