//! Road maps, reachability and central node election.
//!
//! Graph code is organized into categories:
//! - `basic`: the branded road map and its reachability primitive
//! - `central`: the central node finder and its options

pub(crate) mod access;
pub mod basic;
pub mod central;

pub use basic::{can_reach, NodeId, Reachability, RoadMap};
pub use central::{
    find_central_node, find_central_node_or_sentinel, CentralNodeFinder, Direction,
    FinderOptions, ShapePolicy, Strategy, NO_CENTRAL_NODE,
};
