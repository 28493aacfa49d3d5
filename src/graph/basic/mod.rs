//! Basic graph building blocks.
//!
//! This module contains the branded road map and the reachability primitive
//! the central node finder is built on.

pub mod node_id;
pub mod reachability;
pub mod road_map;

pub use node_id::NodeId;
pub use reachability::{can_reach, Reachability};
pub use road_map::RoadMap;
