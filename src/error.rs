//! Error types for road map construction and central node election.
//!
//! "No central node" is a regular outcome (`Ok(None)` / `-1`), never an error.

use thiserror::Error;

/// Errors raised while validating an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The source and target sequences differ in length.
    #[error("edge list mismatch: {sources} sources but {targets} targets")]
    LengthMismatch {
        /// Length of the source sequence.
        sources: usize,
        /// Length of the target sequence.
        targets: usize,
    },

    /// An endpoint lies outside `[0, node_count)`.
    ///
    /// `value` saturates at `i128::MAX` for unsigned inputs wider than `i128`.
    #[error("edge {edge} references node {value}, outside 0..{node_count}")]
    NodeOutOfRange {
        /// Position of the offending edge in the input.
        edge: usize,
        /// The offending endpoint.
        value: i128,
        /// Number of nodes in the map (`N + 1`).
        node_count: usize,
    },

    /// A node has more than one outgoing road under
    /// [`ShapePolicy::Functional`](crate::ShapePolicy::Functional).
    #[error("node {node} has out-degree {out_degree}, expected at most 1")]
    NotFunctional {
        /// The offending node.
        node: usize,
        /// Its out-degree in the oriented map.
        out_degree: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = GraphError::NodeOutOfRange {
            edge: 2,
            value: -1,
            node_count: 4,
        };
        assert_eq!(err.to_string(), "edge 2 references node -1, outside 0..4");

        let err = GraphError::LengthMismatch {
            sources: 3,
            targets: 1,
        };
        assert_eq!(err.to_string(), "edge list mismatch: 3 sources but 1 targets");

        let err = GraphError::NotFunctional {
            node: 0,
            out_degree: 2,
        };
        assert_eq!(err.to_string(), "node 0 has out-degree 2, expected at most 1");
    }
}
