//! A branded road map in CSR (compressed sparse row) layout.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous branded successor ids, row-major, each row in
//!   input edge order
//!
//! The map is built once from an edge list and never mutated.

use num_traits::PrimInt;

use crate::error::{GraphError, Result};
use crate::graph::basic::node_id::NodeId;
use crate::token::{GhostToken, InvariantLifetime};

/// Directed roads over the cities `{0, …, N}` for an edge list of length `N`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_edges` | \(O(n)\) | Validates, then counting-sorts edges by source |
/// | `successors` | \(O(1)\) | Returns a slice of the row |
/// | `out_degree` | \(O(1)\) | Row length |
/// | `reversed` | \(O(n)\) | Rebuilds with every edge flipped |
/// | `is_functional` | \(O(n)\) | Scans row lengths |
pub struct RoadMap<'brand> {
    offsets: Vec<usize>,
    targets: Vec<NodeId<'brand>>,
    brand: InvariantLifetime<'brand>,
}

impl<'brand> RoadMap<'brand> {
    /// Builds the road map for `sources[i] -> targets[i]`, consuming the brand.
    ///
    /// The map has `sources.len() + 1` nodes.
    ///
    /// # Errors
    /// - [`GraphError::LengthMismatch`] if the sequences differ in length.
    /// - [`GraphError::NodeOutOfRange`] for the first endpoint (scanning edges
    ///   in order, source before target) outside `[0, N]`.
    pub fn from_edges<T: PrimInt>(
        token: GhostToken<'brand>,
        sources: &[T],
        targets: &[T],
    ) -> Result<Self> {
        if sources.len() != targets.len() {
            return Err(GraphError::LengthMismatch {
                sources: sources.len(),
                targets: targets.len(),
            });
        }

        let node_count = sources.len() + 1;
        let edges = sources
            .iter()
            .zip(targets)
            .enumerate()
            .map(|(edge, (&from, &to))| -> Result<(usize, usize)> {
                Ok((
                    checked_node(edge, from, node_count)?,
                    checked_node(edge, to, node_count)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        log_event!(
            debug,
            nodes = node_count,
            edges = edges.len(),
            "road map validated"
        );
        Ok(Self::from_validated(token.brand(), node_count, &edges))
    }

    /// Builds the CSR rows. Every endpoint must be `< node_count`.
    fn from_validated(
        brand: InvariantLifetime<'brand>,
        node_count: usize,
        edges: &[(usize, usize)],
    ) -> Self {
        let mut offsets = vec![0usize; node_count + 1];
        for &(from, _) in edges {
            offsets[from + 1] += 1;
        }
        for i in 1..offsets.len() {
            offsets[i] += offsets[i - 1];
        }

        // Stable placement keeps each row in input order.
        let mut cursor = offsets.clone();
        let mut targets = vec![NodeId::new(0, brand); edges.len()];
        for &(from, to) in edges {
            targets[cursor[from]] = NodeId::new(to, brand);
            cursor[from] += 1;
        }

        Self {
            offsets,
            targets,
            brand,
        }
    }

    /// Number of nodes (`N + 1`).
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len().saturating_sub(1)
    }

    /// Number of directed edges (`N`).
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Brands a raw index, or `None` if it is not a node of this map.
    pub fn node(&self, raw: usize) -> Option<NodeId<'brand>> {
        (raw < self.node_count()).then(|| NodeId::new(raw, self.brand))
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = NodeId<'brand>> + ExactSizeIterator {
        let brand = self.brand;
        (0..self.node_count()).map(move |idx| NodeId::new(idx, brand))
    }

    /// Direct successors of `node`, in input edge order.
    #[inline]
    pub fn successors(&self, node: NodeId<'brand>) -> &[NodeId<'brand>] {
        let idx = node.index();
        match (self.offsets.get(idx), self.offsets.get(idx + 1)) {
            (Some(&start), Some(&end)) => self.targets.get(start..end).unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Returns the out-degree of a node.
    pub fn out_degree(&self, node: NodeId<'brand>) -> usize {
        self.successors(node).len()
    }

    /// Largest out-degree over all nodes.
    pub fn max_out_degree(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }

    /// `true` iff every node has at most one outgoing road.
    pub fn is_functional(&self) -> bool {
        self.max_out_degree() <= 1
    }

    /// First node (ascending) with more than one outgoing road.
    pub fn first_branching_node(&self) -> Option<NodeId<'brand>> {
        self.nodes().find(|&node| self.out_degree(node) > 1)
    }

    /// Iterates over all edges `(from, to)`, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId<'brand>, NodeId<'brand>)> + '_ {
        self.nodes()
            .flat_map(move |from| self.successors(from).iter().map(move |&to| (from, to)))
    }

    /// The same node set with every road flipped.
    ///
    /// The reversal shares the brand: both maps have the same nodes.
    pub fn reversed(&self) -> RoadMap<'brand> {
        let flipped: Vec<(usize, usize)> = self
            .edges()
            .map(|(from, to)| (to.index(), from.index()))
            .collect();
        Self::from_validated(self.brand, self.node_count(), &flipped)
    }
}

impl core::fmt::Debug for RoadMap<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.nodes().map(|node| (node, self.successors(node))))
            .finish()
    }
}

fn checked_node<T: PrimInt>(edge: usize, value: T, node_count: usize) -> Result<usize> {
    value
        .to_usize()
        .filter(|&v| v < node_count)
        .ok_or_else(|| GraphError::NodeOutOfRange {
            edge,
            value: value.to_i128().unwrap_or(i128::MAX),
            node_count,
        })
}
