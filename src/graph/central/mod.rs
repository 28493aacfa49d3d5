//! Central node election.
//!
//! Given `N` roads over `N + 1` cities, the central node (the capital) is a
//! node that every other node can reach ([`Direction::Inbound`]), or that can
//! reach every other node ([`Direction::Outbound`]).
//!
//! ## Elimination then verification
//!
//! 1. **Elimination**: start with candidate `0`. For each node `i` in
//!    `1..=N`, if `i` cannot reach the candidate, `i` becomes the candidate.
//! 2. **Verification**: every other node must reach the survivor, otherwise
//!    there is no central node.
//!
//! Elimination never discards the answer, on any directed graph: a universal
//! candidate is never replaced, and meeting a universal node `u` while
//! holding `c` either replaces `c` by `u` or proves `c` universal (`u`
//! reaches `c`). Functional graphs (out-degree ≤ 1) are the intended input
//! but are not required. Elimination alone cannot prove existence, so
//! verification always runs.
//!
//! ## Uniqueness
//!
//! With `N` roads over `N + 1` cities the central node is unique when it
//! exists: each of the other `N` cities needs an outgoing road to reach it,
//! which uses up every road, so the central node itself has none and reaches
//! no one. Both strategies therefore agree.

mod math_assert;
mod options;


use num_traits::PrimInt;

use crate::error::Result;
use crate::graph::basic::{NodeId, Reachability, RoadMap};
use crate::token::GhostToken;

use self::math_assert::{cross_check_enabled, math_assert_msg};
pub use self::options::{Direction, FinderOptions, ShapePolicy, Strategy};

/// Sentinel returned by [`find_central_node_or_sentinel`] when no central node exists.
pub const NO_CENTRAL_NODE: i64 = -1;

/// Elects the central node of a road map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CentralNodeFinder {
    options: FinderOptions,
}

impl CentralNodeFinder {
    /// Creates a finder with the given options.
    pub const fn new(options: FinderOptions) -> Self {
        Self { options }
    }

    /// The options this finder was built with.
    pub const fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// Elects the central node for the roads `sources[i] -> targets[i]`.
    ///
    /// Returns `Ok(None)` when no node qualifies.
    ///
    /// # Errors
    /// Any [`GraphError`](crate::GraphError) raised while validating the edge
    /// list or its shape.
    pub fn find<T: PrimInt>(&self, sources: &[T], targets: &[T]) -> Result<Option<usize>> {
        GhostToken::new(|token| {
            let map = RoadMap::from_edges(token, sources, targets)?;
            Ok(self.find_in(&map)?.map(NodeId::index))
        })
    }

    /// Elects the central node of an existing map.
    ///
    /// # Errors
    /// [`GraphError::NotFunctional`](crate::GraphError::NotFunctional) under
    /// [`ShapePolicy::Functional`].
    pub fn find_in<'brand>(&self, map: &RoadMap<'brand>) -> Result<Option<NodeId<'brand>>> {
        match self.options.direction {
            Direction::Inbound => self.find_oriented(map),
            Direction::Outbound => self.find_oriented(&map.reversed()),
        }
    }

    /// `map` is already oriented so that the answer is reached by everyone.
    fn find_oriented<'brand>(&self, map: &RoadMap<'brand>) -> Result<Option<NodeId<'brand>>> {
        log_span!(
            "find_central_node",
            nodes = map.node_count(),
            edges = map.edge_count(),
            direction = %self.options.direction,
            strategy = %self.options.strategy
        );
        self.options.shape.check(map)?;

        let mut reach = Reachability::new(map);
        let found = match self.options.strategy {
            Strategy::Elimination => eliminate_then_verify(map, &mut reach),
            Strategy::Exhaustive => exhaustive(map, &mut reach),
        };

        match found {
            Some(central) => {
                log_event!(debug, central = central.index(), "central node elected");
                math_assert_msg(
                    map.out_degree(central) == 0,
                    "a central node of N roads over N + 1 cities has no outgoing road",
                );
            }
            None => log_event!(debug, "no central node"),
        }
        Ok(found)
    }
}

/// Survivor of the elimination pass.
fn elect_candidate<'brand>(
    map: &RoadMap<'brand>,
    reach: &mut Reachability<'brand>,
) -> Option<NodeId<'brand>> {
    let mut nodes = map.nodes();
    let mut candidate = nodes.next()?;
    for node in nodes {
        if !reach.can_reach(map, node, candidate) {
            log_event!(
                trace,
                from = candidate.index(),
                to = node.index(),
                "candidate replaced"
            );
            candidate = node;
        }
    }
    Some(candidate)
}

/// First node (ascending) that cannot reach `candidate`.
fn first_unreaching<'brand>(
    map: &RoadMap<'brand>,
    reach: &mut Reachability<'brand>,
    candidate: NodeId<'brand>,
) -> Option<NodeId<'brand>> {
    map.nodes()
        .find(|&node| node != candidate && !reach.can_reach(map, node, candidate))
}

fn eliminate_then_verify<'brand>(
    map: &RoadMap<'brand>,
    reach: &mut Reachability<'brand>,
) -> Option<NodeId<'brand>> {
    let candidate = elect_candidate(map, reach)?;

    match first_unreaching(map, reach, candidate) {
        None => Some(candidate),
        Some(_stranded) => {
            log_event!(
                debug,
                candidate = candidate.index(),
                stranded = _stranded.index(),
                "verification failed"
            );
            if cross_check_enabled(map.node_count()) {
                math_assert_msg(
                    exhaustive(map, reach).is_none(),
                    "elimination discarded a universal node",
                );
            }
            None
        }
    }
}

/// First node (ascending) that every node reaches, by counting reverse reachability.
fn exhaustive<'brand>(
    map: &RoadMap<'brand>,
    reach: &mut Reachability<'brand>,
) -> Option<NodeId<'brand>> {
    let reversed = map.reversed();
    let everyone = map.node_count();
    map.nodes()
        .find(|&node| reach.reach_count(&reversed, node) == everyone)
}

/// Elects the node every other node can reach.
///
/// This is the canonical "all roads lead to the capital" question, with
/// default [`FinderOptions`].
///
/// # Errors
/// [`GraphError::LengthMismatch`](crate::GraphError::LengthMismatch) or
/// [`GraphError::NodeOutOfRange`](crate::GraphError::NodeOutOfRange) for
/// malformed input.
///
/// # Example
///
/// ```rust
/// use capital::find_central_node;
///
/// assert_eq!(find_central_node(&[0, 1, 2, 4, 5], &[2, 3, 3, 3, 2]).unwrap(), Some(3));
/// assert_eq!(find_central_node::<u32>(&[], &[]).unwrap(), Some(0));
/// ```
pub fn find_central_node<T: PrimInt>(sources: &[T], targets: &[T]) -> Result<Option<usize>> {
    CentralNodeFinder::default().find(sources, targets)
}

/// [`find_central_node`] with the classic integer contract: the node, or
/// [`NO_CENTRAL_NODE`] (`-1`).
///
/// # Errors
/// As for [`find_central_node`].
#[allow(clippy::cast_possible_wrap)]
pub fn find_central_node_or_sentinel<T: PrimInt>(sources: &[T], targets: &[T]) -> Result<i64> {
    // Node indices are bounded by slice lengths, which fit in `isize`.
    Ok(find_central_node(sources, targets)?.map_or(NO_CENTRAL_NODE, |node| node as i64))
}
