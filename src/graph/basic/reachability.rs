//! Iterative reachability over a [`RoadMap`].
//!
//! Traversals use an explicit stack, never recursion, so deep chains cannot
//! exhaust the call stack. The stack and visited set are kept in a
//! [`Reachability`] scratch value and reused across queries on the same map.

use crate::graph::access::visited::VisitedSet;
use crate::graph::basic::node_id::NodeId;
use crate::graph::basic::road_map::RoadMap;

/// Reusable depth-first search state for one road map brand.
#[derive(Debug, Clone)]
pub struct Reachability<'brand> {
    visited: VisitedSet,
    stack: Vec<NodeId<'brand>>,
}

impl<'brand> Reachability<'brand> {
    /// Creates scratch space sized for `map`.
    pub fn new(map: &RoadMap<'brand>) -> Self {
        Self {
            visited: VisitedSet::new(map.node_count()),
            stack: Vec::new(),
        }
    }

    fn reset(&mut self, map: &RoadMap<'brand>) {
        self.visited.reset(map.node_count());
        self.stack.clear();
    }

    /// Returns `true` iff `target` is reachable from `start`.
    ///
    /// Every node reaches itself. The search stops at the first encounter of
    /// `target`.
    pub fn can_reach(
        &mut self,
        map: &RoadMap<'brand>,
        start: NodeId<'brand>,
        target: NodeId<'brand>,
    ) -> bool {
        if start == target {
            return true;
        }

        self.reset(map);
        self.visited.try_visit(start.index());
        self.stack.push(start);

        while let Some(node) = self.stack.pop() {
            for &next in map.successors(node) {
                if next == target {
                    return true;
                }
                if self.visited.try_visit(next.index()) {
                    self.stack.push(next);
                }
            }
        }

        false
    }

    /// Every node reachable from `start` (including `start`), in DFS discovery order.
    pub fn reachable_from(
        &mut self,
        map: &RoadMap<'brand>,
        start: NodeId<'brand>,
    ) -> Vec<NodeId<'brand>> {
        self.reset(map);
        self.visited.try_visit(start.index());
        self.stack.push(start);

        let mut order = Vec::new();
        while let Some(node) = self.stack.pop() {
            order.push(node);
            // Reverse push keeps discovery order aligned with row order.
            for &next in map.successors(node).iter().rev() {
                if self.visited.try_visit(next.index()) {
                    self.stack.push(next);
                }
            }
        }

        order
    }

    /// Number of nodes reachable from `start` (including `start`).
    pub fn reach_count(&mut self, map: &RoadMap<'brand>, start: NodeId<'brand>) -> usize {
        self.reset(map);
        self.visited.try_visit(start.index());
        self.stack.push(start);

        while let Some(node) = self.stack.pop() {
            for &next in map.successors(node) {
                if self.visited.try_visit(next.index()) {
                    self.stack.push(next);
                }
            }
        }

        self.visited.count()
    }

    /// Whether `node` was visited by the most recent query.
    #[cfg(test)]
    pub(crate) fn was_visited(&self, node: NodeId<'brand>) -> bool {
        self.visited.is_visited(node.index())
    }
}

/// One-shot reachability check with fresh scratch space.
///
/// Prefer [`Reachability::can_reach`] when issuing many queries on one map.
pub fn can_reach<'brand>(
    map: &RoadMap<'brand>,
    start: NodeId<'brand>,
    target: NodeId<'brand>,
) -> bool {
    Reachability::new(map).can_reach(map, start, target)
}
