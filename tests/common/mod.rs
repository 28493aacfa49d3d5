//! Independent reference answers built on `petgraph`.

#![allow(dead_code)]

use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};

pub struct Oracle {
    graph: DiGraph<(), ()>,
    nodes: Vec<NodeIndex>,
}

impl Oracle {
    pub fn new(sources: &[usize], targets: &[usize]) -> Self {
        assert_eq!(sources.len(), targets.len());
        let n = sources.len() + 1;
        let mut graph = DiGraph::with_capacity(n, sources.len());
        let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
        for (&a, &b) in sources.iter().zip(targets) {
            graph.add_edge(nodes[a], nodes[b], ());
        }
        Self { graph, nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn reaches(&self, from: usize, to: usize) -> bool {
        has_path_connecting(&self.graph, self.nodes[from], self.nodes[to], None)
    }

    /// Every node reached by all nodes, ascending.
    pub fn inbound_capitals(&self) -> Vec<usize> {
        let n = self.node_count();
        (0..n)
            .filter(|&c| (0..n).all(|i| self.reaches(i, c)))
            .collect()
    }

    /// Every node reaching all nodes, ascending.
    pub fn outbound_capitals(&self) -> Vec<usize> {
        let n = self.node_count();
        (0..n)
            .filter(|&c| (0..n).all(|i| self.reaches(c, i)))
            .collect()
    }
}

/// Every edge list with `n` edges over `n + 1` nodes.
pub fn all_edge_lists(n: usize) -> impl Iterator<Item = (Vec<usize>, Vec<usize>)> {
    let base = n + 1;
    let total = base.pow(u32::try_from(2 * n).unwrap());
    (0..total).map(move |mut code| {
        let mut digits = Vec::with_capacity(2 * n);
        for _ in 0..2 * n {
            digits.push(code % base);
            code /= base;
        }
        let targets = digits.split_off(n);
        (digits, targets)
    })
}
