//! Directed adjacency structure.

use super::types::{EdgeWeight, NodeId};
use std::collections::BTreeMap;

/// A directed, weighted road network.
///
/// Stored as `node -> (neighbor -> edge weight)`. Ordered maps keep
/// neighbor iteration deterministic, so two searches over the same network
/// always relax edges in the same order.
///
/// # Examples
///
/// ```
/// use u_route_engine::graph::{EdgeWeight, RoadNetwork};
///
/// let mut net = RoadNetwork::new();
/// net.add_edge("A", "B", EdgeWeight::new(1.0, 2.0));
/// assert!(net.edge(&"A", &"B").is_some());
/// assert!(net.edge(&"B", &"A").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoadNetwork<N: Ord> {
    adjacency: BTreeMap<N, BTreeMap<N, EdgeWeight>>,
}

impl<N: Ord> Default for RoadNetwork<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N: NodeId> RoadNetwork<N> {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node with no outgoing edges (a no-op if it exists).
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Inserts or replaces the edge `from -> to`.
    pub fn add_edge(&mut self, from: N, to: N, weight: EdgeWeight) -> &mut Self {
        self.adjacency.entry(from).or_default().insert(to, weight);
        self
    }

    /// Builder form of [`add_edge`](Self::add_edge).
    pub fn with_edge(mut self, from: N, to: N, weight: EdgeWeight) -> Self {
        self.add_edge(from, to, weight);
        self
    }

    /// The weight of the direct edge `from -> to`, if any.
    pub fn edge(&self, from: &N, to: &N) -> Option<&EdgeWeight> {
        self.adjacency.get(from).and_then(|out| out.get(to))
    }

    /// Outgoing edges of `node`. Empty for sinks and unknown nodes.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, &'a EdgeWeight)> + 'a {
        self.adjacency.get(node).into_iter().flat_map(|out| out.iter())
    }

    /// Whether `node` has an adjacency entry (possibly empty).
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Whether `node` has an adjacency entry or is the target of an edge.
    ///
    /// Unlike [`contains`](Self::contains) this also finds sinks. Scans all
    /// edges when `node` has no entry.
    pub fn has_node(&self, node: &N) -> bool {
        self.contains(node) || self.adjacency.values().any(|out| out.contains_key(node))
    }

    /// Nodes that have an adjacency entry, in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Number of nodes with an adjacency entry.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Whether the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<N: NodeId> From<BTreeMap<N, BTreeMap<N, EdgeWeight>>> for RoadNetwork<N> {
    fn from(adjacency: BTreeMap<N, BTreeMap<N, EdgeWeight>>) -> Self {
        Self { adjacency }
    }
}

impl<N: NodeId> FromIterator<(N, N, EdgeWeight)> for RoadNetwork<N> {
    fn from_iter<I: IntoIterator<Item = (N, N, EdgeWeight)>>(iter: I) -> Self {
        let mut net = Self::new();
        for (from, to, weight) in iter {
            net.add_edge(from, to, weight);
        }
        net
    }
}
