//! Best-first search core shared by Dijkstra and A*.
//!
//! The frontier is a binary min-heap of [`Entry`] values with lazy deletion:
//! a node may be pushed several times as cheaper routes to it appear, and
//! stale entries are dropped when popped because the node is already
//! settled.

use super::types::{Algorithm, SearchResult, SearchStats};
use crate::graph::{NodeId, RoadNetwork};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::time::Instant;

/// A frontier entry.
///
/// Ordered so that [`BinaryHeap`] pops the smallest `priority` first, then
/// the smallest accumulated `cost`, then the smallest node identifier.
#[derive(Debug, Clone)]
struct Entry<N> {
    priority: f64,
    cost: f64,
    node: N,
    parent: Option<N>,
}

impl<N: Ord> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.cost.total_cmp(&self.cost))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for Entry<N> {}

/// Runs best-first search from `start` to `end`.
///
/// Frontier priority is `g + heuristic(node)`; Dijkstra passes a zero
/// heuristic. Edges whose cost under `metric` is not finite are never
/// relaxed.
pub(crate) fn best_first<N, H>(
    network: &RoadNetwork<N>,
    start: &N,
    end: &N,
    metric: &str,
    algorithm: Algorithm,
    heuristic: H,
) -> SearchResult<N>
where
    N: NodeId,
    H: Fn(&N) -> f64,
{
    let timer = Instant::now();
    let mut stats = SearchStats::new(algorithm);

    let mut frontier = BinaryHeap::new();
    let mut best_cost: BTreeMap<N, f64> = BTreeMap::new();
    let mut parents: BTreeMap<N, N> = BTreeMap::new();
    let mut settled: BTreeSet<N> = BTreeSet::new();

    best_cost.insert(start.clone(), 0.0);
    frontier.push(Entry {
        priority: 0.0,
        cost: 0.0,
        node: start.clone(),
        parent: None,
    });

    while let Some(Entry {
        cost, node, parent, ..
    }) = frontier.pop()
    {
        if settled.contains(&node) {
            continue;
        }
        if let Some(p) = parent {
            parents.insert(node.clone(), p);
        }
        settled.insert(node.clone());
        stats.nodes_explored += 1;

        if node == *end {
            let path = unwind(&parents, node);
            stats.execution_time = timer.elapsed();
            log::debug!(
                "{algorithm}: reached {end} at cost {cost} after settling {} nodes",
                stats.nodes_explored
            );
            return SearchResult { path, cost, stats };
        }

        for (next, weight) in network.neighbors(&node) {
            if settled.contains(next) {
                continue;
            }
            let step = weight.cost(metric);
            if !step.is_finite() {
                continue;
            }
            let total = cost + step;
            let improves = best_cost.get(next).map_or(true, |&known| total < known);
            if improves {
                best_cost.insert(next.clone(), total);
                frontier.push(Entry {
                    priority: total + heuristic(next),
                    cost: total,
                    node: next.clone(),
                    parent: Some(node.clone()),
                });
            }
        }
    }

    stats.execution_time = timer.elapsed();
    log::debug!(
        "{algorithm}: no path from {start} to {end} ({} nodes settled)",
        stats.nodes_explored
    );
    SearchResult::unreachable(stats)
}

/// Walks parent links back from `end` and returns the path start-first.
fn unwind<N: NodeId>(parents: &BTreeMap<N, N>, end: N) -> Vec<N> {
    let mut path = vec![end];
    while let Some(prev) = path.last().and_then(|n| parents.get(n)) {
        path.push(prev.clone());
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: f64, cost: f64, node: u32) -> Entry<u32> {
        Entry {
            priority,
            cost,
            node,
            parent: None,
        }
    }

    #[test]
    fn test_heap_pops_lowest_priority() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(3.0, 3.0, 1));
        heap.push(entry(1.0, 1.0, 2));
        heap.push(entry(2.0, 2.0, 3));
        let order: Vec<u32> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_break_on_cost_then_node() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(5.0, 4.0, 9));
        heap.push(entry(5.0, 2.0, 7));
        heap.push(entry(5.0, 2.0, 3));
        let order: Vec<u32> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![3, 7, 9]);
    }

    #[test]
    fn test_unwind() {
        let parents: BTreeMap<u32, u32> = [(2, 1), (3, 2)].into_iter().collect();
        assert_eq!(unwind(&parents, 3), vec![1, 2, 3]);
        assert_eq!(unwind(&parents, 1), vec![1]);
    }
}
