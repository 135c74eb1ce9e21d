//! Heuristic-guided (A*) search.

use super::frontier::best_first;
use super::types::{Algorithm, SearchResult};
use crate::graph::{NodeId, Positions, RoadNetwork};

/// Finds a path from `start` to `end`, ordering the frontier by
/// `f = g + h` where `h` is the planar distance to `end`.
///
/// # Known limitation
///
/// `h` is measured in raw coordinate units (latitude/longitude treated as
/// Cartesian), while `g` accumulates the metric's own units (kilometers or
/// minutes). The heuristic is therefore generally neither admissible nor
/// consistent, and the returned cost may exceed the optimum, notably for
/// `time`. It is kept as-is because it determines traversal order; compare
/// with [`shortest_path`](super::shortest_path) when optimality matters.
///
/// A node without a position contributes `h = 0`.
///
/// # Examples
///
/// ```
/// use u_route_engine::graph::{EdgeWeight, Positions, RoadNetwork};
/// use u_route_engine::search::heuristic_search;
///
/// let net: RoadNetwork<u32> = [
///     (1, 2, EdgeWeight::new(1.0, 1.0)),
///     (2, 3, EdgeWeight::new(1.0, 1.0)),
/// ]
/// .into_iter()
/// .collect();
/// let pos: Positions<u32> = [(1, (0.0, 0.0)), (2, (1.0, 0.0)), (3, (2.0, 0.0))]
///     .into_iter()
///     .collect();
///
/// let result = heuristic_search(&net, &1, &3, &pos, "distance");
/// assert_eq!(result.path, vec![1, 2, 3]);
/// assert_eq!(result.stats.algorithm.to_string(), "A*");
/// ```
pub fn heuristic_search<N: NodeId>(
    network: &RoadNetwork<N>,
    start: &N,
    end: &N,
    positions: &Positions<N>,
    metric: &str,
) -> SearchResult<N> {
    let target = positions.get(end);
    let heuristic = |node: &N| match (positions.get(node), target) {
        (Some(here), Some(goal)) => here.planar_distance(&goal),
        _ => {
            log::trace!("A*: no coordinate for {node} or {end}, using h = 0");
            0.0
        }
    };
    best_first(network, start, end, metric, Algorithm::AStar, heuristic)
}
