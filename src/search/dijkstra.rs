//! Uniform-cost search.

use super::frontier::best_first;
use super::types::{Algorithm, SearchResult};
use crate::graph::{NodeId, RoadNetwork};

/// Finds the minimum-cost path from `start` to `end` under `metric`.
///
/// Standard Dijkstra with lazy deletion. Requires non-negative edge costs.
/// An unknown `metric` makes every edge unusable, so the search fails with
/// [`SearchError::NoPathFound`](super::SearchError::NoPathFound) unless
/// `start == end`.
///
/// # Examples
///
/// ```
/// use u_route_engine::graph::{EdgeWeight, RoadNetwork};
/// use u_route_engine::search::shortest_path;
///
/// let net: RoadNetwork<&str> = [
///     ("A", "B", EdgeWeight::new(1.0, 1.0)),
///     ("B", "D", EdgeWeight::new(1.0, 1.0)),
///     ("A", "D", EdgeWeight::new(5.0, 5.0)),
/// ]
/// .into_iter()
/// .collect();
///
/// let result = shortest_path(&net, &"A", &"D", "distance");
/// assert_eq!(result.path, vec!["A", "B", "D"]);
/// assert_eq!(result.cost, 2.0);
/// assert_eq!(result.stats.algorithm.to_string(), "Dijkstra");
/// ```
pub fn shortest_path<N: NodeId>(
    network: &RoadNetwork<N>,
    start: &N,
    end: &N,
    metric: &str,
) -> SearchResult<N> {
    best_first(network, start, end, metric, Algorithm::Dijkstra, |_| 0.0)
}
