//! Request-level routing over a borrowed network.
//!
//! [`Planner`] pairs a [`RoadNetwork`] with its [`Positions`] and runs
//! whichever algorithm a [`RouteRequest`] names, expanding the resulting
//! path into coordinates. [`Planner::compare`] runs all algorithms that
//! apply to one request side by side.

use crate::ga::{sequence_waypoints, ConfigError, SequencerConfig};
use crate::graph::{NodeId, PathCoordinate, Positions, RoadNetwork};
use crate::search::{heuristic_search, shortest_path, Algorithm, SearchResult};
use rand::seq::index;
use rand::Rng;
use thiserror::Error;

/// Errors raised before any search runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The start or end node appears neither in the network nor in the
    /// position map.
    #[error("unknown node {0}")]
    UnknownNode(String),

    /// The sequencer configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One routing request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest<N> {
    /// Which algorithm [`Planner::plan`] runs.
    pub algorithm: Algorithm,
    /// Origin.
    pub start: N,
    /// Destination.
    pub end: N,
    /// Mandatory intermediate stops, in no particular order.
    pub waypoints: Vec<N>,
    /// Cost attribute to minimize.
    pub metric: String,
}

impl<N> RouteRequest<N> {
    /// A Dijkstra request by distance with no waypoints.
    pub fn new(start: N, end: N) -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            start,
            end,
            waypoints: Vec::new(),
            metric: "distance".to_owned(),
        }
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the waypoints.
    pub fn with_waypoints(mut self, waypoints: Vec<N>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// Sets the metric.
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = metric.into();
        self
    }
}

/// A search result with the coordinates of its path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedRoute<N> {
    /// The raw search result.
    pub result: SearchResult<N>,
    /// Positioned nodes of `result.path`, in order.
    pub coordinates: Vec<PathCoordinate<N>>,
}

/// Results of every applicable algorithm for one request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison<N> {
    /// Metric all routes were optimized for.
    pub metric: String,
    /// Uniform-cost search.
    pub dijkstra: PlannedRoute<N>,
    /// Heuristic search.
    pub astar: PlannedRoute<N>,
    /// Waypoint sequencing; `None` when the request has no waypoints.
    pub genetic: Option<PlannedRoute<N>>,
}

/// Runs routing requests against one network.
///
/// # Examples
///
/// ```
/// use u_route_engine::graph::{EdgeWeight, Positions, RoadNetwork};
/// use u_route_engine::planner::{Planner, RouteRequest};
/// use u_route_engine::random::create_rng;
/// use u_route_engine::search::Algorithm;
///
/// let net: RoadNetwork<&str> = [
///     ("A", "B", EdgeWeight::new(1.0, 1.0)),
///     ("B", "C", EdgeWeight::new(1.0, 1.0)),
/// ]
/// .into_iter()
/// .collect();
/// let pos: Positions<&str> = [("A", (0.0, 0.0)), ("B", (0.0, 1.0)), ("C", (0.0, 2.0))]
///     .into_iter()
///     .collect();
///
/// let planner = Planner::new(&net, &pos);
/// let request = RouteRequest::new("A", "C").with_algorithm(Algorithm::AStar);
/// let route = planner.plan(&request, &mut create_rng(1))?;
/// assert_eq!(route.result.path, vec!["A", "B", "C"]);
/// assert_eq!(route.coordinates[2].lon, 2.0);
/// # Ok::<(), u_route_engine::planner::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Planner<'a, N: Ord> {
    network: &'a RoadNetwork<N>,
    positions: &'a Positions<N>,
    config: SequencerConfig,
}

impl<'a, N: NodeId> Planner<'a, N> {
    /// A planner using the default sequencer configuration.
    pub fn new(network: &'a RoadNetwork<N>, positions: &'a Positions<N>) -> Self {
        Self {
            network,
            positions,
            config: SequencerConfig::default(),
        }
    }

    /// Replaces the sequencer configuration.
    pub fn with_config(mut self, config: SequencerConfig) -> Self {
        self.config = config;
        self
    }

    /// The sequencer configuration.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Runs the algorithm named by `request`.
    ///
    /// Dijkstra and A* ignore `request.waypoints`.
    ///
    /// # Errors
    ///
    /// [`PlanError::UnknownNode`] if start or end is neither a node of the
    /// network (source or edge target) nor positioned, and
    /// [`PlanError::Config`] if a genetic request meets an invalid config.
    pub fn plan<R: Rng>(&self, request: &RouteRequest<N>, rng: &mut R) -> Result<PlannedRoute<N>, PlanError> {
        self.check_endpoints(request)?;
        let result = self.run(request.algorithm, request, rng)?;
        Ok(self.expand(result))
    }

    /// Runs Dijkstra and A* on `request`, plus the sequencer when it has
    /// waypoints. `request.algorithm` is ignored.
    pub fn compare<R: Rng>(&self, request: &RouteRequest<N>, rng: &mut R) -> Result<Comparison<N>, PlanError> {
        self.check_endpoints(request)?;

        let dijkstra = self.expand(self.run(Algorithm::Dijkstra, request, rng)?);
        let astar = self.expand(self.run(Algorithm::AStar, request, rng)?);
        let genetic = if request.waypoints.is_empty() {
            None
        } else {
            Some(self.expand(self.run(Algorithm::Genetic, request, rng)?))
        };

        log::debug!(
            "compare {} -> {} by {}: dijkstra {}, A* {}, genetic {:?}",
            request.start,
            request.end,
            request.metric,
            dijkstra.result.cost,
            astar.result.cost,
            genetic.as_ref().map(|g| g.result.cost)
        );
        Ok(Comparison {
            metric: request.metric.clone(),
            dijkstra,
            astar,
            genetic,
        })
    }

    /// Draws a random request: `num_waypoints + 2` distinct nodes, the
    /// first two being start and end.
    ///
    /// Returns `None` if the network has too few nodes.
    pub fn sample_request<R: Rng>(&self, num_waypoints: usize, rng: &mut R) -> Option<RouteRequest<N>> {
        let nodes: Vec<&N> = self.network.nodes().collect();
        let wanted = num_waypoints.checked_add(2)?;
        if nodes.len() < wanted {
            return None;
        }

        let mut picked = index::sample(rng, nodes.len(), wanted)
            .into_iter()
            .map(|i| nodes[i].clone());
        let start = picked.next()?;
        let end = picked.next()?;
        Some(RouteRequest::new(start, end).with_waypoints(picked.collect()))
    }

    fn run<R: Rng>(
        &self,
        algorithm: Algorithm,
        request: &RouteRequest<N>,
        rng: &mut R,
    ) -> Result<SearchResult<N>, PlanError> {
        let RouteRequest {
            start, end, metric, ..
        } = request;
        Ok(match algorithm {
            Algorithm::Dijkstra => shortest_path(self.network, start, end, metric),
            Algorithm::AStar => heuristic_search(self.network, start, end, self.positions, metric),
            Algorithm::Genetic => sequence_waypoints(
                self.network,
                start,
                end,
                &request.waypoints,
                metric,
                &self.config,
                rng,
            )?,
        })
    }

    fn expand(&self, result: SearchResult<N>) -> PlannedRoute<N> {
        PlannedRoute {
            coordinates: self.positions.trace(&result.path),
            result,
        }
    }

    fn check_endpoints(&self, request: &RouteRequest<N>) -> Result<(), PlanError> {
        for node in [&request.start, &request.end] {
            if !self.network.has_node(node) && self.positions.get(node).is_none() {
                return Err(PlanError::UnknownNode(node.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeWeight;
    use crate::random::create_rng;
    use crate::search::SearchError;
    use std::collections::BTreeSet;

    /// Bidirectional 3x3 grid, nodes `r * 3 + c`, positioned at `(r, c)`.
    fn grid() -> (RoadNetwork<u32>, Positions<u32>) {
        let mut net = RoadNetwork::new();
        let mut pos = Positions::new();
        for r in 0..3u32 {
            for c in 0..3u32 {
                let id = r * 3 + c;
                pos.insert(id, (f64::from(r), f64::from(c)));
                if c < 2 {
                    net.add_edge(id, id + 1, EdgeWeight::new(1.0, 2.0));
                    net.add_edge(id + 1, id, EdgeWeight::new(1.0, 2.0));
                }
                if r < 2 {
                    net.add_edge(id, id + 3, EdgeWeight::new(1.0, 2.0));
                    net.add_edge(id + 3, id, EdgeWeight::new(1.0, 2.0));
                }
            }
        }
        (net, pos)
    }

    fn small_config() -> SequencerConfig {
        SequencerConfig::default()
            .with_population_size(20)
            .with_generations(20)
    }

    #[test]
    fn test_request_defaults() {
        let req = RouteRequest::new(1, 2);
        assert_eq!(req.algorithm, Algorithm::Dijkstra);
        assert_eq!(req.metric, "distance");
        assert!(req.waypoints.is_empty());
    }

    #[test]
    fn test_plan_each_algorithm() {
        let (net, pos) = grid();
        let planner = Planner::new(&net, &pos).with_config(small_config());
        let mut rng = create_rng(4);
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Genetic] {
            let req = RouteRequest::new(0, 8)
                .with_algorithm(algorithm)
                .with_waypoints(vec![2]);
            let route = planner.plan(&req, &mut rng).unwrap();
            assert_eq!(route.result.cost, 4.0, "{algorithm}");
            assert_eq!(route.result.stats.algorithm, algorithm);
            assert_eq!(route.coordinates.len(), route.result.path.len());
            assert_eq!(route.coordinates.first().map(|c| c.node), Some(0));
            assert_eq!(route.coordinates.last().map(|c| (c.lat, c.lon)), Some((2.0, 2.0)));
        }
    }

    #[test]
    fn test_genetic_visits_waypoints() {
        let (net, pos) = grid();
        let planner = Planner::new(&net, &pos).with_config(small_config());
        let req = RouteRequest::new(0, 2)
            .with_algorithm(Algorithm::Genetic)
            .with_waypoints(vec![6, 8])
            .with_metric("time");
        let route = planner.plan(&req, &mut create_rng(6)).unwrap();
        assert!(route.result.path.contains(&6));
        assert!(route.result.path.contains(&8));
        assert_eq!(route.result.cost, 12.0);
    }

    #[test]
    fn test_unknown_endpoint() {
        let (net, pos) = grid();
        let planner = Planner::new(&net, &pos);
        let err = planner
            .plan(&RouteRequest::new(0, 42), &mut create_rng(1))
            .unwrap_err();
        assert_eq!(err, PlanError::UnknownNode("42".into()));
        assert!(planner.compare(&RouteRequest::new(42, 0), &mut create_rng(1)).is_err());
    }

    #[test]
    fn test_sink_destination_is_routable() {
        let net: RoadNetwork<&str> = [
            ("A", "B", EdgeWeight::new(1.0, 1.0)),
            ("B", "C", EdgeWeight::new(2.0, 1.0)),
        ]
        .into_iter()
        .collect();
        let pos = Positions::new();
        let planner = Planner::new(&net, &pos);
        assert!(!net.contains(&"C"));

        let route = planner.plan(&RouteRequest::new("A", "C"), &mut create_rng(1)).unwrap();
        assert_eq!(route.result.path, vec!["A", "B", "C"]);
        assert_eq!(route.result.cost, 3.0);
        assert!(route.coordinates.is_empty());

        let back = planner.plan(&RouteRequest::new("C", "A"), &mut create_rng(1)).unwrap();
        assert_eq!(back.result.stats.error, Some(SearchError::NoPathFound));
    }

    #[test]
    fn test_positioned_isolated_node_is_known() {
        let (net, mut pos) = grid();
        pos.insert(20, (5.0, 5.0));
        let planner = Planner::new(&net, &pos);
        let route = planner.plan(&RouteRequest::new(0, 20), &mut create_rng(1)).unwrap();
        assert!(!route.result.is_found());
    }

    #[test]
    fn test_invalid_config_surfaces() {
        let (net, pos) = grid();
        let planner = Planner::new(&net, &pos).with_config(small_config().with_generations(0));
        let req = RouteRequest::new(0, 8)
            .with_algorithm(Algorithm::Genetic)
            .with_waypoints(vec![4]);
        assert_eq!(
            planner.plan(&req, &mut create_rng(1)).unwrap_err(),
            PlanError::Config(ConfigError::Generations(0))
        );
    }

    #[test]
    fn test_unreachable_route_has_no_coordinates() {
        let (mut net, pos) = grid();
        net.add_node(9);
        let planner = Planner::new(&net, &pos);
        let route = planner.plan(&RouteRequest::new(0, 9), &mut create_rng(1)).unwrap();
        assert!(route.result.path.is_empty());
        assert!(route.coordinates.is_empty());
        assert_eq!(route.result.stats.error, Some(SearchError::NoPathFound));
    }

    #[test]
    fn test_compare_without_waypoints() {
        let (net, pos) = grid();
        let planner = Planner::new(&net, &pos);
        let req = RouteRequest::new(0, 8).with_metric("time");
        let cmp = planner.compare(&req, &mut create_rng(1)).unwrap();
        assert_eq!(cmp.metric, "time");
        assert_eq!(cmp.dijkstra.result.cost, 8.0);
        assert_eq!(cmp.dijkstra.result.stats.algorithm, Algorithm::Dijkstra);
        assert_eq!(cmp.astar.result.stats.algorithm, Algorithm::AStar);
        assert!(cmp.genetic.is_none());
    }

    #[test]
    fn test_compare_with_waypoints() {
        let (net, pos) = grid();
        let planner = Planner::new(&net, &pos).with_config(small_config());
        let req = RouteRequest::new(0, 8)
            .with_algorithm(Algorithm::AStar)
            .with_waypoints(vec![6]);
        let cmp = planner.compare(&req, &mut create_rng(2)).unwrap();
        let genetic = cmp.genetic.unwrap();
        assert_eq!(genetic.result.stats.algorithm, Algorithm::Genetic);
        assert_eq!(genetic.result.cost, 4.0);
        assert!(genetic.result.path.contains(&6));
        assert!(genetic.result.stats.evolution.is_some());
    }

    #[test]
    fn test_sample_request_distinct_nodes() {
        let (net, pos) = grid();
        let planner = Planner::new(&net, &pos);
        let mut rng = create_rng(3);
        for k in 0..=7 {
            let req = planner.sample_request(k, &mut rng).unwrap();
            assert_eq!(req.waypoints.len(), k);
            let mut all: BTreeSet<u32> = req.waypoints.iter().copied().collect();
            all.insert(req.start);
            all.insert(req.end);
            assert_eq!(all.len(), k + 2);
            assert!(all.iter().all(|n| net.contains(n)));
        }
    }

    #[test]
    fn test_sample_request_too_few_nodes() {
        let (net, pos) = grid();
        let planner = Planner::new(&net, &pos);
        assert!(planner.sample_request(8, &mut create_rng(1)).is_none());
        assert!(planner.sample_request(usize::MAX, &mut create_rng(1)).is_none());
    }
}
