//! Genetic ordering of mandatory waypoints.
//!
//! A chromosome is a visiting order of the waypoints. Its fitness is the
//! cost of `start -> waypoints... -> end`, where each leg costs the direct
//! edge if one exists and the Dijkstra distance otherwise. Once the loop
//! finishes, the best order is expanded leg by leg into a full node path.

use super::config::{ConfigError, SequencerConfig};
use super::operators::{ordered_crossover, swap_mutation};
use super::runner::GaRunner;
use super::types::{Chromosome, EvolutionStats, GaProblem, GENERATION_STATS_LIMIT};
use crate::graph::{NodeId, RoadNetwork};
use crate::random::shuffle;
use crate::search::{shortest_path, Algorithm, SearchError, SearchResult, SearchStats};
use rand::Rng;
use std::collections::BTreeSet;
use std::iter;
use std::time::Instant;

/// Waypoint ordering as a [`GaProblem`].
#[derive(Debug, Clone)]
pub struct WaypointProblem<'a, N: NodeId> {
    network: &'a RoadNetwork<N>,
    start: &'a N,
    end: &'a N,
    waypoints: &'a [N],
    metric: &'a str,
}

impl<'a, N: NodeId> WaypointProblem<'a, N> {
    /// Creates the problem of ordering `waypoints` between `start` and `end`.
    pub fn new(
        network: &'a RoadNetwork<N>,
        start: &'a N,
        end: &'a N,
        waypoints: &'a [N],
        metric: &'a str,
    ) -> Self {
        Self {
            network,
            start,
            end,
            waypoints,
            metric,
        }
    }

    /// Total cost of visiting `order` between start and end.
    pub fn route_cost(&self, order: &[N]) -> f64 {
        legs(self.start, order, self.end)
            .map(|(from, to)| leg_cost(self.network, from, to, self.metric))
            .sum()
    }
}

impl<N: NodeId> GaProblem for WaypointProblem<'_, N> {
    type Individual = Chromosome<N>;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome<N> {
        let mut genes = self.waypoints.to_vec();
        shuffle(&mut genes, rng);
        Chromosome::new(genes)
    }

    fn evaluate(&self, individual: &Chromosome<N>) -> f64 {
        self.route_cost(individual.genes())
    }

    fn crossover<R: Rng>(&self, parent1: &Chromosome<N>, parent2: &Chromosome<N>, rng: &mut R) -> Chromosome<N> {
        Chromosome::new(ordered_crossover(parent1.genes(), parent2.genes(), rng))
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome<N>, rng: &mut R) {
        swap_mutation(individual.genes_mut(), rng);
    }
}

/// Finds a good visiting order for `waypoints` and returns the full route.
///
/// With no waypoints this is exactly [`shortest_path`]. Otherwise the
/// genetic loop of [`GaRunner`] evolves visiting orders, and the best order
/// ever seen is expanded with one Dijkstra search per leg. Leg paths are
/// joined without repeating junction nodes. A waypoint listed more than
/// once is ordered as a single stop.
///
/// If a leg of the best order is unreachable, the path stops after the
/// last completed leg, `cost` is `+inf`, and `stats.error` names the leg.
///
/// All randomness is drawn from `rng`; `config.seed` is ignored here.
///
/// # Errors
///
/// Returns [`ConfigError`] if `config` fails validation (checked only when
/// there are waypoints to order).
///
/// # Examples
///
/// ```
/// use u_route_engine::ga::{sequence_waypoints, SequencerConfig};
/// use u_route_engine::graph::{EdgeWeight, RoadNetwork};
/// use u_route_engine::random::create_rng;
///
/// let mut net = RoadNetwork::new();
/// for i in 0u32..4 {
///     net.add_edge(i, i + 1, EdgeWeight::new(1.0, 1.0));
///     net.add_edge(i + 1, i, EdgeWeight::new(1.0, 1.0));
/// }
///
/// let config = SequencerConfig::default().with_population_size(20).with_generations(20);
/// let mut rng = create_rng(42);
/// let result = sequence_waypoints(&net, &0, &4, &[3, 1], "distance", &config, &mut rng).unwrap();
/// assert_eq!(result.path, vec![0, 1, 2, 3, 4]);
/// assert_eq!(result.cost, 4.0);
/// ```
pub fn sequence_waypoints<N: NodeId, R: Rng>(
    network: &RoadNetwork<N>,
    start: &N,
    end: &N,
    waypoints: &[N],
    metric: &str,
    config: &SequencerConfig,
    rng: &mut R,
) -> Result<SearchResult<N>, ConfigError> {
    if waypoints.is_empty() {
        return Ok(shortest_path(network, start, end, metric));
    }

    let timer = Instant::now();
    let waypoints = distinct(waypoints);
    let problem = WaypointProblem::new(network, start, end, &waypoints, metric);
    let outcome = GaRunner::run_with_rng(&problem, config, rng)?;

    let mut result = materialize(network, start, outcome.best.genes(), end, metric);
    result.stats.execution_time = timer.elapsed();
    result.stats.evolution = Some(EvolutionStats {
        generations: outcome.generations,
        population_size: config.population_size,
        best_fitness: outcome.best_fitness,
        generation_stats: outcome
            .history
            .into_iter()
            .take(GENERATION_STATS_LIMIT)
            .collect(),
    });

    log::debug!(
        "{}: {} waypoints, best fitness {} after {} generations, route cost {}",
        Algorithm::Genetic,
        waypoints.len(),
        outcome.best_fitness,
        outcome.generations,
        result.cost
    );
    Ok(result)
}

/// Drops repeated waypoints, keeping first occurrences in order.
fn distinct<N: NodeId>(waypoints: &[N]) -> Vec<N> {
    let mut seen = BTreeSet::new();
    waypoints
        .iter()
        .filter(|w| seen.insert(*w))
        .cloned()
        .collect()
}

/// Expands a visiting order into a node path with one search per leg.
fn materialize<N: NodeId>(network: &RoadNetwork<N>, start: &N, order: &[N], end: &N, metric: &str) -> SearchResult<N> {
    let mut stats = SearchStats::new(Algorithm::Genetic);
    let mut path: Vec<N> = Vec::new();
    let mut cost = 0.0;

    for (from, to) in legs(start, order, end) {
        let leg = shortest_path(network, from, to, metric);
        stats.nodes_explored += leg.stats.nodes_explored;
        if leg.path.is_empty() {
            cost = f64::INFINITY;
            stats.error = Some(SearchError::UnreachableLeg {
                from: from.to_string(),
                to: to.to_string(),
            });
            break;
        }
        let skip = usize::from(!path.is_empty());
        path.extend(leg.path.into_iter().skip(skip));
        cost += leg.cost;
    }

    SearchResult { path, cost, stats }
}

/// Cost of one leg: the direct edge when present, else Dijkstra.
///
/// A direct edge is used even when a cheaper multi-hop route exists or the
/// edge lacks the metric.
fn leg_cost<N: NodeId>(network: &RoadNetwork<N>, from: &N, to: &N, metric: &str) -> f64 {
    match network.edge(from, to) {
        Some(weight) => weight.cost(metric),
        None => shortest_path(network, from, to, metric).cost,
    }
}

/// Consecutive `(from, to)` pairs of `start, order..., end`.
fn legs<'r, N>(start: &'r N, order: &'r [N], end: &'r N) -> impl Iterator<Item = (&'r N, &'r N)> + 'r {
    let stops = iter::once(start).chain(order.iter()).chain(iter::once(end));
    stops.clone().zip(stops.skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeWeight;
    use crate::random::create_rng;

    /// Bidirectional line 0 - 1 - ... - n with unit costs.
    fn line(n: u32) -> RoadNetwork<u32> {
        let mut net = RoadNetwork::new();
        for i in 0..n {
            net.add_edge(i, i + 1, EdgeWeight::new(1.0, 2.0));
            net.add_edge(i + 1, i, EdgeWeight::new(1.0, 2.0));
        }
        net
    }

    fn config() -> SequencerConfig {
        SequencerConfig::default()
            .with_population_size(40)
            .with_generations(60)
    }

    /// Hub 0 with spokes to leaves 1..=10, unit edges both ways.
    fn star() -> RoadNetwork<u32> {
        let mut net = RoadNetwork::new();
        for leaf in 1..=10 {
            net.add_edge(0, leaf, EdgeWeight::new(1.0, 1.0));
            net.add_edge(leaf, 0, EdgeWeight::new(1.0, 1.0));
        }
        net
    }

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        assert_eq!(distinct(&[4, 1, 4, 2, 1, 9]), vec![4, 1, 2, 9]);
        assert!(distinct::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_repeated_waypoints_are_all_visited() {
        let net = star();
        let cfg = SequencerConfig::default()
            .with_population_size(30)
            .with_generations(30);
        for seed in 0..40 {
            let result = sequence_waypoints(&net, &0, &10, &[1, 1, 1, 2, 3, 4, 4, 9], "distance", &cfg, &mut create_rng(seed))
                .unwrap();
            assert!(result.is_found());
            for stop in [1, 2, 3, 4, 9] {
                assert!(result.path.contains(&stop), "seed {seed} skipped {stop}: {:?}", result.path);
            }
            // Out to the first stop, four leaf-to-leaf hops, then on to 10.
            assert_eq!(result.cost, 11.0);
        }
    }

    #[test]
    fn test_legs() {
        let pairs: Vec<_> = legs(&0, &[5, 7], &9).map(|(a, b)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(0, 5), (5, 7), (7, 9)]);
        let direct: Vec<_> = legs(&0, &[], &9).map(|(a, b)| (*a, *b)).collect();
        assert_eq!(direct, vec![(0, 9)]);
    }

    #[test]
    fn test_route_cost_falls_back_to_dijkstra() {
        let net = line(5);
        let problem = WaypointProblem::new(&net, &0, &5, &[], "distance");
        // 0 -> 3 has no direct edge: Dijkstra gives 3; 3 -> 4 direct; 4 -> 5 direct.
        assert_eq!(problem.route_cost(&[3, 4]), 5.0);
        assert_eq!(problem.route_cost(&[4, 1]), 4.0 + 3.0 + 4.0);
    }

    #[test]
    fn test_route_cost_prefers_direct_edge() {
        let net: RoadNetwork<&str> = [
            ("A", "B", EdgeWeight::new(10.0, 1.0)),
            ("A", "C", EdgeWeight::new(1.0, 1.0)),
            ("C", "B", EdgeWeight::new(1.0, 1.0)),
            ("B", "E", EdgeWeight::new(1.0, 1.0)),
        ]
        .into_iter()
        .collect();
        let problem = WaypointProblem::new(&net, &"A", &"E", &[], "distance");
        assert_eq!(problem.route_cost(&["B"]), 11.0);
        assert_eq!(shortest_path(&net, &"A", &"E", "distance").cost, 3.0);
    }

    #[test]
    fn test_route_cost_direct_edge_without_metric_is_infinite() {
        let net: RoadNetwork<u32> = [
            (1, 2, EdgeWeight::empty().with_cost("distance", 1.0)),
            (2, 3, EdgeWeight::new(1.0, 1.0)),
        ]
        .into_iter()
        .collect();
        let problem = WaypointProblem::new(&net, &1, &3, &[], "time");
        assert!(problem.route_cost(&[2]).is_infinite());
    }

    #[test]
    fn test_finds_line_order() {
        let net = line(6);
        let mut rng = create_rng(42);
        let result = sequence_waypoints(&net, &0, &6, &[4, 1, 5, 3, 2], "distance", &config(), &mut rng).unwrap();
        assert_eq!(result.path, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(result.cost, 6.0);
        assert!(result.is_found());
        assert_eq!(result.stats.algorithm, Algorithm::Genetic);
    }

    #[test]
    fn test_evolution_stats() {
        let net = line(4);
        let mut rng = create_rng(5);
        let result = sequence_waypoints(&net, &0, &4, &[3, 1], "time", &config(), &mut rng).unwrap();
        let evo = result.stats.evolution.unwrap();
        assert_eq!(evo.generations, 60);
        assert_eq!(evo.population_size, 40);
        assert_eq!(evo.generation_stats.len(), GENERATION_STATS_LIMIT);
        assert_eq!(evo.best_fitness, 8.0);
        assert_eq!(result.cost, 8.0);
        for w in evo.generation_stats.windows(2) {
            assert!(w[1].best_fitness <= w[0].best_fitness);
        }
    }

    #[test]
    fn test_few_generations_reports_all_records() {
        let net = line(3);
        let mut rng = create_rng(5);
        let cfg = config().with_generations(4);
        let result = sequence_waypoints(&net, &0, &3, &[2, 1], "distance", &cfg, &mut rng).unwrap();
        assert_eq!(result.stats.evolution.map(|e| e.generation_stats.len()), Some(4));
    }

    #[test]
    fn test_empty_waypoints_delegates() {
        let net = line(4);
        let mut rng = create_rng(1);
        let seq = sequence_waypoints(&net, &0, &4, &[], "distance", &config(), &mut rng).unwrap();
        let direct = shortest_path(&net, &0, &4, "distance");
        assert_eq!(seq.path, direct.path);
        assert_eq!(seq.cost, direct.cost);
        assert_eq!(seq.stats.algorithm, Algorithm::Dijkstra);
        assert_eq!(seq.stats.nodes_explored, direct.stats.nodes_explored);
        assert!(seq.stats.evolution.is_none());
    }

    #[test]
    fn test_empty_waypoints_skip_validation() {
        let net = line(2);
        let mut rng = create_rng(1);
        let bad = config().with_population_size(0);
        assert!(sequence_waypoints(&net, &0, &2, &[], "distance", &bad, &mut rng).is_ok());
        assert_eq!(
            sequence_waypoints(&net, &0, &2, &[1], "distance", &bad, &mut rng).err(),
            Some(ConfigError::PopulationSize(0))
        );
    }

    #[test]
    fn test_unreachable_waypoint() {
        let mut net = line(3);
        net.add_node(99);
        let mut rng = create_rng(2);
        let result = sequence_waypoints(&net, &0, &3, &[99], "distance", &config(), &mut rng).unwrap();
        assert!(result.path.is_empty());
        assert!(result.cost.is_infinite());
        assert_eq!(
            result.stats.error,
            Some(SearchError::UnreachableLeg {
                from: "0".into(),
                to: "99".into()
            })
        );
        assert!(result.stats.evolution.map(|e| e.best_fitness.is_infinite()).unwrap_or(false));
    }

    #[test]
    fn test_unreachable_end_truncates_path() {
        // 0 <-> 1 <-> 2, and 3 is only reachable from nowhere.
        let mut net = line(2);
        net.add_node(3);
        let mut rng = create_rng(2);
        let result = sequence_waypoints(&net, &0, &3, &[2], "distance", &config(), &mut rng).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert!(result.cost.is_infinite());
        assert!(matches!(result.stats.error, Some(SearchError::UnreachableLeg { .. })));
    }

    #[test]
    fn test_materialize_joins_legs() {
        let net = line(5);
        let r = materialize(&net, &0, &[2, 4], &3, "distance");
        assert_eq!(r.path, vec![0, 1, 2, 3, 4, 3]);
        assert_eq!(r.cost, 5.0);
        assert!(r.stats.error.is_none());
        assert!(r.stats.nodes_explored >= 6);
    }

    #[test]
    fn test_waypoint_equal_to_start() {
        let net = line(3);
        let r = materialize(&net, &0, &[0], &2, "distance");
        assert_eq!(r.path, vec![0, 1, 2]);
        assert_eq!(r.cost, 2.0);
    }

    #[test]
    fn test_same_rng_seed_reproducible() {
        let net = line(6);
        let wps = [5, 2, 4, 1];
        let a = sequence_waypoints(&net, &0, &6, &wps, "distance", &config(), &mut create_rng(9)).unwrap();
        let b = sequence_waypoints(&net, &0, &6, &wps, "distance", &config(), &mut create_rng(9)).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.stats.evolution.map(|e| e.generation_stats), b.stats.evolution.map(|e| e.generation_stats));
    }
}
