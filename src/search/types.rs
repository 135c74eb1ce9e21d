//! Search results, statistics, and failure markers.

use crate::ga::EvolutionStats;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// The routing algorithm that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Uniform-cost search.
    Dijkstra,
    /// Heuristic-guided search.
    AStar,
    /// Genetic waypoint sequencing.
    Genetic,
}

impl Algorithm {
    /// Human-readable name reported in [`SearchStats`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
            Algorithm::Genetic => "Genetic Algorithm",
        }
    }

    /// Short identifier accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Genetic => "genetic",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an algorithm key is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}` (expected dijkstra, astar, or genetic)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses `dijkstra`, `astar`, or `genetic` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "genetic" => Ok(Algorithm::Genetic),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Why a search produced no complete route.
///
/// Failures are reported inside [`SearchStats::error`], never raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    /// The frontier emptied before the destination was settled.
    #[error("No path found")]
    NoPathFound,

    /// A leg of a sequenced route could not be materialized. The returned
    /// path holds only the legs completed before this one.
    #[error("No path found between {from} and {to}")]
    UnreachableLeg {
        /// Leg origin.
        from: String,
        /// Leg destination.
        to: String,
    },
}

/// Execution statistics attached to every [`SearchResult`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Algorithm that produced the result.
    pub algorithm: Algorithm,

    /// Nodes settled by the search. For sequenced routes, the total over
    /// all materialized legs.
    pub nodes_explored: usize,

    /// Wall-clock time spent inside the operation.
    pub execution_time: Duration,

    /// Set when no complete route was found.
    pub error: Option<SearchError>,

    /// Evolution statistics, present only for genetic sequencing.
    pub evolution: Option<EvolutionStats>,
}

impl SearchStats {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            nodes_explored: 0,
            execution_time: Duration::ZERO,
            error: None,
            evolution: None,
        }
    }
}

/// Outcome of a routing operation.
///
/// `cost` is `+inf` exactly when `stats.error` is set. The path is empty in
/// that case too, except for a sequenced route cut short by an unreachable
/// leg, which keeps the legs completed before the failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<N> {
    /// Node sequence from start to end, inclusive.
    pub path: Vec<N>,

    /// Total cost under the requested metric.
    pub cost: f64,

    /// Execution statistics.
    pub stats: SearchStats,
}

impl<N> SearchResult<N> {
    /// Whether a complete route was found.
    pub fn is_found(&self) -> bool {
        self.stats.error.is_none()
    }

    pub(crate) fn unreachable(mut stats: SearchStats) -> Self {
        stats.error = Some(SearchError::NoPathFound);
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
            stats,
        }
    }
}
