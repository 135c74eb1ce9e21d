//! Point-to-point shortest-path search.
//!
//! Two algorithms over a borrowed [`RoadNetwork`](crate::graph::RoadNetwork):
//!
//! - [`shortest_path`]: uniform-cost search (Dijkstra). Exact for
//!   non-negative costs.
//! - [`heuristic_search`]: A* with a planar straight-line heuristic. See its
//!   docs for the unit-mismatch caveat.
//!
//! Both are pure functions of their inputs and report failure as data in
//! [`SearchResult`] rather than through `Result`.
//!
//! # References
//!
//! - Dijkstra (1959), "A note on two problems in connexion with graphs"
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"

mod astar;
mod dijkstra;
mod frontier;
mod types;

pub use astar::heuristic_search;
pub use dijkstra::shortest_path;
pub use types::{Algorithm, SearchError, SearchResult, SearchStats, UnknownAlgorithm};
