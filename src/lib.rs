//! Route optimization over weighted road networks.
//!
//! Finds minimum-cost paths between intersections of a directed road
//! network and orders mandatory intermediate stops:
//!
//! - **Dijkstra**: exact uniform-cost search ([`search::shortest_path`])
//! - **A\***: search guided by a planar coordinate heuristic
//!   ([`search::heuristic_search`])
//! - **Genetic sequencing**: evolves a visiting order for waypoints and
//!   stitches per-leg shortest paths into one route
//!   ([`ga::sequence_waypoints`])
//!
//! Costs are named metrics on each edge (`distance` in kilometers, `time`
//! in minutes). Networks come from a [`provider::GraphProvider`], either a
//! seeded synthetic city or a JSON map export, and are only borrowed by the
//! search code. [`planner::Planner`] ties the pieces together per request.
//!
//! # Features
//!
//! - `serde`: serialization of public data types and the JSON provider
//! - `parallel`: rayon-parallel fitness evaluation in the sequencer

pub mod ga;
pub mod graph;
pub mod planner;
pub mod provider;
pub mod random;
pub mod search;
