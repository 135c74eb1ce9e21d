//! Genetic waypoint sequencing.
//!
//! Decides the order in which mandatory intermediate stops are visited.
//! The search space is the set of permutations of the waypoints; each
//! candidate is scored by the cost of the full route it implies.
//!
//! # Core Traits
//!
//! - [`Individual`]: a candidate solution carrying its fitness
//! - [`GaProblem`]: initialization, evaluation, crossover, mutation
//!
//! # Key Types
//!
//! - [`SequencerConfig`]: population size, generations, mutation rate
//! - [`GaRunner`]: executes the generational loop
//! - [`WaypointProblem`]: waypoint ordering as a [`GaProblem`]
//! - [`sequence_waypoints`]: evolve an order and stitch the full route
//!
//! # Submodules
//!
//! - [`operators`]: ordered crossover (OX) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Potvin (1996), "Genetic algorithms for the traveling salesman problem"

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;
mod waypoints;

pub use config::{ConfigError, SequencerConfig};
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::{
    Chromosome, EvolutionStats, GaProblem, GenerationRecord, Individual, GENERATION_STATS_LIMIT,
};
pub use waypoints::{sequence_waypoints, WaypointProblem};
