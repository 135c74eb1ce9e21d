//! Core trait definitions and records for the GA.
//!
//! [`Individual`] and [`GaProblem`] define the contract between the
//! generational loop in [`GaRunner`](super::GaRunner) and a concrete
//! problem such as waypoint ordering.

use rand::Rng;

/// How many generation records a result exposes.
pub const GENERATION_STATS_LIMIT: usize = 10;

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness. Lower is better; `+inf` marks an
/// infeasible or not-yet-evaluated individual.
pub trait Individual: Clone + Send + Sync {
    /// Returns the current fitness.
    fn fitness(&self) -> f64;

    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to combine two parents into one child
/// 4. **Mutation**: how to perturb a child
///
/// `Send + Sync` because the runner may evaluate in parallel.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces one child from two parents.
    ///
    /// The default implementation clones `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place. The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called once per generation after evaluation.
    fn on_generation(&self, _record: &GenerationRecord) {}
}

/// A permutation of waypoints with its route fitness.
///
/// Never contains the route's start or end node.
///
/// # Examples
///
/// ```
/// use u_route_engine::ga::{Chromosome, Individual};
///
/// let c = Chromosome::new(vec!["w2", "w1"]);
/// assert_eq!(c.genes(), &["w2", "w1"]);
/// assert_eq!(c.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome<N> {
    genes: Vec<N>,
    fitness: f64,
}

impl<N> Chromosome<N> {
    /// Creates an unevaluated chromosome.
    pub fn new(genes: Vec<N>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// The visiting order.
    pub fn genes(&self) -> &[N] {
        &self.genes
    }

    /// Mutable access to the genes. Clears the stored fitness.
    pub fn genes_mut(&mut self) -> &mut [N] {
        self.fitness = f64::INFINITY;
        &mut self.genes
    }

    /// Consumes the chromosome, returning the visiting order.
    pub fn into_genes(self) -> Vec<N> {
        self.genes
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether there are no waypoints.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl<N: Clone + Send + Sync> Individual for Chromosome<N> {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best fitness seen in this or any earlier generation.
    pub best_fitness: f64,
    /// Mean fitness of this generation's population.
    pub average_fitness: f64,
}

/// Evolution statistics attached to a sequenced route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionStats {
    /// Generations run.
    pub generations: usize,
    /// Chromosomes per generation.
    pub population_size: usize,
    /// Fitness of the best chromosome ever seen.
    pub best_fitness: f64,
    /// The first [`GENERATION_STATS_LIMIT`] generation records.
    pub generation_stats: Vec<GenerationRecord>,
}
