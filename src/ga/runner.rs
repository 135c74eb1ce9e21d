//! GA generational loop.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → evaluation → record → selection → crossover → mutation
//! → repeat, for exactly the configured number of generations.

use super::config::{ConfigError, SequencerConfig};
use super::selection::tournament;
use super::types::{GaProblem, GenerationRecord, Individual};
use crate::random::rng_from_seed;
use rand::Rng;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual seen in any generation.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// One record per generation, in order.
    pub history: Vec<GenerationRecord>,
}

/// Executes the GA loop.
///
/// Each generation evaluates the whole population, updates the global best,
/// records a [`GenerationRecord`], then breeds a full replacement
/// population: two tournament winners are combined by
/// [`GaProblem::crossover`] and the child is mutated with probability
/// `mutation_rate`. There is no elitism; the global best is tracked on the
/// side.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = SequencerConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &SequencerConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &SequencerConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;

        let size = config.population_size;
        let mut population: Vec<P::Individual> =
            (0..size).map(|_| problem.create_individual(rng)).collect();
        evaluate_population(problem, &mut population, config.parallel);

        // `validate` guarantees a non-empty population.
        let mut best = population[0].clone();
        let mut history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            for ind in &population {
                if ind.fitness() < best.fitness() {
                    best = ind.clone();
                }
            }

            let record = GenerationRecord {
                generation,
                best_fitness: best.fitness(),
                average_fitness: average_fitness(&population),
            };
            log::trace!(
                "generation {}: best {} avg {}",
                record.generation,
                record.best_fitness,
                record.average_fitness
            );
            problem.on_generation(&record);
            history.push(record);

            if generation + 1 == config.generations {
                break;
            }

            let mut next_gen: Vec<P::Individual> = Vec::with_capacity(size);
            while next_gen.len() < size {
                let parents = (
                    tournament(&population, config.tournament_size, rng),
                    tournament(&population, config.tournament_size, rng),
                );
                let (Some(p1), Some(p2)) = parents else {
                    break;
                };

                let mut child = problem.crossover(&population[p1], &population[p2], rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    problem.mutate(&mut child, rng);
                }
                next_gen.push(child);
            }
            population = next_gen;
            evaluate_population(problem, &mut population, config.parallel);
        }

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.generations,
            history,
        })
    }
}

/// Mean fitness; `+inf` if any individual is infeasible.
fn average_fitness<I: Individual>(population: &[I]) -> f64 {
    if population.is_empty() {
        return f64::INFINITY;
    }
    let total: f64 = population.iter().map(Individual::fitness).sum();
    total / population.len() as f64
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        for ind in population.iter_mut() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], _parallel: bool) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}
