//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::seq::index;
use rand::Rng;

/// Tournament selection: draw `size` distinct individuals uniformly at
/// random and return the index of the fittest (lowest fitness).
///
/// The tournament shrinks to the population size when the population is
/// smaller than `size`. Ties go to the contestant drawn first. Returns
/// `None` only for an empty population.
///
/// # Complexity
/// O(size) per selection
pub fn tournament<I: Individual, R: Rng>(population: &[I], size: usize, rng: &mut R) -> Option<usize> {
    let n = population.len();
    if n == 0 {
        return None;
    }
    let k = size.clamp(1, n);

    let mut winner: Option<usize> = None;
    for idx in index::sample(rng, n, k) {
        let better = match winner {
            Some(w) => population[idx].fitness() < population[w].fitness(),
            None => true,
        };
        if better {
            winner = Some(idx);
        }
    }
    winner
}
