//! Permutation crossover and mutation operators.
//!
//! Both operators are generic over the gene type and keep a permutation a
//! permutation: the child of two orderings of the same set is an ordering
//! of that set.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

/// Order Crossover (OX): one child from two parents.
///
/// 1. Pick two distinct cut points `lo < hi`
/// 2. Copy `parent1[lo..hi]` into the same child positions
/// 3. Walk `parent2` starting at `hi` and wrapping around, skip genes the
///    child already has, and fill the free child positions starting at
///    `hi` (wrapping to 0)
///
/// Chromosomes shorter than 2 are returned as a copy of `parent1`.
///
/// Both parents must be permutations of the same gene set; otherwise the
/// child may come out shorter than its parents.
///
/// # Complexity
/// O(n²) gene comparisons, O(n) space
///
/// # Examples
///
/// ```
/// use u_route_engine::ga::operators::ordered_crossover;
/// use u_route_engine::random::create_rng;
///
/// let mut rng = create_rng(3);
/// let mut child = ordered_crossover(&["a", "b", "c", "d"], &["d", "c", "b", "a"], &mut rng);
/// child.sort();
/// assert_eq!(child, vec!["a", "b", "c", "d"]);
/// ```
pub fn ordered_crossover<T: Clone + PartialEq, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }
    let (lo, hi) = cut_points(n, rng);
    ox_build_child(parent1, parent2, lo, hi)
}

/// Build one OX child: keep `template[lo..hi]`, fill from `donor`.
fn ox_build_child<T: Clone + PartialEq>(template: &[T], donor: &[T], lo: usize, hi: usize) -> Vec<T> {
    let n = template.len();
    let segment = &template[lo..hi];
    let mut child: Vec<Option<T>> = vec![None; n];

    for (slot, gene) in child[lo..hi].iter_mut().zip(segment) {
        *slot = Some(gene.clone());
    }

    let fill = donor
        .iter()
        .cycle()
        .skip(hi)
        .take(donor.len())
        .filter(|gene| !segment.contains(gene));
    for (pos, gene) in (hi..n).chain(0..lo).zip(fill) {
        child[pos] = Some(gene.clone());
    }

    child.into_iter().flatten().collect()
}

/// Swap mutation: exchange the values at two distinct random positions.
///
/// No-op for fewer than 2 elements.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<T, R: Rng>(genes: &mut [T], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let picks = index::sample(rng, n, 2);
    genes.swap(picks.index(0), picks.index(1));
}

/// Two distinct indices in `0..n`, returned sorted. Requires `n >= 2`.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
