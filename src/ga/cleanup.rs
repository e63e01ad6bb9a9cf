//! Population cleanup and diversity estimate.
//!
//! Cleanup canonicalizes every individual and then counts duplicates by
//! comparing each individual with its immediate predecessor. On a
//! fitness-sorted population identical genotypes tend to be adjacent, so the
//! count is a cheap O(n) diversity estimate. Non-adjacent duplicates are not
//! counted; the adaptive mutation threshold is calibrated against this
//! undercount.

use super::types::GaProblem;

/// Canonicalizes `population` in place and returns the number of
/// individuals that duplicate their immediate predecessor.
pub fn cleanup<P: GaProblem>(problem: &P, population: &mut [P::Individual]) -> usize {
    for individual in population.iter_mut() {
        problem.canonicalize(individual);
    }
    population
        .windows(2)
        .filter(|w| problem.is_duplicate(&w[0], &w[1]))
        .count()
}

/// Duplicate count as a percentage of the population size.
pub fn duplicate_ratio(duplicates: usize, population_size: usize) -> f64 {
    if population_size == 0 {
        return 0.0;
    }
    duplicates as f64 / population_size as f64 * 100.0
}
