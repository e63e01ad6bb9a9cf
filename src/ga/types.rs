//! Core trait definitions for the GA engine.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generational loop and a concrete genotype.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for unevaluated individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own cached evaluation; the engine calls
/// [`GaProblem::evaluate`] every generation to refresh it.
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the fitness cached by the last evaluation.
    fn fitness(&self) -> Self::Fitness;
}

/// Defines a GA optimization problem.
///
/// Covers:
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute and cache fitness
/// 3. **Crossover**: how two parents produce one child
/// 4. **Mutation**: how to perturb an individual
/// 5. **Cleanup**: how to canonicalize individuals and spot duplicates
///
/// `GaProblem` must be `Send + Sync` because evaluation may run in parallel
/// under the `parallel` feature.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual, caching its phenotype and fitness on it.
    ///
    /// Lower fitness values are considered better (minimization).
    fn evaluate(&self, individual: &mut Self::Individual);

    /// Produces one child from two parents.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Rewrites an individual into a canonical form without changing its
    /// fitness, so equivalent genotypes compare equal.
    ///
    /// The default implementation is a no-op.
    fn canonicalize(&self, _individual: &mut Self::Individual) {}

    /// Whether `current` duplicates `previous` (both canonicalized).
    ///
    /// The default implementation never reports duplicates.
    fn is_duplicate(&self, _previous: &Self::Individual, _current: &Self::Individual) -> bool {
        false
    }
}
