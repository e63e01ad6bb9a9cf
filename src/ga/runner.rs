//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! evaluate → sort → checkpoint → keep best half → crossover/mutate → repeat,
//! with a cleanup / adaptive mutation-rate pass every
//! [`GaConfig::cleanup_interval`] generations.

use super::cleanup::{cleanup, duplicate_ratio};
use super::config::GaConfig;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Progress snapshot emitted every [`GaConfig::cleanup_interval`] generations.
#[derive(Debug, Clone)]
pub struct GenerationStats<I: Individual> {
    /// Generation counter (starts at 1).
    pub generation: usize,

    /// Adjacent duplicates found by the cleanup pass.
    pub duplicates: usize,

    /// `duplicates / population_size * 100`.
    pub duplicate_ratio: f64,

    /// Mutation rate (percent) in effect from the next generation on.
    pub mutation_rate: u32,

    /// Current best individual (index 0 of the sorted population).
    pub best: I,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Final population, evaluated and sorted ascending by fitness.
    pub population: Vec<I>,

    /// Number of completed generation steps.
    pub generations: usize,

    /// Duplicate ratio of the final population.
    pub duplicate_ratio: f64,

    /// Effective mutation rate when the run stopped.
    pub mutation_rate: u32,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness at every cleanup interval.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = ResistorProblem::new(catalog, 4_700);
/// let config = GaConfig::default().with_seed(42).with_max_generations(500);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best: {}", result.best);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA until its generation or time budget is exhausted.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] if the configuration is invalid or sets no
    /// budget at all (the run could never stop).
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, Error> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is polled once per generation, right after sorting; once it
    /// reads `true` the loop stops without breeding that generation.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, Error> {
        Self::run_with_progress(problem, config, cancel, |_| {})
    }

    /// Runs the GA, calling `on_progress` after every cleanup pass.
    pub fn run_with_progress<P, F>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_progress: F,
    ) -> Result<GaResult<P::Individual>, Error>
    where
        P: GaProblem,
        F: FnMut(&GenerationStats<P::Individual>),
    {
        config.validate()?;
        if cancel.is_none() && config.max_generations.is_none() && config.time_limit_ms.is_none()
        {
            return Err(Error::InvalidConfig(
                "run is unbounded: set max_generations or time_limit_ms, or pass a cancellation flag"
                    .into(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        let population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        Ok(evolve(
            problem,
            config,
            population,
            &mut rng,
            cancel.as_deref(),
            &mut on_progress,
        ))
    }
}

/// The generational loop over an initial `population`.
fn evolve<P, R, F>(
    problem: &P,
    config: &GaConfig,
    mut population: Vec<P::Individual>,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
    on_progress: &mut F,
) -> GaResult<P::Individual>
where
    P: GaProblem,
    R: Rng,
    F: FnMut(&GenerationStats<P::Individual>),
{
    let start = Instant::now();
    let survivors = config.population_size / 2;
    let mut mutation_rate = config.mutation_rate;
    let mut fitness_history = Vec::new();
    let mut generation = 1usize;
    let mut cancelled = false;

    loop {
        evaluate_population(problem, &mut population, config.parallel);
        sort_population(&mut population);

        // Checkpoint
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }
        if config.max_generations.is_some_and(|max| generation > max) {
            break;
        }
        if config
            .time_limit_ms
            .is_some_and(|ms| start.elapsed().as_millis() >= u128::from(ms))
        {
            break;
        }

        // Select
        population.truncate(survivors);

        // Crossover over consecutive survivor pairs, cycling until full
        let mut pair = 0usize;
        while population.len() < config.population_size {
            let i = (2 * pair) % survivors;
            let j = (2 * pair + 1) % survivors;
            let mut child = problem.crossover(&population[i], &population[j], rng);
            if rng.random_range(0..100u32) < mutation_rate {
                problem.mutate(&mut child, rng);
            }
            population.push(child);
            pair += 1;
        }

        // Cleanup and adaptive mutation rate
        if generation % config.cleanup_interval == 0 {
            let duplicates = cleanup(problem, &mut population);
            let ratio = duplicate_ratio(duplicates, population.len());
            let next_rate = if ratio > config.duplicate_threshold {
                config.mutation_rate * 2
            } else {
                config.mutation_rate
            };
            if next_rate != mutation_rate {
                tracing::debug!(
                    generation,
                    ratio,
                    from = mutation_rate,
                    to = next_rate,
                    "mutation rate adjusted"
                );
            }
            mutation_rate = next_rate;

            let best_fitness = population[0].fitness().to_f64();
            fitness_history.push(best_fitness);
            tracing::debug!(generation, duplicate_ratio = ratio, best_fitness, "generation");

            on_progress(&GenerationStats {
                generation,
                duplicates,
                duplicate_ratio: ratio,
                mutation_rate,
                best: population[0].clone(),
            });
        }

        generation += 1;
    }

    let duplicates = cleanup(problem, &mut population);
    let ratio = duplicate_ratio(duplicates, population.len());
    let best = population[0].clone();
    tracing::debug!(
        generations = generation - 1,
        cancelled,
        duplicate_ratio = ratio,
        best_fitness = best.fitness().to_f64(),
        "evolution stopped"
    );

    GaResult {
        best_fitness: best.fitness(),
        best,
        population,
        generations: generation - 1,
        duplicate_ratio: ratio,
        mutation_rate,
        cancelled,
        fitness_history,
    }
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            population
                .par_iter_mut()
                .for_each(|ind| problem.evaluate(ind));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        problem.evaluate(ind);
    }
}

/// Sort ascending by fitness: index 0 is the best.
fn sort_population<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

// ============================================================================
// Tests
// ============================================================================
