//! Genetic Algorithm engine.
//!
//! A truncation-selection GA with adaptive mutation: every generation keeps
//! the best half of the population and refills it by crossing consecutive
//! survivor pairs. Every [`GaConfig::cleanup_interval`] generations a
//! cleanup pass estimates diversity; when too many adjacent duplicates
//! appear, the mutation rate doubles until diversity recovers.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, mutation rate, budgets)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final population and best individual
//! - [`GenerationStats`]: Periodic progress snapshot
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eiben, Hinterding & Michalewicz (1999), "Parameter Control in Evolutionary Algorithms"

mod cleanup;
mod config;
mod runner;
mod types;

pub use cleanup::{cleanup, duplicate_ratio};
pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{Fitness, GaProblem, Individual};
