//! Resistor network picker.
//!
//! Finds a combination of catalog resistors whose series/parallel
//! equivalent best approximates a target resistance:
//!
//! - **Genetic Algorithm ([`ga`] + [`problem`])**: anytime search over
//!   2- and 3-resistor networks in six topologies, with neighbor mutation
//!   and a mutation rate that adapts to population diversity. Runs until
//!   cancelled or out of budget.
//! - **Brute force ([`brute_force`])**: exhaustive, deterministic
//!   enumeration of every pair and triple; the ground-truth baseline.
//!
//! # Architecture
//!
//! [`catalog`] holds the parts shared by both engines. [`network`] defines
//! the genotype and its evaluation. The GA engine in [`ga`] is generic over
//! [`ga::GaProblem`]; [`problem::ResistorProblem`] is the resistor domain
//! plugged into it. The two engines never interact.
//!
//! # Example
//!
//! ```
//! use rpick::catalog::Catalog;
//! use rpick::ga::{GaConfig, GaRunner};
//! use rpick::problem::ResistorProblem;
//!
//! let catalog = Catalog::from_values(&[100, 220, 330, 470, 680, 1000], 5).unwrap();
//! let problem = ResistorProblem::new(catalog, 560);
//! let config = GaConfig::default().with_max_generations(200).with_seed(42);
//!
//! let result = GaRunner::run(&problem, &config).unwrap();
//! println!("{}", result.best);
//! ```

pub mod brute_force;
pub mod catalog;
#[cfg(feature = "serde")]
pub mod config;
mod error;
pub mod ga;
pub mod network;
pub mod problem;

pub use error::Error;
