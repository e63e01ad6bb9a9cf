//! Resistor-network search as a GA problem.
//!
//! [`ResistorProblem`] plugs the resistor domain into the generic
//! [`crate::ga`] engine:
//!
//! - individuals are [`crate::network::Network`]s sampled uniformly from the
//!   catalog with a random topology
//! - crossover mixes the parents' parts ([`operators::mix`])
//! - mutation moves one part to a catalog neighbor ([`operators::mutate`])
//! - cleanup orders slots and flags adjacent duplicates

pub mod operators;
mod types;

pub use types::ResistorProblem;
