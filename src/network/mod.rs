//! Resistor networks and their evaluation.
//!
//! A [`Network`] is one GA genotype: three resistor slots plus a
//! [`Topology`]. [`evaluate`] turns it into a [`Phenotype`] (equivalent
//! value, combined tolerance, fitness) for a given target.

mod evaluator;
mod topology;
mod types;

pub use evaluator::{evaluate, Phenotype, TOLERANCE_OFFSET};
pub use topology::Topology;
pub use types::Network;
