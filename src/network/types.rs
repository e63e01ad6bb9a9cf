//! Resistor network genotype.

use super::evaluator::Phenotype;
use super::topology::Topology;
use crate::catalog::Resistor;
use crate::ga::{Fitness, Individual};
use std::fmt;

/// A candidate resistor network: three resistor slots, a topology, and the
/// phenotype cached by the last evaluation.
///
/// `r3` only matters for three-slot topologies. The cached fields are
/// recomputed every generation and play no part in crossover or mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Network {
    pub r1: Resistor,
    pub r2: Resistor,
    pub r3: Resistor,
    pub topology: Topology,

    /// Equivalent resistance in whole Ohms.
    pub value: u64,
    /// Combined tolerance in whole percent.
    pub tolerance: u32,
    /// Score, lower is better. [`Fitness::worst`] until evaluated.
    pub fitness: f64,
}

impl Network {
    /// Creates an unevaluated network.
    pub fn new(r1: Resistor, r2: Resistor, r3: Resistor, topology: Topology) -> Self {
        Self {
            r1,
            r2,
            r3,
            topology,
            value: 0,
            tolerance: 0,
            fitness: f64::worst(),
        }
    }

    /// The resistors wired by the topology, in slot order (2 or 3).
    pub fn active(&self) -> Vec<Resistor> {
        let mut parts = vec![self.r1, self.r2, self.r3];
        parts.truncate(self.topology.slots());
        parts
    }

    /// Mutable access to slot `index` (0, 1 or 2).
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Resistor {
        match index {
            0 => &mut self.r1,
            1 => &mut self.r2,
            _ => &mut self.r3,
        }
    }

    /// Stores an evaluation result.
    pub fn apply(&mut self, phenotype: Phenotype) {
        self.value = phenotype.value;
        self.tolerance = phenotype.tolerance;
        self.fitness = phenotype.fitness;
    }
}

impl Individual for Network {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<u32> = self.active().iter().map(|r| r.value).collect();
        let wiring = self.topology.render(&values, |v| format!("{v}Ohm"));
        write!(
            f,
            "{} => {} Ohm {}% [{:.6}]",
            wiring, self.value, self.tolerance, self.fitness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(value: u32) -> Resistor {
        Resistor::new(value, 5)
    }

    #[test]
    fn test_active_slots() {
        let n = Network::new(part(1), part(2), part(3), Topology::Parallel);
        assert_eq!(n.active(), vec![part(1), part(2)]);
        let n = Network::new(part(1), part(2), part(3), Topology::SeriesOnParallel);
        assert_eq!(n.active(), vec![part(1), part(2), part(3)]);
    }

    #[test]
    fn test_new_is_unevaluated() {
        let n = Network::new(part(1), part(2), part(3), Topology::Serial);
        assert!(n.fitness.is_infinite());
        assert_eq!(n.fitness(), f64::worst());
    }

    #[test]
    fn test_display() {
        let mut n = Network::new(part(100), part(220), part(330), Topology::Serial);
        n.apply(Phenotype {
            value: 320,
            tolerance: 7,
            fitness: 263.0,
        });
        assert_eq!(n.to_string(), "100Ohm -- 220Ohm => 320 Ohm 7% [263.000000]");

        n.topology = Topology::ParallelAndSeries;
        assert!(n.to_string().starts_with("100Ohm // 220Ohm -- 330Ohm =>"));
    }
}
