//! The resistor-network GA problem.

use super::operators;
use crate::catalog::Catalog;
use crate::ga::GaProblem;
use crate::network::{evaluate, Network, Topology};
use rand::Rng;

/// Search for a network approximating `target` Ohms using parts from
/// `catalog`.
#[derive(Debug, Clone)]
pub struct ResistorProblem {
    catalog: Catalog,
    target: u32,
}

impl ResistorProblem {
    /// Creates the problem.
    pub fn new(catalog: Catalog, target: u32) -> Self {
        Self { catalog, target }
    }

    /// The parts available to the search.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Target resistance in Ohms.
    pub fn target(&self) -> u32 {
        self.target
    }
}

impl GaProblem for ResistorProblem {
    type Individual = Network;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Network {
        let r1 = self.catalog.sample(rng);
        let r2 = self.catalog.sample(rng);
        let r3 = self.catalog.sample(rng);
        Network::new(r1, r2, r3, Topology::random(rng))
    }

    fn evaluate(&self, individual: &mut Network) {
        let phenotype = evaluate(individual, self.target);
        individual.apply(phenotype);
    }

    fn crossover<R: Rng>(&self, parent1: &Network, parent2: &Network, rng: &mut R) -> Network {
        operators::mix(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Network, rng: &mut R) {
        operators::mutate(individual, &self.catalog, rng);
    }

    fn canonicalize(&self, individual: &mut Network) {
        operators::canonicalize(individual);
    }

    fn is_duplicate(&self, previous: &Network, current: &Network) -> bool {
        operators::same_genotype(previous, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Resistor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn problem() -> ResistorProblem {
        ResistorProblem::new(Catalog::from_values(&[100, 220, 330], 5).unwrap(), 150)
    }

    #[test]
    fn test_create_individual_from_catalog() {
        let problem = problem();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let n = problem.create_individual(&mut rng);
            for part in [n.r1, n.r2, n.r3] {
                assert!(problem.catalog().parts().contains(&part));
            }
            assert!(n.fitness.is_infinite());
        }
    }

    #[test]
    fn test_evaluate_caches_phenotype() {
        let problem = problem();
        let part = |v| Resistor::new(v, 5);
        let mut n = Network::new(part(100), part(220), part(330), Topology::Serial);
        problem.evaluate(&mut n);
        assert_eq!(n.value, 320);
        assert_eq!(n.tolerance, 7);
        assert_eq!(n.fitness, 170.0 + 100.0 - 7.0);
    }

    #[test]
    fn test_duplicate_after_canonicalize() {
        let problem = problem();
        let part = |v| Resistor::new(v, 5);
        let mut a = Network::new(part(330), part(100), part(220), Topology::Parallel3);
        let mut b = Network::new(part(220), part(330), part(100), Topology::Parallel3);
        assert!(!problem.is_duplicate(&a, &b));
        problem.canonicalize(&mut a);
        problem.canonicalize(&mut b);
        assert!(problem.is_duplicate(&a, &b));
    }
}
