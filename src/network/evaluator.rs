//! Network evaluation: equivalent value, combined tolerance, fitness.

use super::types::Network;

/// Constant offset of the tolerance bonus in the fitness score.
///
/// `fitness = |target - value| + TOLERANCE_OFFSET - tolerance`, so among
/// networks equally close to the target the one built from looser (cheaper)
/// parts scores better.
pub const TOLERANCE_OFFSET: f64 = 100.0;

/// Result of evaluating one network against a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phenotype {
    /// Equivalent resistance, truncated to whole Ohms.
    pub value: u64,
    /// Root-sum-of-squares of the active tolerances, truncated to whole percent.
    pub tolerance: u32,
    /// Lower is better.
    pub fitness: f64,
}

/// Evaluates `network` against `target` Ohms.
///
/// Pure: reads only the genotype. Every active resistor value must be
/// positive, which [`crate::catalog::Catalog`] guarantees.
pub fn evaluate(network: &Network, target: u32) -> Phenotype {
    let value = network
        .topology
        .equivalent_ohms(network.r1.value, network.r2.value, network.r3.value);

    let tolerance = network
        .active()
        .iter()
        .map(|r| {
            let t = r.tolerance as f64;
            t * t
        })
        .sum::<f64>()
        .sqrt() as u32;

    let distance = (target as f64 - value as f64).abs();
    let fitness = distance + TOLERANCE_OFFSET - tolerance as f64;

    Phenotype {
        value,
        tolerance,
        fitness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Resistor;
    use crate::network::Topology;

    fn network(topology: Topology, a: u32, b: u32, c: u32, tol: u32) -> Network {
        Network::new(
            Resistor::new(a, tol),
            Resistor::new(b, tol),
            Resistor::new(c, tol),
            topology,
        )
    }

    #[test]
    fn test_each_topology() {
        let cases = [
            (Topology::Serial, 320, 7),
            (Topology::Parallel, 68, 7),
            (Topology::Serial3, 650, 8),
            (Topology::Parallel3, 56, 8),
            (Topology::ParallelAndSeries, 398, 8),
            (Topology::SeriesOnParallel, 162, 8),
        ];
        for (topology, value, tolerance) in cases {
            let p = evaluate(&network(topology, 100, 220, 330, 5), 150);
            assert_eq!(p.value, value, "{topology}");
            assert_eq!(p.tolerance, tolerance, "{topology}");
            let expected = (150.0 - value as f64).abs() + 100.0 - tolerance as f64;
            assert!((p.fitness - expected).abs() < 1e-12, "{topology}");
        }
    }

    #[test]
    fn test_tolerance_uses_active_slots_only() {
        let mut n = network(Topology::Serial, 100, 100, 100, 0);
        n.r1.tolerance = 1;
        n.r2.tolerance = 2;
        n.r3.tolerance = 10;
        assert_eq!(evaluate(&n, 200).tolerance, 2); // sqrt(5)

        n.topology = Topology::Parallel3;
        assert_eq!(evaluate(&n, 200).tolerance, 10); // sqrt(105)
    }

    #[test]
    fn test_looser_parts_score_better_at_equal_distance() {
        // Intended trade-off: same accuracy, higher tolerance wins.
        let tight = evaluate(&network(Topology::Serial, 100, 100, 0, 1), 200);
        let loose = evaluate(&network(Topology::Serial, 100, 100, 0, 10), 200);
        assert_eq!(tight.value, loose.value);
        assert!(loose.fitness < tight.fitness);
        assert_eq!(loose.fitness, 100.0 - 14.0);
    }

    #[test]
    fn test_fitness_grows_with_distance() {
        let n = network(Topology::Parallel, 1000, 1000, 0, 5);
        let targets = [500, 510, 600, 1000, 5000];
        let scores: Vec<f64> = targets.iter().map(|&t| evaluate(&n, t).fitness).collect();
        for w in scores.windows(2) {
            assert!(w[0] < w[1]);
        }
        // Below the value behaves symmetrically.
        assert_eq!(evaluate(&n, 490).fitness, evaluate(&n, 510).fitness);
    }

    #[test]
    fn test_zero_tolerance_exact_match() {
        let p = evaluate(&network(Topology::Serial3, 100, 100, 100, 0), 300);
        assert_eq!(p.value, 300);
        assert_eq!(p.fitness, 100.0);
    }
}
