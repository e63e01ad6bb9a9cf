//! Brute-force result types.

use crate::network::Topology;
use std::fmt;

/// One resistor combination and its truncated equivalent value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// Wiring of `values`.
    pub topology: Topology,

    /// Component values in slot order (2 or 3 entries).
    pub values: Vec<u32>,

    /// Equivalent resistance in whole Ohms.
    pub value: u64,
}

impl Match {
    /// Absolute distance between this match and `target`.
    pub fn distance(&self, target: u32) -> u64 {
        self.value.abs_diff(u64::from(target))
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wiring = self.topology.render(&self.values, |v| format!("[ {v} ]"));
        write!(f, "{} = {} Ohm", wiring, self.value)
    }
}

/// Closest 2-resistor and 3-resistor combinations, found independently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BruteForceResult {
    /// Best series/parallel pair.
    pub best2: Match,

    /// Best triple over the four 3-resistor topologies.
    pub best3: Match,
}

impl fmt::Display for BruteForceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best result with 2 resistors: {}", self.best2)?;
        write!(f, "Best result with 3 resistors: {}", self.best3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wiring() {
        let cases = [
            (Topology::Serial, vec![100, 220], 320, "[ 100 ] -- [ 220 ] = 320 Ohm"),
            (Topology::Parallel, vec![330, 330], 165, "[ 330 ] // [ 330 ] = 165 Ohm"),
            (
                Topology::Parallel3,
                vec![1, 2, 3],
                0,
                "[ 1 ] // [ 2 ] // [ 3 ] = 0 Ohm",
            ),
            (
                Topology::ParallelAndSeries,
                vec![100, 100, 100],
                150,
                "[ 100 ] // [ 100 ] -- [ 100 ] = 150 Ohm",
            ),
            (
                Topology::SeriesOnParallel,
                vec![100, 220, 330],
                162,
                "([ 100 ] -- [ 220 ]) // [ 330 ] = 162 Ohm",
            ),
        ];
        for (topology, values, value, expected) in cases {
            let m = Match {
                topology,
                values,
                value,
            };
            assert_eq!(m.to_string(), expected);
        }
    }

    #[test]
    fn test_distance() {
        let m = Match {
            topology: Topology::Serial,
            values: vec![100, 100],
            value: 200,
        };
        assert_eq!(m.distance(150), 50);
        assert_eq!(m.distance(250), 50);
    }
}
