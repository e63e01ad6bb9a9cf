//! Wiring topologies.
//!
//! ```text
//! Serial             --[ r1 ]--[ r2 ]--
//! Parallel           --[ r1 ]--
//!                    --[ r2 ]--
//! Serial3            --[ r1 ]--[ r2 ]--[ r3 ]--
//! Parallel3          r1 // r2 // r3
//! ParallelAndSeries  (r1 // r2) -- r3
//! SeriesOnParallel   (r1 -- r2) // r3
//! ```

use rand::Rng;
use std::fmt;

/// How the resistor slots of a network are wired together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// `r1 + r2`
    Serial,
    /// `1 / (1/r1 + 1/r2)`
    Parallel,
    /// `r1 + r2 + r3`
    Serial3,
    /// `1 / (1/r1 + 1/r2 + 1/r3)`
    Parallel3,
    /// `1 / (1/r1 + 1/r2) + r3`
    ParallelAndSeries,
    /// `1 / (1/(r1 + r2) + 1/r3)`
    SeriesOnParallel,
}

impl Topology {
    /// Every topology, in declaration order.
    pub const ALL: [Topology; 6] = [
        Topology::Serial,
        Topology::Parallel,
        Topology::Serial3,
        Topology::Parallel3,
        Topology::ParallelAndSeries,
        Topology::SeriesOnParallel,
    ];

    /// The two-resistor topologies, in brute-force enumeration order.
    pub const TWO_SLOT: [Topology; 2] = [Topology::Serial, Topology::Parallel];

    /// The three-resistor topologies, in brute-force enumeration order.
    pub const THREE_SLOT: [Topology; 4] = [
        Topology::Serial3,
        Topology::Parallel3,
        Topology::ParallelAndSeries,
        Topology::SeriesOnParallel,
    ];

    /// Draws a topology uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Number of active resistor slots (2 or 3).
    pub fn slots(self) -> usize {
        match self {
            Topology::Serial | Topology::Parallel => 2,
            _ => 3,
        }
    }

    /// Equivalent resistance in Ohms, before truncation.
    ///
    /// `c` is ignored by two-slot topologies. All values must be positive.
    pub fn equivalent(self, a: f64, b: f64, c: f64) -> f64 {
        match self {
            Topology::Serial => a + b,
            Topology::Parallel => 1.0 / (1.0 / a + 1.0 / b),
            Topology::Serial3 => a + b + c,
            Topology::Parallel3 => 1.0 / (1.0 / a + 1.0 / b + 1.0 / c),
            Topology::ParallelAndSeries => 1.0 / (1.0 / a + 1.0 / b) + c,
            Topology::SeriesOnParallel => 1.0 / (1.0 / (a + b) + 1.0 / c),
        }
    }

    /// Equivalent resistance truncated to whole Ohms.
    pub fn equivalent_ohms(self, a: u32, b: u32, c: u32) -> u64 {
        self.equivalent(a as f64, b as f64, c as f64) as u64
    }

    /// Formats `values` with this topology's wiring symbols.
    ///
    /// `item` renders a single resistor value, e.g. `|v| format!("{v}Ohm")`.
    pub(crate) fn render(self, values: &[u32], item: impl Fn(u32) -> String) -> String {
        let v = |i: usize| values.get(i).map(|&x| item(x)).unwrap_or_default();
        match self {
            Topology::Serial => format!("{} -- {}", v(0), v(1)),
            Topology::Parallel => format!("{} // {}", v(0), v(1)),
            Topology::Serial3 => format!("{} -- {} -- {}", v(0), v(1), v(2)),
            Topology::Parallel3 => format!("{} // {} // {}", v(0), v(1), v(2)),
            Topology::ParallelAndSeries => format!("{} // {} -- {}", v(0), v(1), v(2)),
            Topology::SeriesOnParallel => format!("({} -- {}) // {}", v(0), v(1), v(2)),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topology::Serial => "serial",
            Topology::Parallel => "parallel",
            Topology::Serial3 => "serial3",
            Topology::Parallel3 => "parallel3",
            Topology::ParallelAndSeries => "parallel-and-series",
            Topology::SeriesOnParallel => "series-on-parallel",
        };
        f.write_str(name)
    }
}
