//! Catalog entry and catalog types.

use crate::error::Error;
use rand::Rng;
use std::fmt;

/// A purchasable resistor part.
///
/// `value` is in Ohms, `tolerance` in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Resistor {
    /// Resistance in Ohms. Always positive inside a [`Catalog`].
    pub value: u32,
    /// Manufacturing tolerance in percent.
    pub tolerance: u32,
}

impl Resistor {
    /// Creates a resistor part.
    pub fn new(value: u32, tolerance: u32) -> Self {
        Self { value, tolerance }
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Ohm ({}%)", self.value, self.tolerance)
    }
}

/// An immutable, non-empty, ascending sequence of distinct resistor parts.
///
/// # Examples
///
/// ```
/// use rpick::catalog::{Catalog, Resistor};
///
/// let catalog = Catalog::new(vec![
///     Resistor::new(330, 5),
///     Resistor::new(100, 5),
///     Resistor::new(220, 5),
/// ]).unwrap();
///
/// assert_eq!(catalog.values(), vec![100, 220, 330]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    parts: Vec<Resistor>,
}

impl Catalog {
    /// Builds a catalog, sorting by value (then tolerance) and dropping exact
    /// `(value, tolerance)` duplicates.
    ///
    /// # Errors
    /// [`Error::EmptyCatalog`] when `parts` is empty, and
    /// [`Error::InvalidResistor`] when any value is zero.
    pub fn new(mut parts: Vec<Resistor>) -> Result<Self, Error> {
        if parts.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        if let Some(zero) = parts.iter().find(|r| r.value == 0) {
            return Err(Error::InvalidResistor(zero.to_string()));
        }
        parts.sort();
        parts.dedup();
        Ok(Self { parts })
    }

    /// Builds a catalog where every part shares the same tolerance.
    pub fn from_values(values: &[u32], tolerance: u32) -> Result<Self, Error> {
        Self::new(
            values
                .iter()
                .map(|&v| Resistor::new(v, tolerance))
                .collect(),
        )
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The parts in ascending order.
    pub fn parts(&self) -> &[Resistor] {
        &self.parts
    }

    /// The part values in ascending order.
    pub fn values(&self) -> Vec<u32> {
        self.parts.iter().map(|r| r.value).collect()
    }

    /// The part at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Resistor> {
        self.parts.get(index).copied()
    }

    /// Index of the first part with the given value (linear scan).
    pub fn position_of(&self, value: u32) -> Option<usize> {
        self.parts.iter().position(|r| r.value == value)
    }

    /// Draws one part uniformly at random.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Resistor {
        self.parts[rng.random_range(0..self.parts.len())]
    }

    /// Returns a catalog neighbor of the part at `index`.
    ///
    /// The sole neighbor at either boundary, otherwise a uniform choice
    /// between left and right. `None` for a single-entry catalog or an
    /// out-of-range index.
    pub fn neighbor<R: Rng>(&self, index: usize, rng: &mut R) -> Option<Resistor> {
        let n = self.parts.len();
        if n < 2 || index >= n {
            return None;
        }
        let next = if index == 0 {
            1
        } else if index == n - 1 {
            n - 2
        } else if rng.random_bool(0.5) {
            index - 1
        } else {
            index + 1
        };
        Some(self.parts[next])
    }
}
