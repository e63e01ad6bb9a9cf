//! Exhaustive enumeration of 2- and 3-resistor combinations.

use super::types::{BruteForceResult, Match};
use crate::error::Error;
use crate::network::Topology;

/// Running best for one pass. Strict `<` keeps the first candidate found at
/// a given distance.
struct Best {
    target: u32,
    best: Option<Match>,
}

impl Best {
    fn new(target: u32) -> Self {
        Self { target, best: None }
    }

    fn offer(&mut self, topology: Topology, values: &[u32]) {
        let c = values.get(2).copied().unwrap_or(0);
        let candidate = Match {
            topology,
            values: values.to_vec(),
            value: topology.equivalent_ohms(values[0], values[1], c),
        };
        let distance = candidate.distance(self.target);
        if self
            .best
            .as_ref()
            .is_none_or(|best| distance < best.distance(self.target))
        {
            self.best = Some(candidate);
        }
    }

    fn into_match(self) -> Option<Match> {
        self.best
    }
}

/// Finds the combinations of `values` closest to `target`.
///
/// Deterministic: pairs are enumerated `a` outer, `b` inner, series before
/// parallel; triples `a`, `b`, `c` outer to inner with the topologies in
/// [`Topology::THREE_SLOT`] order. Repeated parts are allowed.
///
/// # Errors
/// [`Error::EmptyCatalog`] when `values` is empty, and
/// [`Error::InvalidResistor`] when any value is zero.
///
/// # Examples
///
/// ```
/// let result = rpick::brute_force::search(150, &[100, 220, 330]).unwrap();
/// assert_eq!(result.best2.to_string(), "[ 330 ] // [ 330 ] = 165 Ohm");
/// assert_eq!(result.best3.value, 150);
/// ```
pub fn search(target: u32, values: &[u32]) -> Result<BruteForceResult, Error> {
    if values.is_empty() {
        return Err(Error::EmptyCatalog);
    }
    if values.contains(&0) {
        return Err(Error::InvalidResistor("0".into()));
    }

    let mut best2 = Best::new(target);
    for &a in values {
        for &b in values {
            for topology in Topology::TWO_SLOT {
                best2.offer(topology, &[a, b]);
            }
        }
    }

    let mut best3 = Best::new(target);
    for &a in values {
        for &b in values {
            for &c in values {
                for topology in Topology::THREE_SLOT {
                    best3.offer(topology, &[a, b, c]);
                }
            }
        }
    }

    match (best2.into_match(), best3.into_match()) {
        (Some(best2), Some(best3)) => Ok(BruteForceResult { best2, best3 }),
        _ => Err(Error::EmptyCatalog),
    }
}

/// Parses a textual request and runs [`search`].
///
/// Entry point for callers that hand over raw strings (a web form, another
/// process). Surrounding whitespace is ignored.
///
/// # Errors
/// [`Error::InvalidTarget`] when `target` is not a positive integer,
/// [`Error::InvalidResistor`] naming the first entry that is not.
pub fn search_str<S: AsRef<str>>(target: &str, values: &[S]) -> Result<BruteForceResult, Error> {
    let target = parse_positive(target).ok_or_else(|| Error::InvalidTarget(target.to_string()))?;
    let values = values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            parse_positive(v).ok_or_else(|| Error::InvalidResistor(v.to_string()))
        })
        .collect::<Result<Vec<u32>, Error>>()?;
    search(target, &values)
}

fn parse_positive(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&v| v > 0)
}
