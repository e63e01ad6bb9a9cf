//! Exhaustive brute-force search.
//!
//! Enumerates every ordered pair and triple of catalog values (repetition
//! allowed) across the two 2-resistor and four 3-resistor topologies and
//! keeps the closest match of each size. Cost is `O(n²)` + `O(n³)` with no
//! randomness, so it doubles as a ground-truth baseline for the GA.
//!
//! Tolerances play no part here; only values are compared to the target.
//! Truncation of equivalent values is shared with [`crate::network::evaluate`].

mod runner;
mod types;
#[cfg(feature = "wasm")]
mod wasm;

pub use runner::{search, search_str};
pub use types::{BruteForceResult, Match};
#[cfg(feature = "wasm")]
pub use wasm::rpickbf;
