//! Resistor catalog.
//!
//! The catalog is the fixed, ordered set of purchasable parts shared by the
//! GA engine and the brute-force search. Ordering matters: mutation steps to
//! the neighboring entry, so the catalog is kept ascending by value.

mod types;

pub use types::{Catalog, Resistor};
