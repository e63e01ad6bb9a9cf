//! Genetic operators for resistor networks.
//!
//! # Crossover ("mix")
//!
//! - [`crossover_pool`]: distinct parts used by the parents' active slots
//! - [`child_topology`]: topology inheritance table
//! - [`mix`]: one child drawn from the pool
//!
//! # Mutation
//!
//! - [`mutate`]: step one active slot to an adjacent catalog entry
//!
//! # Cleanup
//!
//! - [`canonicalize`] / [`same_genotype`]: slot ordering and duplicate test

use crate::catalog::{Catalog, Resistor};
use crate::network::{Network, Topology};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Distinct `(value, tolerance)` parts used by either parent's active slots,
/// in order of first appearance.
pub fn crossover_pool(parent1: &Network, parent2: &Network) -> Vec<Resistor> {
    let mut pool: Vec<Resistor> = Vec::with_capacity(6);
    for part in parent1.active().into_iter().chain(parent2.active()) {
        if !pool.contains(&part) {
            pool.push(part);
        }
    }
    pool
}

/// Topology of a child given its parents' topologies.
///
/// Pure series parents stay series (three slots if either parent had three);
/// any parallel parent makes the child parallel, two-slot before three-slot.
/// Every other combination re-rolls a uniformly random topology.
pub fn child_topology<R: Rng>(a: Topology, b: Topology, rng: &mut R) -> Topology {
    use Topology::*;
    match (a, b) {
        (Serial, Serial) => Serial,
        (Serial3, Serial3) | (Serial, Serial3) | (Serial3, Serial) => Serial3,
        _ if a == Parallel || b == Parallel => Parallel,
        _ if a == Parallel3 || b == Parallel3 => Parallel3,
        _ => Topology::random(rng),
    }
}

/// Crosses two parents into one unevaluated child.
///
/// All three slots are drawn independently, with replacement, from the
/// [`crossover_pool`], whatever topology the child ends up with.
pub fn mix<R: Rng>(parent1: &Network, parent2: &Network, rng: &mut R) -> Network {
    let pool = crossover_pool(parent1, parent2);
    let mut draw = || pool[rng.random_range(0..pool.len())];
    let (r1, r2, r3) = (draw(), draw(), draw());
    let topology = child_topology(parent1.topology, parent2.topology, rng);
    Network::new(r1, r2, r3, topology)
}

// ============================================================================
// Mutation
// ============================================================================

/// Replaces one random active slot with an adjacent catalog entry.
///
/// Returns `false`, leaving the network untouched, when the slot's value is
/// not in the catalog or the catalog has a single entry.
pub fn mutate<R: Rng>(network: &mut Network, catalog: &Catalog, rng: &mut R) -> bool {
    let slot = rng.random_range(0..network.topology.slots());
    let current = network.slot_mut(slot);

    let Some(index) = catalog.position_of(current.value) else {
        return false;
    };
    match catalog.neighbor(index, rng) {
        Some(next) => {
            *current = next;
            true
        }
        None => false,
    }
}

// ============================================================================
// Cleanup
// ============================================================================

/// Orders slots so equivalent networks compare equal.
///
/// `r1`/`r2` are swapped when out of order for every topology (both
/// sub-networks built from them are symmetric). Only `Serial3` and
/// `Parallel3` sort all three slots; in the combo topologies `r3` sits in a
/// different branch and keeps its place.
pub fn canonicalize(network: &mut Network) {
    if network.r1.value > network.r2.value {
        std::mem::swap(&mut network.r1, &mut network.r2);
    }
    if matches!(network.topology, Topology::Serial3 | Topology::Parallel3) {
        let mut parts = [network.r1, network.r2, network.r3];
        parts.sort_by_key(|r| r.value);
        [network.r1, network.r2, network.r3] = parts;
    }
}

/// Whether two canonicalized networks share topology and slot values.
///
/// `r3` only counts for three-slot topologies; tolerances are ignored.
pub fn same_genotype(a: &Network, b: &Network) -> bool {
    a.topology == b.topology
        && a.r1.value == b.r1.value
        && a.r2.value == b.r2.value
        && (a.topology.slots() == 2 || a.r3.value == b.r3.value)
}
