//! Roulette-wheel (fitness-proportional) parent selection.
//!
//! Selection probability is proportional to fitness: a uniform value is
//! drawn in `[0, total_fitness)` and individuals are scanned in index order,
//! accumulating fitness until the cumulative sum strictly exceeds the draw.

use super::types::Individual;
use rand::Rng;

/// Selects a parent index, fitness-proportionally.
///
/// `total_fitness` is the sum the caller accumulated during evaluation.
/// A non-positive total cannot occur with maze fitness (always > 0), but is
/// guarded by falling back to index 0 rather than treated as an error.
///
/// # Panics
///
/// Panics if `population` is empty.
pub(crate) fn roulette_wheel<R: Rng>(
    population: &[Individual],
    total_fitness: f64,
    rng: &mut R,
) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");

    if total_fitness <= 0.0 {
        return 0;
    }

    let slice = rng.random_range(0.0..total_fitness);
    let mut cumulative = 0.0;
    for (i, ind) in population.iter().enumerate() {
        cumulative += ind.fitness();
        if cumulative > slice {
            return i;
        }
    }

    population.len() - 1 // floating-point fallback
}
