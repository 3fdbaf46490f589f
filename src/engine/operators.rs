//! Genetic operators on bit-string genomes.
//!
//! Both operators produce or modify freshly created offspring only; genomes
//! already in a generation are never mutated in place.
//!
//! - [`single_point_crossover`]: split both parents at one point, swap tails
//! - [`flip_mutation`]: independent per-bit flips

use crate::genome::Genome;
use rand::Rng;

/// Single-point crossover.
///
/// Picks one crossover point uniformly in `[0, len - 1)` — exclusive of the
/// last index, so the split always leaves at least one bit on each side
/// (point 0 swaps the parents wholesale). Child 1 takes `mom`'s bits before
/// the point and `dad`'s from it onward; child 2 is the complementary swap.
/// Both children have exactly the parents' length.
///
/// # Panics
///
/// Panics if the parents have different lengths or fewer than 2 bits.
pub fn single_point_crossover<R: Rng>(
    mom: &Genome,
    dad: &Genome,
    rng: &mut R,
) -> (Genome, Genome) {
    let len = mom.len();
    assert_eq!(len, dad.len(), "parents must have equal length");
    assert!(len >= 2, "parents must have at least 2 bits");

    let point = rng.random_range(0..len - 1);

    let mut child1 = Vec::with_capacity(len);
    let mut child2 = Vec::with_capacity(len);
    child1.extend_from_slice(&mom.bits()[..point]);
    child1.extend_from_slice(&dad.bits()[point..]);
    child2.extend_from_slice(&dad.bits()[..point]);
    child2.extend_from_slice(&mom.bits()[point..]);

    (Genome::from_bits(child1), Genome::from_bits(child2))
}

/// Per-bit flip mutation.
///
/// Every bit is flipped independently with probability `mutation_rate`;
/// draws are uncorrelated between bits. Rate 0 leaves the genome unchanged,
/// rate 1 flips every bit.
///
/// # Panics
///
/// Panics if `mutation_rate` is outside `[0, 1]` (the engine validates this
/// at construction).
pub fn flip_mutation<R: Rng>(genome: &mut Genome, mutation_rate: f64, rng: &mut R) {
    for bit in genome.bits_mut() {
        if rng.random_bool(mutation_rate) {
            *bit = !*bit;
        }
    }
}
