//! The genome representation.

use rand::Rng;

/// A fixed-length sequence of bits encoding a candidate walk.
///
/// The length is fixed at creation and is never resized; every genome in a
/// population shares the same length across all generations. Genetic
/// operators build new genomes rather than growing or shrinking existing
/// ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Creates a genome from raw bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a genome of `len` independently uniform random bits.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let bits = (0..len).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the genome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, ordered; genes are consecutive non-overlapping chunks.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable access for in-place bit flips on freshly created offspring.
    pub(crate) fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }
}
