//! Bit-string genomes and the gene ↔ direction codec.
//!
//! A genome is a fixed-length sequence of bits. Consecutive non-overlapping
//! 2-bit genes each decode to one of the four cardinal [`Direction`]s, so a
//! genome of length `2n` encodes a walk of `n` moves.
//!
//! # Key items
//!
//! - [`Genome`]: the bit sequence, never resized after creation
//! - [`Direction`]: symbolic move, bijective with gene values 0–3
//! - [`decode`] / [`encode`]: pure, deterministic conversions

mod codec;
mod types;

pub use codec::{decode, encode, Direction, GENE_LENGTH};
pub use types::Genome;
