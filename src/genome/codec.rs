//! Gene ↔ direction conversion.
//!
//! Each gene is [`GENE_LENGTH`] consecutive bits, read least-significant bit
//! first: bit 0 contributes weight 1, bit 1 contributes weight 2. The
//! resulting value 0–3 maps directly to a [`Direction`] ordinal. Two bits
//! yield exactly four combinations, so every gene value is a valid
//! direction — widening the gene without widening the direction set would
//! break this bijection, which is why the gene width is a crate constant
//! rather than free configuration.

use super::types::Genome;
use crate::error::{Error, Result};

/// Bits per gene. Fixed: 2 bits enumerate exactly the four directions.
pub const GENE_LENGTH: usize = 2;

/// A cardinal move on the grid.
///
/// Ordinals 0–3 match the gene values they decode from: North=0, South=1,
/// East=2, West=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards higher `y`.
    North,
    /// Towards lower `y`.
    South,
    /// Towards higher `x`.
    East,
    /// Towards lower `x`.
    West,
}

/// All directions in gene-value order.
const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    /// The gene value this direction decodes from.
    pub fn ordinal(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

/// Decodes a genome into its direction sequence.
///
/// Partitions the genome into consecutive non-overlapping genes and converts
/// each via LSB-first positional weighting. Pure and deterministic.
///
/// # Errors
///
/// [`Error::InvalidGenomeLength`] if the genome length is not a multiple of
/// [`GENE_LENGTH`]. Population invariants make this unreachable for engine
/// -owned genomes, but the codec is public and checks defensively.
pub fn decode(genome: &Genome) -> Result<Vec<Direction>> {
    let len = genome.len();
    if len % GENE_LENGTH != 0 {
        return Err(Error::InvalidGenomeLength {
            len,
            expected: len - len % GENE_LENGTH,
        });
    }

    let directions = genome
        .bits()
        .chunks_exact(GENE_LENGTH)
        .map(|gene| {
            let value = gene
                .iter()
                .enumerate()
                .fold(0usize, |acc, (i, &bit)| acc + ((bit as usize) << i));
            // value < 4 because a gene is exactly 2 bits
            DIRECTIONS[value]
        })
        .collect();

    Ok(directions)
}

/// Encodes a direction sequence into the genome that decodes back to it.
///
/// Inverse of [`decode`]: each direction becomes its ordinal's 2-bit pattern,
/// least-significant bit first.
pub fn encode(directions: &[Direction]) -> Genome {
    let mut bits = Vec::with_capacity(directions.len() * GENE_LENGTH);
    for dir in directions {
        let value = dir.ordinal();
        bits.push(value & 1 != 0);
        bits.push(value & 2 != 0);
    }
    Genome::from_bits(bits)
}
