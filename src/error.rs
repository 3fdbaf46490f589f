//! Error taxonomy.
//!
//! Only two things can go wrong in this crate, and both indicate a caller
//! bug rather than a runtime condition: invalid construction parameters and
//! decoding a genome of the wrong length. Illegal maze moves and fitness
//! ties are ordinary control flow, not errors.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the engine, codec, and maze constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid constants or maze layout at construction.
    ///
    /// Fatal: construction fails and no instance is produced.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A genome was decoded whose length does not partition into whole genes
    /// or does not match the configured chromosome length.
    ///
    /// Never silently truncated or padded.
    #[error("invalid genome length {len}, expected {expected}")]
    InvalidGenomeLength {
        /// Actual bit count of the offending genome.
        len: usize,
        /// Bit count the caller was expected to supply.
        expected: usize,
    },
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }
}
