//! Engine configuration.
//!
//! [`EngineConfig`] holds the tunable constants of the evolutionary loop.

use crate::error::{Error, Result};
use crate::genome::GENE_LENGTH;

/// Configuration for the population engine.
///
/// # Defaults
///
/// ```
/// use maze_ga::engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.chromosome_length, 70);
/// assert_eq!(config.population_size, 140);
/// ```
///
/// # Builder pattern
///
/// ```
/// use maze_ga::engine::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.005)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Bits per gene.
    ///
    /// Must equal [`GENE_LENGTH`]: the 2-bit gene enumerates exactly the
    /// four directions, and that coupling is validated rather than assumed.
    pub gene_length: usize,

    /// Bits per genome. Must be a positive multiple of `gene_length`;
    /// a genome of `2n` bits encodes `n` moves.
    pub chromosome_length: usize,

    /// Number of individuals per generation. Constant across the run.
    pub population_size: usize,

    /// Per-bit probability of flipping during mutation, in `[0, 1]`.
    pub mutation_rate: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gene_length: GENE_LENGTH,
            chromosome_length: 70,
            population_size: 140,
            mutation_rate: 0.001,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, bits: usize) -> Self {
        self.chromosome_length = bits;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.gene_length != GENE_LENGTH {
            return Err(Error::config(format!(
                "gene_length must be {GENE_LENGTH}: a gene enumerates the four directions"
            )));
        }
        if self.population_size == 0 {
            return Err(Error::config("population_size must be positive"));
        }
        if self.chromosome_length == 0 {
            return Err(Error::config("chromosome_length must be positive"));
        }
        if self.chromosome_length % self.gene_length != 0 {
            return Err(Error::config(format!(
                "chromosome_length {} is not a multiple of gene_length {}",
                self.chromosome_length, self.gene_length
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) || self.mutation_rate.is_nan() {
            return Err(Error::config(format!(
                "mutation_rate {} is outside [0, 1]",
                self.mutation_rate
            )));
        }
        Ok(())
    }

    /// Number of moves one genome encodes.
    pub fn moves_per_genome(&self) -> usize {
        self.chromosome_length / self.gene_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.gene_length, 2);
        assert_eq!(config.chromosome_length, 70);
        assert_eq!(config.population_size, 140);
        assert!((config.mutation_rate - 0.001).abs() < 1e-15);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.moves_per_genome(), 35);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_chromosome_length(40)
            .with_population_size(60)
            .with_mutation_rate(0.01)
            .with_seed(42);

        assert_eq!(config.chromosome_length, 40);
        assert_eq!(config.population_size, 60);
        assert!((config.mutation_rate - 0.01).abs() < 1e-15);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = EngineConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_chromosome() {
        let config = EngineConfig::default().with_chromosome_length(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_indivisible_chromosome() {
        let config = EngineConfig::default().with_chromosome_length(71);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_gene_length_coupling() {
        let config = EngineConfig {
            gene_length: 3,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        assert!(EngineConfig::default()
            .with_mutation_rate(-0.1)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_mutation_rate(1.5)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
        // Both endpoints are legal: 0 never flips, 1 always flips.
        assert!(EngineConfig::default()
            .with_mutation_rate(0.0)
            .validate()
            .is_ok());
        assert!(EngineConfig::default()
            .with_mutation_rate(1.0)
            .validate()
            .is_ok());
    }
}
