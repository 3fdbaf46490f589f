//! Population data model.

use crate::genome::Genome;

/// One genome paired with its cached fitness.
///
/// Fitness starts at 0 and is written by the engine during evaluation; it is
/// never carried across generations — every generation is a fresh set of
/// individuals whose fitness is recomputed from scratch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genome: Genome,
    fitness: f64,
}

impl Individual {
    pub(crate) fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: 0.0,
        }
    }

    /// The individual's genome.
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Evaluated fitness in `(0, 1]`, or 0.0 if not yet evaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_individual_is_unevaluated() {
        let ind = Individual::new(Genome::from_bits(vec![true, false]));
        assert_eq!(ind.fitness(), 0.0);
        assert_eq!(ind.genome().len(), 2);
    }

    #[test]
    fn test_set_fitness() {
        let mut ind = Individual::new(Genome::from_bits(vec![true, false]));
        ind.set_fitness(0.25);
        assert_eq!(ind.fitness(), 0.25);
    }
}
