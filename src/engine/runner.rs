//! The generational state machine.
//!
//! One [`Engine::step`] call is one complete generation: evaluate, detect
//! convergence, breed a full replacement population. The host controls the
//! cadence — there is no internal loop, batching, or cancellation.

use super::config::EngineConfig;
use super::operators::{flip_mutation, single_point_crossover};
use super::selection::roulette_wheel;
use super::types::Individual;
use crate::error::{Error, Result};
use crate::genome::{self, Direction, Genome};
use crate::maze::{Maze, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fitness of a route ending exactly on the goal.
const MAX_FITNESS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Uninitialized,
    Running,
    Converged,
}

/// The population engine.
///
/// Owns the maze (dependency-injected, never ambient state), one long-lived
/// random source for every random decision across the run, and the current
/// and previous generation buffers. Single-threaded and synchronous:
/// [`step`](Engine::step) runs one generation to completion before
/// returning.
///
/// # Lifecycle
///
/// `Uninitialized → Running → Converged`. [`run`](Engine::run) creates a
/// fresh random population and starts the run; each [`step`](Engine::step)
/// replaces the population with offspring until some individual's route
/// ends exactly on the goal, after which the engine freezes — fitness and
/// the best individual remain inspectable, but stepping is a no-op.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    maze: Maze,
    rng: StdRng,
    state: State,
    generation: usize,
    population: Vec<Individual>,
    previous: Vec<Individual>,
    total_fitness: f64,
    best: Option<Individual>,
}

impl Engine {
    /// Creates an engine over `maze` with the given constants.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the configuration is invalid; no engine
    /// instance is produced.
    pub fn new(maze: Maze, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Self {
            config,
            maze,
            rng,
            state: State::Uninitialized,
            generation: 0,
            population: Vec::new(),
            previous: Vec::new(),
            total_fitness: 0.0,
            best: None,
        })
    }

    /// Initializes a fresh random population and begins the run.
    ///
    /// Calling `run` on an already running or converged engine restarts it
    /// from generation 0 with new random genomes.
    pub fn run(&mut self) {
        self.population = (0..self.config.population_size)
            .map(|_| Individual::new(Genome::random(self.config.chromosome_length, &mut self.rng)))
            .collect();
        self.previous.clear();
        self.generation = 0;
        self.total_fitness = 0.0;
        self.best = None;
        self.state = State::Running;
        log::debug!(
            "initialized population of {} genomes of {} bits",
            self.config.population_size,
            self.config.chromosome_length
        );
    }

    /// Advances one generation.
    ///
    /// No-op unless running. Evaluates every individual, freezes the engine
    /// if the best route ends exactly on the goal, and otherwise breeds a
    /// complete replacement population: roulette-wheel parents, single-point
    /// crossover into two children, independent per-bit mutation of each.
    /// The outgoing generation stays inspectable via
    /// [`last_generation`](Engine::last_generation).
    pub fn step(&mut self) {
        if self.state != State::Running {
            return;
        }

        let best_fitness = self.evaluate();
        if best_fitness >= MAX_FITNESS {
            log::info!("goal reached at generation {}", self.generation);
            self.state = State::Converged;
            return;
        }

        let size = self.config.population_size;
        let mut offspring = Vec::with_capacity(size + 1);
        while offspring.len() < size {
            let mom = roulette_wheel(&self.population, self.total_fitness, &mut self.rng);
            let dad = roulette_wheel(&self.population, self.total_fitness, &mut self.rng);
            let (mut child1, mut child2) = single_point_crossover(
                self.population[mom].genome(),
                self.population[dad].genome(),
                &mut self.rng,
            );
            flip_mutation(&mut child1, self.config.mutation_rate, &mut self.rng);
            flip_mutation(&mut child2, self.config.mutation_rate, &mut self.rng);
            offspring.push(Individual::new(child1));
            offspring.push(Individual::new(child2));
        }
        // Pairs overshoot odd population sizes by one.
        offspring.truncate(size);

        self.previous = std::mem::replace(&mut self.population, offspring);
        self.generation += 1;
    }

    /// Evaluates the whole population and returns the best fitness.
    ///
    /// Tracks the running fitness total for selection and remembers the
    /// best individual; ties keep the earliest index (only strict
    /// improvements move the best during the ascending scan).
    fn evaluate(&mut self) -> f64 {
        self.total_fitness = 0.0;
        let mut best_index = 0;
        let mut best_fitness = 0.0;

        for i in 0..self.population.len() {
            let directions = genome::decode(self.population[i].genome())
                .expect("engine genomes always partition into whole genes");
            let fitness = self.maze.route_fitness(&directions);
            self.population[i].set_fitness(fitness);
            self.total_fitness += fitness;
            if fitness > best_fitness {
                best_fitness = fitness;
                best_index = i;
            }
        }

        self.best = Some(self.population[best_index].clone());
        log::trace!(
            "generation {}: best fitness {best_fitness:.4}",
            self.generation
        );
        best_fitness
    }

    /// Whether the engine is mid-run (initialized and not yet converged).
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Whether a route reaching the goal exactly has been found.
    pub fn has_converged(&self) -> bool {
        self.state == State::Converged
    }

    /// The number of completed generation replacements.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The best individual of the most recently evaluated generation.
    ///
    /// `None` until the first [`step`](Engine::step) evaluates a population.
    /// Ties resolve to the earliest index.
    pub fn best_individual(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// The decoded walk of the current best individual, one position per
    /// move, ready for a host to display.
    pub fn best_path(&self) -> Option<Vec<Position>> {
        let best = self.best.as_ref()?;
        let directions = genome::decode(best.genome())
            .expect("engine genomes always partition into whole genes");
        Some(self.maze.trace(&directions))
    }

    /// The current generation's individuals.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// The immediately preceding generation, for inspection only.
    pub fn last_generation(&self) -> &[Individual] {
        &self.previous
    }

    /// The maze this engine evolves against.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decodes a genome with this engine's configured chromosome length.
    ///
    /// Exposed so a host can render any genome's path without
    /// reimplementing the codec.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGenomeLength`] if `genome` does not have exactly the
    /// configured chromosome length.
    pub fn decode(&self, genome: &Genome) -> Result<Vec<Direction>> {
        if genome.len() != self.config.chromosome_length {
            return Err(Error::InvalidGenomeLength {
                len: genome.len(),
                expected: self.config.chromosome_length,
            });
        }
        genome::decode(genome)
    }
}
