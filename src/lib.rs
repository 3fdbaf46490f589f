//! Genetic algorithm engine for grid-maze pathfinding.
//!
//! A population of fixed-length bit-string genomes is decoded into movement
//! sequences, scored by how close the resulting walk ends to a goal cell,
//! and evolved generation-over-generation with fitness-proportional
//! (roulette-wheel) selection, single-point crossover, and per-bit mutation
//! until one genome reaches the goal exactly.
//!
//! # Architecture
//!
//! - [`genome`]: the bit-string representation and the gene ↔ direction codec
//! - [`maze`]: the immutable grid, move simulation, and fitness evaluation
//! - [`engine`]: the generational loop — selection, crossover, mutation,
//!   convergence detection
//!
//! The engine is an in-process, single-threaded component. A host drives it
//! one generation at a time via [`engine::Engine::step`] and reads back the
//! best individual's decoded path for display; nothing here renders, blocks,
//! or persists.
//!
//! # Example
//!
//! ```
//! use maze_ga::engine::{Engine, EngineConfig};
//! use maze_ga::maze::Maze;
//!
//! let maze = Maze::from_tags(&[
//!     vec![5, 0, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 8],
//! ]).unwrap();
//!
//! let config = EngineConfig::default()
//!     .with_chromosome_length(20)
//!     .with_population_size(40)
//!     .with_seed(42);
//!
//! let mut engine = Engine::new(maze, config).unwrap();
//! engine.run();
//! while engine.is_running() && engine.generation() < 500 {
//!     engine.step();
//! }
//! ```

pub mod engine;
mod error;
pub mod genome;
pub mod maze;

pub use error::{Error, Result};
