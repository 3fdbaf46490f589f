//! The generational population engine.
//!
//! [`Engine`] owns the current and previous generations and advances one
//! full generation per [`Engine::step`] call: evaluate every individual
//! against the maze, detect convergence, then breed a complete replacement
//! population via roulette-wheel selection, single-point crossover, and
//! per-bit mutation.
//!
//! # Key types
//!
//! - [`EngineConfig`]: tunable constants (builder + validation)
//! - [`Individual`]: one genome with its cached fitness
//! - [`Engine`]: the `Uninitialized → Running → Converged` state machine
//!
//! # Submodules
//!
//! - [`operators`]: the genetic operators on bit-string genomes

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::EngineConfig;
pub use runner::Engine;
pub use types::Individual;
