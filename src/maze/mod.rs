//! The maze grid and walk-based fitness evaluation.
//!
//! A [`Maze`] is an immutable rectangular grid of [`Cell`]s plus a start and
//! goal [`Position`], supplied once at construction. The walker applies a
//! direction sequence move by move: a move onto a wall or off the grid is
//! silently skipped (the position simply does not change), and the fitness
//! of a route is the reciprocal Manhattan distance from the final cell to
//! the goal, so exactly reaching the goal scores the maximum of 1.0.

mod grid;
mod walker;

pub use grid::{Cell, Maze, Position};
