//! Move simulation and route fitness.
//!
//! All functions here are pure over the immutable [`Maze`]: illegal moves
//! are normal control flow (the walker stays put), never errors.

use super::grid::{Maze, Position};
use crate::genome::Direction;

impl Maze {
    /// Applies one direction to `pos`.
    ///
    /// The move is accepted only if the target cell is inside the grid and
    /// not a wall; otherwise the original position is returned unchanged and
    /// the wasted step is the only penalty.
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let target = match direction {
            Direction::North if pos.y + 1 < self.height() => Position::new(pos.x, pos.y + 1),
            Direction::South if pos.y > 0 => Position::new(pos.x, pos.y - 1),
            Direction::East if pos.x + 1 < self.width() => Position::new(pos.x + 1, pos.y),
            Direction::West if pos.x > 0 => Position::new(pos.x - 1, pos.y),
            _ => return pos,
        };

        if self.cell(target).is_walkable() {
            target
        } else {
            pos
        }
    }

    /// Walks the full direction sequence from the start cell and returns the
    /// final position.
    pub fn walk(&self, directions: &[Direction]) -> Position {
        directions
            .iter()
            .fold(self.start(), |pos, &dir| self.step(pos, dir))
    }

    /// The position after each move of the sequence, in order.
    ///
    /// Skipped moves repeat the previous position, so the result always has
    /// one entry per direction. Intended for hosts rendering the current
    /// best route.
    pub fn trace(&self, directions: &[Direction]) -> Vec<Position> {
        let mut pos = self.start();
        directions
            .iter()
            .map(|&dir| {
                pos = self.step(pos, dir);
                pos
            })
            .collect()
    }

    /// Scores a route by reciprocal Manhattan distance to the goal.
    ///
    /// `1.0 / (distance + 1)`: exactly 1.0 when the walk ends on the goal,
    /// strictly decreasing with distance, and always positive — the `+1`
    /// keeps the score finite and capped at 1.0.
    pub fn route_fitness(&self, directions: &[Direction]) -> f64 {
        let end = self.walk(directions);
        1.0 / (end.manhattan(self.goal()) as f64 + 1.0)
    }
}
