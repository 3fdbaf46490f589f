//! Grid representation and construction.

use crate::error::{Error, Result};

/// Integer tags accepted by [`Maze::from_tags`].
///
/// These match the map-array convention of grid hosts: 0=open, 1=wall, and
/// two distinguished markers for the start and goal cells. The markers only
/// locate the endpoints; the walker treats those cells as open.
const TAG_OPEN: i32 = 0;
const TAG_WALL: i32 = 1;
const TAG_START: i32 = 5;
const TAG_GOAL: i32 = 8;

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Walkable.
    Open,
    /// Impassable; moves onto it are skipped.
    Wall,
    /// Walkable; marks the walk's starting cell.
    Start,
    /// Walkable; marks the target cell.
    Goal,
}

impl Cell {
    /// Whether a walker may occupy this cell.
    pub fn is_walkable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    fn from_tag(tag: i32) -> Result<Self> {
        match tag {
            TAG_OPEN => Ok(Cell::Open),
            TAG_WALL => Ok(Cell::Wall),
            TAG_START => Ok(Cell::Start),
            TAG_GOAL => Ok(Cell::Goal),
            other => Err(Error::config(format!("unknown cell tag {other}"))),
        }
    }
}

/// A grid coordinate. `x` is the column, `y` the row; north is `+y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    pub fn manhattan(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// An immutable rectangular maze with fixed start and goal cells.
///
/// Supplied once at engine construction and never mutated; the walker and
/// fitness evaluator are pure functions over it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
}

impl Maze {
    /// Builds a maze from rows of cells and explicit endpoint coordinates.
    ///
    /// `rows[y][x]` addresses column `x` of row `y`.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the grid is empty or ragged, or if either
    /// endpoint is out of bounds or on a wall.
    pub fn new(rows: Vec<Vec<Cell>>, start: Position, goal: Position) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::config("maze grid must be non-empty"));
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::config("maze grid rows must all have equal width"));
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let maze = Self {
            width,
            height,
            cells,
            start,
            goal,
        };

        for (name, pos) in [("start", start), ("goal", goal)] {
            if pos.x >= width || pos.y >= height {
                return Err(Error::config(format!(
                    "{name} position ({}, {}) is outside the {width}x{height} grid",
                    pos.x, pos.y
                )));
            }
            if !maze.cell(pos).is_walkable() {
                return Err(Error::config(format!(
                    "{name} position ({}, {}) is a wall cell",
                    pos.x, pos.y
                )));
            }
        }

        Ok(maze)
    }

    /// Builds a maze from integer-tagged rows, locating the start and goal
    /// from their markers (exactly one of each must be present).
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] on an unknown tag, a malformed grid, or a
    /// missing/duplicated marker.
    pub fn from_tags(rows: &[Vec<i32>]) -> Result<Self> {
        let mut cells = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            let mut cell_row = Vec::with_capacity(row.len());
            for (x, &tag) in row.iter().enumerate() {
                let cell = Cell::from_tag(tag)?;
                let pos = Position::new(x, y);
                match cell {
                    Cell::Start if start.replace(pos).is_some() => {
                        return Err(Error::config("multiple start markers in maze"));
                    }
                    Cell::Goal if goal.replace(pos).is_some() => {
                        return Err(Error::config("multiple goal markers in maze"));
                    }
                    _ => {}
                }
                cell_row.push(cell);
            }
            cells.push(cell_row);
        }

        let start = start.ok_or_else(|| Error::config("maze has no start marker"))?;
        let goal = goal.ok_or_else(|| Error::config("maze has no goal marker"))?;
        Self::new(cells, start, goal)
    }

    /// Grid width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The walk's starting cell.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The target cell.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The cell at `pos`. Callers must stay in bounds.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.y * self.width + pos.x]
    }
}
