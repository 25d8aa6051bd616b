//=========================================================================
// Maze
//=========================================================================
//
// Static grid of wall and path cells, parsed from an ASCII layout.
//
// Layout format: one line per row, `#` = wall, `.` = path. Leading and
// trailing whitespace is ignored, blank lines are skipped, and every row
// must have the same width.
//
// Grid ↔ screen: cell (col, row) covers the square whose top-left corner
// is (col·50, row·50). Entities spawn on those corners.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Rect, Vec2};

//=== Constants ===========================================================

/// Edge length of one cell in logical pixels.
pub const CELL_SIZE: f32 = 50.0;

const DEFAULT_LAYOUT: &str = "
    ################
    ......#........#
    #####.#.######.#
    #...#...#....#.#
    #.#.###.#.##.#.#
    #.#.......#..#.#
    #.#########.##.#
    #...........#..#
    ###########.#.##
    #..............#
    ################
";

//=== Cell ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Path,
}

//=== MazeError ===========================================================

/// Reasons a layout cannot become a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No non-blank rows.
    Empty,

    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character other than `#` or `.`.
    UnknownCell { row: usize, col: usize, ch: char },

    /// No path cell to stand or spawn on.
    NoPath,
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Maze layout is empty"),
            Self::Ragged { row, expected, found } => {
                write!(f, "Maze row {} has {} cells, expected {}", row, found, expected)
            }
            Self::UnknownCell { row, col, ch } => {
                write!(f, "Unknown maze cell {:?} at row {}, column {}", ch, row, col)
            }
            Self::NoPath => write!(f, "Maze has no path cells"),
        }
    }
}

impl std::error::Error for MazeError {}

//=== Maze ================================================================

/// Immutable rectangular grid with at least one path cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    path_positions: Vec<Vec2>,
}

impl Maze {
    //--- Construction -----------------------------------------------------

    /// Parses an ASCII layout (`#` wall, `.` path).
    pub fn parse(layout: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let cols = match lines.first() {
            Some(first) => first.chars().count(),
            None => return Err(MazeError::Empty),
        };

        let mut cells = Vec::with_capacity(cols * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MazeError::Ragged { row, expected: cols, found });
            }

            for (col, ch) in line.chars().enumerate() {
                cells.push(match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Path,
                    _ => return Err(MazeError::UnknownCell { row, col, ch }),
                });
            }
        }

        let path_positions: Vec<Vec2> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Path)
            .map(|(i, _)| Vec2::new((i % cols) as f32 * CELL_SIZE, (i / cols) as f32 * CELL_SIZE))
            .collect();

        if path_positions.is_empty() {
            return Err(MazeError::NoPath);
        }

        Ok(Self {
            cols,
            rows: lines.len(),
            cells,
            path_positions,
        })
    }

    //--- Grid Queries -----------------------------------------------------

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell at grid coordinates, `None` outside the grid.
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Cell containing the screen point `pos`, `None` outside the grid.
    pub fn cell_at(&self, pos: Vec2) -> Option<Cell> {
        let col = (pos.x / CELL_SIZE).floor();
        let row = (pos.y / CELL_SIZE).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        self.cell(col as usize, row as usize)
    }

    /// Returns `true` if `pos` lies on a path cell.
    pub fn is_walkable(&self, pos: Vec2) -> bool {
        self.cell_at(pos) == Some(Cell::Path)
    }

    /// Spawn points: the top-left corner of every path cell, row-major.
    pub fn path_positions(&self) -> &[Vec2] {
        &self.path_positions
    }

    /// Screen rects of every wall cell, row-major.
    pub fn wall_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Wall)
            .map(move |(i, _)| {
                Rect::new(
                    (i % self.cols) as f32 * CELL_SIZE,
                    (i / self.cols) as f32 * CELL_SIZE,
                    CELL_SIZE,
                    CELL_SIZE,
                )
            })
    }
}

impl Default for Maze {
    /// The hand-authored 16×11 maze.
    fn default() -> Self {
        Self::parse(DEFAULT_LAYOUT).expect("built-in maze layout is valid")
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Parsing Tests
    //=====================================================================

    #[test]
    fn default_layout_is_16_by_11() {
        let maze = Maze::default();
        assert_eq!((maze.cols(), maze.rows()), (16, 11));
        assert_eq!(maze.cell(0, 0), Some(Cell::Wall));
        assert_eq!(maze.cell(1, 1), Some(Cell::Path));
        assert_eq!(maze.cell(0, 1), Some(Cell::Path), "Entrance on the left edge");
        assert_eq!(maze.cell(6, 1), Some(Cell::Wall));
    }

    #[test]
    fn parse_skips_blank_lines_and_indent() {
        let maze = Maze::parse("\n   ###\n   #.#\n\n   ###\n").unwrap();
        assert_eq!((maze.cols(), maze.rows()), (3, 3));
        assert_eq!(maze.path_positions(), &[Vec2::new(50.0, 50.0)]);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Maze::parse("  \n\n"), Err(MazeError::Empty));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            Maze::parse("###\n#.\n###"),
            Err(MazeError::Ragged { row: 1, expected: 3, found: 2 })
        );
    }

    #[test]
    fn parse_rejects_unknown_cells() {
        assert_eq!(
            Maze::parse("###\n#x#\n###"),
            Err(MazeError::UnknownCell { row: 1, col: 1, ch: 'x' })
        );
    }

    #[test]
    fn parse_rejects_all_walls() {
        assert_eq!(Maze::parse("###\n###"), Err(MazeError::NoPath));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = MazeError::Ragged { row: 2, expected: 16, found: 15 };
        assert_eq!(err.to_string(), "Maze row 2 has 15 cells, expected 16");
    }

    //=====================================================================
    // Query Tests
    //=====================================================================

    #[test]
    fn cell_at_uses_floor_division() {
        let maze = Maze::default();
        assert_eq!(maze.cell_at(Vec2::new(50.0, 50.0)), Some(Cell::Path));
        assert_eq!(maze.cell_at(Vec2::new(99.9, 99.9)), Some(Cell::Path));
        assert_eq!(maze.cell_at(Vec2::new(100.0, 100.0)), Some(Cell::Wall));
        assert_eq!(maze.cell_at(Vec2::new(299.0, 60.0)), Some(Cell::Path));
        assert_eq!(maze.cell_at(Vec2::new(300.0, 60.0)), Some(Cell::Wall));
    }

    #[test]
    fn outside_grid_is_not_walkable() {
        let maze = Maze::default();
        assert!(!maze.is_walkable(Vec2::new(-1.0, 50.0)));
        assert!(!maze.is_walkable(Vec2::new(50.0, -0.5)));
        assert!(!maze.is_walkable(Vec2::new(800.0, 50.0)));
        assert!(!maze.is_walkable(Vec2::new(50.0, 550.0)));
    }

    #[test]
    fn path_positions_match_path_cells() {
        let maze = Maze::default();
        for pos in maze.path_positions() {
            assert!(maze.is_walkable(*pos), "Spawn point {:?} is on a wall", pos);
        }
        let walls = maze.wall_rects().count();
        assert_eq!(walls + maze.path_positions().len(), 16 * 11);
    }
}
