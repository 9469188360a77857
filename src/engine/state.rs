use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the square grid.
pub const SIZE: usize = 4;

/// A cell value: 0 is empty, anything else is a power of two >= 2.
pub type Tile = u32;

/// One row or column, ordered from the target edge inward.
pub type Line = [Tile; SIZE];

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every direction, in the order the prompt lists them.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(s)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid tile value {value} at ({row}, {col}); expected 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
    #[error("expected {expected} tile values, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("not a tile value: '{0}'")]
    NotANumber(String),
}

/// Largest tile a `Tile` can hold. Two of them never merge.
pub const MAX_TILE: Tile = 1 << 31;

/// True for 0 (empty) and every power of two from 2 up to `MAX_TILE`.
#[inline]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// True when `a` and `b` would merge into one doubled tile.
#[inline]
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// 4x4 grid of tile values, stored row-major.
///
/// Cells are addressed as `(row, col)` with `(0, 0)` the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board([[Tile; SIZE]; SIZE]);

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board([[0; SIZE]; SIZE]);

    /// Build a board from rows without validation.
    ///
    /// Use `Board::try_from` when the values come from outside the crate.
    #[inline]
    pub const fn from_rows(rows: [[Tile; SIZE]; SIZE]) -> Self { Board(rows) }

    /// Borrow the rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[[Tile; SIZE]; SIZE] { &self.0 }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile { self.0[row][col] }

    /// Set a cell. The caller guarantees `value` is 0 or a valid tile.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        debug_assert!(is_valid_tile(value), "invalid tile value {value}");
        self.0[row][col] = value;
    }

    /// All empty positions in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells().filter(|&(_, _, v)| v == 0).map(|(r, c, _)| (r, c)).collect()
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Return the highest tile value present (0 for an empty board).
    pub fn highest_tile(&self) -> Tile {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of every tile. Merges conserve it; only spawns increase it.
    pub fn tile_sum(&self) -> u64 {
        self.0.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// True if an empty cell exists or two orthogonal neighbours can merge.
    ///
    /// False means no shift or merge in any direction can alter the board.
    pub fn has_any_move(&self) -> bool {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let v = self.0[row][col];
                if v == 0 {
                    return true;
                }
                if row + 1 < SIZE && can_merge(v, self.0[row + 1][col]) {
                    return true;
                }
                if col + 1 < SIZE && can_merge(v, self.0[row][col + 1]) {
                    return true;
                }
            }
        }
        false
    }

    /// Cell-wise comparison; same as `==`.
    #[inline]
    pub fn equals(&self, other: &Board) -> bool { self == other }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    }
}

impl TryFrom<[[u32; SIZE]; SIZE]> for Board {
    type Error = BoardError;

    fn try_from(rows: [[u32; SIZE]; SIZE]) -> Result<Self, Self::Error> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Board(rows))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse 16 whitespace-separated values, row-major.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|tok| tok.parse::<u32>().map_err(|_| BoardError::NotANumber(tok.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != SIZE * SIZE {
            return Err(BoardError::WrongLength { expected: SIZE * SIZE, found: values.len() });
        }
        let mut rows = [[0; SIZE]; SIZE];
        for (idx, v) in values.into_iter().enumerate() {
            rows[idx / SIZE][idx % SIZE] = v;
        }
        Board::try_from(rows)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for v in row {
                write!(f, "{}\t", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Board {
        let mut rows = [[0; SIZE]; SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = if (r + c) % 2 == 0 { 2 } else { 4 };
            }
        }
        Board::from_rows(rows)
    }

    #[test]
    fn it_lists_empty_cells_row_major() {
        let mut b = Board::EMPTY;
        for r in 0..SIZE {
            for c in 0..SIZE {
                b.set(r, c, 2);
            }
        }
        b.set(1, 2, 0);
        b.set(3, 0, 0);
        assert_eq!(b.empty_cells(), vec![(1, 2), (3, 0)]);
        assert_eq!(b.count_empty(), 2);
        assert_eq!(Board::EMPTY.empty_cells().len(), 16);
    }

    #[test]
    fn it_get_set() {
        let mut b = Board::EMPTY;
        b.set(2, 3, 64);
        assert_eq!(b.get(2, 3), 64);
        assert_eq!(b.get(3, 2), 0);
        assert_eq!(b.highest_tile(), 64);
    }

    #[test]
    fn full_checkerboard_has_no_move() {
        let b = checkerboard();
        assert_eq!(b.count_empty(), 0);
        assert!(!b.has_any_move());
    }

    #[test]
    fn one_empty_cell_always_has_move() {
        let mut b = checkerboard();
        b.set(0, 0, 0);
        assert!(b.has_any_move());
    }

    #[test]
    fn full_board_with_vertical_pair_has_move() {
        let mut b = checkerboard();
        // (1,1) was 2; its neighbour above (0,1) is 4.
        b.set(1, 1, 4);
        assert!(b.has_any_move());
    }

    #[test]
    fn full_board_of_max_tiles_has_no_move() {
        let b = Board::from_rows([[MAX_TILE; SIZE]; SIZE]);
        assert!(Board::try_from([[MAX_TILE; SIZE]; SIZE]).is_ok());
        assert!(!b.has_any_move());
        let mut below = b;
        below.set(0, 0, MAX_TILE / 2);
        below.set(0, 1, MAX_TILE / 2);
        assert!(below.has_any_move());
    }

    #[test]
    fn equals_is_cellwise() {
        let a = checkerboard();
        let mut b = a;
        assert!(a.equals(&b));
        b.set(3, 3, 8);
        assert!(!a.equals(&b));
    }

    #[test]
    fn try_from_rejects_non_powers() {
        let mut rows = [[0; SIZE]; SIZE];
        rows[1][2] = 6;
        assert_eq!(
            Board::try_from(rows),
            Err(BoardError::InvalidTile { row: 1, col: 2, value: 6 })
        );
        rows[1][2] = 1;
        assert!(Board::try_from(rows).is_err());
        rows[1][2] = 1024;
        assert!(Board::try_from(rows).is_ok());
    }

    #[test]
    fn parse_from_text() {
        let b: Board = "2 0 2 4  0 0 0 0  0 0 0 0  0 0 0 8".parse().unwrap();
        assert_eq!(b.rows()[0], [2, 0, 2, 4]);
        assert_eq!(b.get(3, 3), 8);
        assert_eq!(
            "2 0 2".parse::<Board>(),
            Err(BoardError::WrongLength { expected: 16, found: 3 })
        );
        assert!(matches!("x 0".parse::<Board>(), Err(BoardError::NotANumber(_))));
        assert!("3 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0".parse::<Board>().is_err());
    }

    #[test]
    fn display_is_tab_separated_rows() {
        let b = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
        let text = b.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2\t0\t0\t0\t");
        assert_eq!(lines[3], "0\t0\t0\t4\t");
    }
}
