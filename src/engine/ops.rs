use serde::{Deserialize, Serialize};

use super::state::{can_merge, Board, Line, Move, SIZE};

/// Result of applying one directional move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub board: Board,
    /// False when the move left every cell as it was.
    pub changed: bool,
}

/// Board positions of line `idx` for `dir`, ordered from the target edge inward.
///
/// Left/Right walk row `idx`, Up/Down walk column `idx`.
#[inline]
fn line_cells(dir: Move, idx: usize) -> [(usize, usize); SIZE] {
    let mut cells = [(0, 0); SIZE];
    for (k, cell) in cells.iter_mut().enumerate() {
        let back = SIZE - 1 - k;
        *cell = match dir {
            Move::Left => (idx, k),
            Move::Right => (idx, back),
            Move::Up => (k, idx),
            Move::Down => (back, idx),
        };
    }
    cells
}

fn read_line(board: &Board, cells: &[(usize, usize); SIZE]) -> Line {
    let mut line = [0; SIZE];
    for (slot, &(r, c)) in line.iter_mut().zip(cells) {
        *slot = board.get(r, c);
    }
    line
}

fn write_line(board: &mut Board, cells: &[(usize, usize); SIZE], line: &Line) {
    for (&v, &(r, c)) in line.iter().zip(cells) {
        board.set(r, c, v);
    }
}

/// Run `f` over every line of `board` as seen from `dir`'s target edge.
fn map_lines(board: Board, dir: Move, f: impl Fn(Line) -> Line) -> Board {
    let mut out = board;
    for idx in 0..SIZE {
        let cells = line_cells(dir, idx);
        let line = f(read_line(&board, &cells));
        write_line(&mut out, &cells, &line);
    }
    out
}

/// Compact non-zero tiles toward index 0, keeping their order.
pub fn shift_line(line: Line) -> Line {
    let mut out = [0; SIZE];
    let mut index = 0;
    for v in line.into_iter().filter(|&v| v != 0) {
        out[index] = v;
        index += 1;
    }
    out
}

/// Merge equal neighbours from index 0 inward.
///
/// The edge-ward tile doubles and its partner is zeroed. A tile produced by a
/// merge is never a merge candidate again within the same pass. Tiles at
/// `MAX_TILE` stay put.
pub fn merge_line(mut line: Line) -> Line {
    let mut i = 0;
    while i + 1 < SIZE {
        if can_merge(line[i], line[i + 1]) {
            line[i] *= 2;
            line[i + 1] = 0;
            i += 2;
        } else {
            i += 1;
        }
    }
    line
}

/// Full shift -> merge -> shift on a single line.
#[inline]
pub fn slide_line(line: Line) -> Line {
    shift_line(merge_line(shift_line(line)))
}

/// Compaction phase only: every line pushed toward `dir`'s edge.
pub fn shift(board: Board, dir: Move) -> Board {
    map_lines(board, dir, shift_line)
}

/// Merge phase only. Expects an already shifted board to be meaningful.
pub fn merge(board: Board, dir: Move) -> Board {
    map_lines(board, dir, merge_line)
}

/// Slide/merge tiles in `dir`. No randomness.
pub fn apply_move(board: Board, dir: Move) -> MoveOutcome {
    let moved = shift(merge(shift(board, dir), dir), dir);
    MoveOutcome { board: moved, changed: !moved.equals(&board) }
}

/// Directions whose move would change the board, in `Move::ALL` order.
pub fn legal_moves(board: Board) -> Vec<Move> {
    Move::ALL.into_iter().filter(|&dir| apply_move(board, dir).changed).collect()
}

impl Board {
    /// Return the outcome of sliding/merging tiles in `dir` (no random insert).
    ///
    /// ```
    /// use slide_2048::engine::{Board, Move};
    /// let b = Board::from_rows([[2, 0, 2, 4], [0; 4], [0; 4], [0; 4]]);
    /// let out = b.apply_move(Move::Left);
    /// assert!(out.changed);
    /// assert_eq!(out.board.rows()[0], [4, 4, 0, 0]);
    /// ```
    #[inline]
    pub fn apply_move(self, dir: Move) -> MoveOutcome { apply_move(self, dir) }

    #[inline]
    pub fn legal_moves(self) -> Vec<Move> { legal_moves(self) }
}
