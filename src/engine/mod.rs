//! Engine module: the 4x4 board and its pure move transitions.
//!
//! - `Board` owns the grid and answers emptiness/terminal queries.
//! - A move is shift -> merge -> shift over the four lines facing the
//!   direction of travel; one line routine serves all four directions.
//! - Free functions mirror the methods when convenient (e.g., `apply_move`).

mod ops;
pub mod state;

pub use state::{can_merge, is_valid_tile, Board, BoardError, Line, Move, Tile, MAX_TILE, SIZE};

pub use ops::{apply_move, legal_moves, merge, merge_line, shift, shift_line, slide_line, MoveOutcome};
