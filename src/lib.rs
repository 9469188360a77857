//! slide-2048: a 4x4 sliding-tile (2048) board engine
//!
//! This crate provides:
//! - A `Board` type with the grid queries a turn loop needs (`empty_cells`, `has_any_move`, ...)
//! - Pure move transitions (`engine::apply_move`): shift -> merge -> shift along one direction
//! - A `GameSession` that spawns tiles after changed moves and tracks game over / quit
//! - A `RandomSource` seam so spawns can be seeded or scripted
//!
//! Quick start:
//! ```
//! use slide_2048::engine::{Board, Move};
//!
//! let b0 = Board::from_rows([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
//! let out = b0.apply_move(Move::Left);
//! assert!(out.changed);
//! assert_eq!(out.board.rows()[0], [4, 2, 0, 0]);
//! ```
//!
//! Full loop (simplest possible)
//! ```
//! use slide_2048::session::{GameSession, Status};
//! use slide_2048::spawn::RngSource;
//!
//! // 1) Deterministic session: two tiles already spawned
//! let mut session = GameSession::new(RngSource::seeded(123));
//! let mut moves = 0u32;
//!
//! // 2) Play the first legal move a few times (keep doctests fast)
//! while !session.is_terminal() && moves < 8 {
//!     let dir = session.board().legal_moves()[0];
//!     let outcome = session.play(dir).unwrap();
//!     assert!(outcome.changed);
//!     moves += 1;
//! }
//!
//! // 3) Quit is a voluntary end, distinct from running out of moves
//! assert!(session.quit().is_terminal());
//! assert_ne!(session.status(), Status::Active);
//! ```
//!
pub mod command;
pub mod config;
pub mod engine;
pub mod session;
pub mod spawn;
