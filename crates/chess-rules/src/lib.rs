//! Chess rules engine.
//!
//! This crate decides legality for standard chess: per-piece move
//! generation, check detection, the no-self-check legality filter, and
//! end-of-game queries. It is a pure library with no I/O; presentation and
//! transport layers sit on top of it.
//!
//! - [`Board`] - 8x8 mailbox grid of optional pieces
//! - [`Game`] - owned board plus side to move, with validated moves
//! - [`piece_moves`] / [`is_in_check`] / [`apply_move`] - the stateless
//!   building blocks, exposed for callers that work on raw boards
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Move, Position};
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! let e2 = Position::from_algebraic("e2").unwrap();
//! let e4 = Position::from_algebraic("e4").unwrap();
//! game.make_move(Move::new(e2, e4)).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod board;
mod game;
mod movegen;

pub use board::Board;
pub use game::{Game, InvalidMove};
pub use movegen::{apply_move, is_in_check, piece_moves};
