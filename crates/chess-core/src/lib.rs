//! Core types for chess.
//!
//! This crate provides the fundamental value types used across the rules
//! engine:
//! - [`Piece`], [`PieceKind`], and [`Color`] for piece representation
//! - [`Position`] for 1-indexed (rank, file) board coordinates
//! - [`Move`] for move representation

mod color;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use position::Position;
