//! Game state and move validation.

use crate::movegen::{apply_move, is_in_check, piece_moves};
use crate::Board;
use chess_core::{Color, Move, Position};
use thiserror::Error;

/// Error returned by [`Game::make_move`] for any rejected move.
///
/// A single kind covers every rejection cause (empty origin, wrong-turn
/// piece, illegal destination, self-check); callers wanting specifics call
/// [`Game::valid_moves`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid move: {0}")]
pub struct InvalidMove(pub Move);

/// A chess game: the current board plus the side to move.
///
/// The board is exclusively owned; [`make_move`](Game::make_move) is the
/// only move-level mutation path, and it validates fully on a copy before
/// committing anything. Equality and hashing cover the complete state, for
/// caching and test assertions by outer layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    side_to_move: Color,
}

impl Game {
    /// Creates a game with the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::starting(),
            side_to_move: Color::White,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board wholesale (test fixtures, rehydration).
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Returns whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Overrides whose turn it is.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Returns the fully legal moves for the piece at `position`, or `None`
    /// if the square is empty or off the board.
    ///
    /// Any piece may be inspected regardless of whose turn it is; the
    /// self-check filter runs against the inspected piece's own color.
    pub fn valid_moves(&self, position: Position) -> Option<Vec<Move>> {
        if !position.is_on_board() {
            return None;
        }
        let piece = self.board.piece_at(position)?;
        Some(legal_moves(&self.board, position, piece.color))
    }

    /// Validates and plays `mov`, then flips the turn.
    ///
    /// Rejected moves leave the game untouched: all validation runs against
    /// a board copy, and the copy only replaces the live board once every
    /// test has passed.
    pub fn make_move(&mut self, mov: Move) -> Result<(), InvalidMove> {
        if !mov.from.is_on_board() {
            return Err(InvalidMove(mov));
        }
        let piece = self.board.piece_at(mov.from).ok_or(InvalidMove(mov))?;
        if piece.color != self.side_to_move {
            return Err(InvalidMove(mov));
        }
        if !piece_moves(&self.board, mov.from).contains(&mov) {
            return Err(InvalidMove(mov));
        }

        let next = apply_move(&self.board, mov);
        if is_in_check(&next, self.side_to_move) {
            return Err(InvalidMove(mov));
        }

        self.board = next;
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Returns true if the king of `color` is currently attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Returns true if `color` is in check with no legal move on any piece.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `color` is not in check yet has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    fn has_legal_move(&self, color: Color) -> bool {
        Board::positions().any(|pos| {
            matches!(self.board.piece_at(pos), Some(p) if p.color == color)
                && !legal_moves(&self.board, pos, color).is_empty()
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips self-check-inducing candidates from the pseudo-legal moves of the
/// piece at `from`.
///
/// Every candidate is speculatively applied to a board copy and discarded
/// if `mover`'s king would be attacked afterwards. This runs for all pieces,
/// not just the king: it is what pins a piece to its file, rank, or
/// diagonal.
fn legal_moves(board: &Board, from: Position, mover: Color) -> Vec<Move> {
    let mut moves = piece_moves(board, from);
    moves.retain(|&mov| !is_in_check(&apply_move(board, mov), mover));
    moves
}
