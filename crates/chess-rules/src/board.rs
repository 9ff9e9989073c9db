//! The 8x8 board.

use chess_core::{Color, Piece, PieceKind, Position};
use std::fmt;

/// An 8x8 mailbox board: each square holds at most one piece.
///
/// The board enforces no invariant on piece counts - a board with zero or
/// two kings of one color is representable, which keeps hand-built test
/// positions cheap. `Clone` produces a full deep copy; a clone never aliases
/// the original's squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed `[rank - 1][file - 1]`.
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn starting() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (i, &kind) in BACK_RANK.iter().enumerate() {
            let file = i as i8 + 1;
            board.set(Position::new(1, file), Some(Piece::new(Color::White, kind)));
            board.set(
                Position::new(2, file),
                Some(Piece::new(Color::White, PieceKind::Pawn)),
            );
            board.set(
                Position::new(7, file),
                Some(Piece::new(Color::Black, PieceKind::Pawn)),
            );
            board.set(Position::new(8, file), Some(Piece::new(Color::Black, kind)));
        }
        board
    }

    /// Returns the piece at `position`, or `None` for an empty square.
    ///
    /// `position` must be on the board; callers guard with
    /// [`Position::is_on_board`] first.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        debug_assert!(position.is_on_board());
        self.squares[(position.rank() - 1) as usize][(position.file() - 1) as usize]
    }

    /// Places `piece` at `position`; `None` clears the square.
    ///
    /// This is the board's only mutation path. `position` must be on the
    /// board.
    #[inline]
    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        debug_assert!(position.is_on_board());
        self.squares[(position.rank() - 1) as usize][(position.file() - 1) as usize] = piece;
    }

    /// Iterates every on-board position in rank-major order (a1, b1, ... h8).
    pub fn positions() -> impl Iterator<Item = Position> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Position::new(rank, file)))
    }
}

impl fmt::Display for Board {
    /// Renders an ASCII diagram with rank 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=8).rev() {
            write!(f, "{} ", rank)?;
            for file in 1..=8 {
                match self.piece_at(Position::new(rank, file)) {
                    Some(piece) => write!(f, " {}", piece.to_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
