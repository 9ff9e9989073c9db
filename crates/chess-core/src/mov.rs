//! Move representation.

use crate::{PieceKind, Position};
use std::fmt;

/// A chess move: origin, destination, and an optional promotion kind.
///
/// Compared by value. Generated move lists are treated as sets, so the
/// promotion field participates in equality: a queen promotion and a rook
/// promotion to the same square are distinct moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// Set only for pawn moves landing on the far rank.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move without promotion.
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a pawn promotion move.
    #[inline]
    pub const fn promoting(from: Position, to: Position, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    /// Formats in coordinate notation (e.g., "e2e4", "e7e8q").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_equality() {
        let e2 = Position::new(2, 5);
        let e4 = Position::new(4, 5);
        assert_eq!(Move::new(e2, e4), Move::new(e2, e4));
        assert_ne!(Move::new(e2, e4), Move::new(e4, e2));
    }

    #[test]
    fn promotion_distinguishes_moves() {
        let e7 = Position::new(7, 5);
        let e8 = Position::new(8, 5);
        assert_ne!(
            Move::promoting(e7, e8, PieceKind::Queen),
            Move::promoting(e7, e8, PieceKind::Rook)
        );
        assert_ne!(Move::promoting(e7, e8, PieceKind::Queen), Move::new(e7, e8));
    }

    #[test]
    fn display() {
        let e2 = Position::new(2, 5);
        let e4 = Position::new(4, 5);
        assert_eq!(Move::new(e2, e4).to_string(), "e2e4");

        let e7 = Position::new(7, 5);
        let e8 = Position::new(8, 5);
        assert_eq!(
            Move::promoting(e7, e8, PieceKind::Queen).to_string(),
            "e7e8q"
        );
        assert_eq!(
            Move::promoting(e7, e8, PieceKind::Knight).to_string(),
            "e7e8n"
        );
    }
}
