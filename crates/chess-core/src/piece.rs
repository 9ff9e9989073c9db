//! Chess piece representation.

use crate::Color;
use std::fmt;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// The kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns the lowercase notation letter for this kind.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: a kind belonging to a color.
///
/// Plain immutable value compared structurally; all behavior lives in the
/// rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a piece of the given color and kind.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Returns the notation letter, uppercase for White and lowercase for Black.
    pub const fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_char_casing() {
        assert_eq!(Piece::new(Color::White, PieceKind::King).to_char(), 'K');
        assert_eq!(Piece::new(Color::Black, PieceKind::King).to_char(), 'k');
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).to_char(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceKind::Pawn).to_char(), 'p');
    }

    #[test]
    fn promotion_kinds() {
        assert_eq!(PieceKind::PROMOTIONS.len(), 4);
        assert!(PieceKind::PROMOTIONS.contains(&PieceKind::Queen));
        assert!(PieceKind::PROMOTIONS.contains(&PieceKind::Rook));
        assert!(PieceKind::PROMOTIONS.contains(&PieceKind::Bishop));
        assert!(PieceKind::PROMOTIONS.contains(&PieceKind::Knight));
        assert!(!PieceKind::PROMOTIONS.contains(&PieceKind::King));
        assert!(!PieceKind::PROMOTIONS.contains(&PieceKind::Pawn));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(
            Piece::new(Color::White, PieceKind::Rook),
            Piece::new(Color::White, PieceKind::Rook)
        );
        assert_ne!(
            Piece::new(Color::White, PieceKind::Rook),
            Piece::new(Color::Black, PieceKind::Rook)
        );
    }

    #[test]
    fn display() {
        let piece = Piece::new(Color::Black, PieceKind::Bishop);
        assert_eq!(format!("{}", piece), "Black Bishop");
    }
}
