//! Player color representation.

/// Represents the two players in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the pawn marching direction in ranks (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the rank this color's pawns start on (2 for White, 7 for Black).
    #[inline]
    pub const fn pawn_home_rank(self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Returns the rank where this color's pawns promote (8 for White, 1 for Black).
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
