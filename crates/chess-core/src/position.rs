//! Board coordinate representation.

use std::fmt;

/// A board coordinate as a (rank, file) pair, both 1-indexed.
///
/// Rank 1 is White's back rank; file 1 is the a-file. Off-grid coordinates
/// are representable values (move generation walks rays off the edge and
/// clips them); use [`is_on_board`](Position::is_on_board) before treating
/// a `Position` as a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    rank: i8,
    file: i8,
}

impl Position {
    /// Creates a position from rank and file (1-8 when on the board).
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Position { rank, file }
    }

    /// Returns the rank (1-8 when on the board).
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Returns the file (1-8 when on the board).
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Returns true if both rank and file fall within the 8x8 grid.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        1 <= self.rank && self.rank <= 8 && 1 <= self.file && self.file <= 8
    }

    /// Returns the position shifted by the given rank and file deltas.
    ///
    /// The result may be off the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Position {
            rank: self.rank + d_rank,
            file: self.file + d_file,
        }
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&bytes[0]) {
            return None;
        }
        if !(b'1'..=b'8').contains(&bytes[1]) {
            return None;
        }
        let file = (bytes[0] - b'a' + 1) as i8;
        let rank = (bytes[1] - b'0') as i8;
        Some(Position::new(rank, file))
    }
}

impl fmt::Display for Position {
    /// Formats on-board positions in algebraic notation ("e4"); off-grid
    /// positions fall back to a raw "(rank,file)" pair.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + (self.file - 1) as u8) as char;
            write!(f, "{}{}", file, self.rank)
        } else {
            write!(f, "({},{})", self.rank, self.file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accessors() {
        let e4 = Position::new(4, 5);
        assert_eq!(e4.rank(), 4);
        assert_eq!(e4.file(), 5);
    }

    #[test]
    fn on_board_bounds() {
        assert!(Position::new(1, 1).is_on_board());
        assert!(Position::new(8, 8).is_on_board());
        assert!(!Position::new(0, 4).is_on_board());
        assert!(!Position::new(9, 4).is_on_board());
        assert!(!Position::new(4, 0).is_on_board());
        assert!(!Position::new(4, 9).is_on_board());
        assert!(!Position::new(-1, -1).is_on_board());
    }

    #[test]
    fn offset_moves_rank_and_file() {
        let d4 = Position::new(4, 4);
        assert_eq!(d4.offset(1, 0), Position::new(5, 4));
        assert_eq!(d4.offset(-2, 1), Position::new(2, 5));
        // Walking off the edge is representable, just not on the board.
        assert!(!Position::new(8, 8).offset(1, 1).is_on_board());
    }

    #[test]
    fn from_algebraic() {
        assert_eq!(Position::from_algebraic("a1"), Some(Position::new(1, 1)));
        assert_eq!(Position::from_algebraic("e4"), Some(Position::new(4, 5)));
        assert_eq!(Position::from_algebraic("h8"), Some(Position::new(8, 8)));
        assert_eq!(Position::from_algebraic("i1"), None);
        assert_eq!(Position::from_algebraic("a9"), None);
        assert_eq!(Position::from_algebraic("A1"), None);
        assert_eq!(Position::from_algebraic(""), None);
        assert_eq!(Position::from_algebraic("e44"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1, 1).to_string(), "a1");
        assert_eq!(Position::new(4, 5).to_string(), "e4");
        assert_eq!(Position::new(8, 8).to_string(), "h8");
        assert_eq!(Position::new(0, 9).to_string(), "(0,9)");
    }

    proptest! {
        #[test]
        fn algebraic_roundtrip(rank in 1i8..=8, file in 1i8..=8) {
            let pos = Position::new(rank, file);
            prop_assert_eq!(Position::from_algebraic(&pos.to_string()), Some(pos));
        }
    }
}
