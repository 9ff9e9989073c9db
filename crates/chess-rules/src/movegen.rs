//! Pseudo-legal move generation and check detection.
//!
//! [`piece_moves`] produces every geometrically legal destination for a
//! single piece, ignoring check entirely. Check-awareness lives one layer
//! up, in [`Game`](crate::Game), which filters candidates by speculatively
//! applying them with [`apply_move`] and re-running [`is_in_check`].

use crate::Board;
use chess_core::{Color, Move, Piece, PieceKind, Position};

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Generates every geometrically legal move for the piece at `from`,
/// ignoring check.
///
/// Returns an empty list when `from` is off the board or holds no piece.
/// No ordering is guaranteed; callers treat the result as a set.
pub fn piece_moves(board: &Board, from: Position) -> Vec<Move> {
    if !from.is_on_board() {
        return Vec::new();
    }
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Bishop => slider_moves(board, from, piece.color, &DIAGONALS, &mut moves),
        PieceKind::Rook => slider_moves(board, from, piece.color, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => {
            slider_moves(board, from, piece.color, &ORTHOGONALS, &mut moves);
            slider_moves(board, from, piece.color, &DIAGONALS, &mut moves);
        }
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => step_moves(board, from, piece.color, &KING_OFFSETS, &mut moves),
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut moves),
    }
    moves
}

/// Walks each direction one square at a time: empty squares continue the
/// ray, an enemy square ends it inclusively, a friendly square exclusively.
fn slider_moves(
    board: &Board,
    from: Position,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in directions {
        let mut to = from.offset(d_rank, d_file);
        while to.is_on_board() {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(blocker) if blocker.color != us => {
                    moves.push(Move::new(from, to));
                    break;
                }
                Some(_) => break,
            }
            to = to.offset(d_rank, d_file);
        }
    }
}

/// Fixed-offset movement for knights and kings: each on-board destination
/// is kept unless a friendly piece occupies it.
fn step_moves(
    board: &Board,
    from: Position,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in offsets {
        let to = from.offset(d_rank, d_file);
        if !to.is_on_board() {
            continue;
        }
        match board.piece_at(to) {
            Some(occupant) if occupant.color == us => {}
            _ => moves.push(Move::new(from, to)),
        }
    }
}

fn pawn_moves(board: &Board, from: Position, us: Color, moves: &mut Vec<Move>) {
    let dir = us.pawn_direction();

    let one = from.offset(dir, 0);
    if one.is_on_board() && board.piece_at(one).is_none() {
        push_pawn_move(moves, from, one, us);

        // Double push: home rank only, both squares empty. The landing
        // square is rank 4 or 5, never a promotion square.
        let two = one.offset(dir, 0);
        if from.rank() == us.pawn_home_rank() && board.piece_at(two).is_none() {
            moves.push(Move::new(from, two));
        }
    }

    // Diagonal captures. An empty diagonal never generates a move.
    for d_file in [-1, 1] {
        let to = from.offset(dir, d_file);
        if !to.is_on_board() {
            continue;
        }
        if let Some(target) = board.piece_at(to) {
            if target.color != us {
                push_pawn_move(moves, from, to, us);
            }
        }
    }
}

/// Emits a pawn move, expanding far-rank landings into the four promotion
/// choices and suppressing the plain variant.
fn push_pawn_move(moves: &mut Vec<Move>, from: Position, to: Position, us: Color) {
    if to.rank() == us.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Returns the board after playing `mov`, leaving the input untouched.
///
/// The moved piece lands on the destination (replaced by a freshly promoted
/// piece of the mover's color when the promotion field is set) and the
/// origin square is cleared. If the origin is empty the board is returned
/// unchanged; callers validate first.
pub fn apply_move(board: &Board, mov: Move) -> Board {
    let mut next = board.clone();
    if let Some(piece) = board.piece_at(mov.from) {
        let landed = match mov.promotion {
            Some(kind) => Piece::new(piece.color, kind),
            None => piece,
        };
        next.set(mov.to, Some(landed));
        next.set(mov.from, None);
    }
    next
}

/// Returns true if the king of `color` is attacked by any enemy piece.
///
/// Scans the whole board: finds the king, then tests every enemy piece's
/// pseudo-legal moves for one targeting the king's square. A board with no
/// king of `color` reports no check, so king-less test fixtures stay usable.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = king_position(board, color) else {
        return false;
    };

    for from in Board::positions() {
        match board.piece_at(from) {
            Some(attacker) if attacker.color != color => {
                // Compare destinations only: a pawn that reaches the king
                // square via a promotion capture still delivers check.
                if piece_moves(board, from).iter().any(|m| m.to == king) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Finds the first king of `color` in rank-major scan order.
fn king_position(board: &Board, color: Color) -> Option<Position> {
    let king = Piece::new(color, PieceKind::King);
    Board::positions().find(|&pos| board.piece_at(pos) == Some(king))
}
