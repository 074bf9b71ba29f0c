// Piece-square tables for positional evaluation
// Values in tenths of a pawn (100 = 1 pawn)
// Tables are from White's perspective (rank 1 at bottom, rank 8 at top)
// For Black pieces, mirror the table vertically

use crate::game_repr::Type;

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1 (pawns shouldn't be here)
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8 (pawns shouldn't be here)
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 1
    -40,-20,  0,  5,  5,  0,-20,-40,  // Rank 2
    -30,  5, 10, 15, 15, 10,  5,-30,  // Rank 3
    -30,  0, 15, 20, 20, 15,  0,-30,  // Rank 4
    -30,  5, 15, 20, 20, 15,  5,-30,  // Rank 5
    -30,  0, 10, 15, 15, 10,  0,-30,  // Rank 6
    -40,-20,  0,  0,  0,  0,-20,-40,  // Rank 7
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 8
];

/// Positional value for a piece on `square`. Only pawns and knights carry a
/// table; every other piece type scores 0 here.
///
/// The tables are written for White. A Black piece reads the rank-mirrored
/// entry (`square ^ 56` flips the rank and keeps the file), so both colors
/// value the same relative square identically.
pub fn pst_value(piece_type: Type, square: u8, is_white: bool) -> i32 {
    let idx = if is_white {
        square as usize
    } else {
        (square ^ 56) as usize
    };

    match piece_type {
        Type::Pawn => PAWN_TABLE[idx],
        Type::Knight => KNIGHT_TABLE[idx],
        Type::Bishop | Type::Rook | Type::Queen | Type::King => 0,
    }
}
