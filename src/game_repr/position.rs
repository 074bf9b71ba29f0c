//! Contract between the search and the rules engine that owns the board.
//!
//! The crate never represents a chess position itself. The host hands the
//! search a value implementing [`Position`] and the search walks the game tree
//! by mutating that value in place: one `apply` per explored branch, matched
//! by exactly one `undo` before the branch is left. After any search call the
//! position is back in its pre-call state, except for the single move the
//! root selector commits.

use std::fmt::Debug;

use crate::game_repr::Piece;

/// A mutable game position owned by an external rules engine.
///
/// `apply`/`undo` follow strict LIFO discipline: `undo` reverts the most
/// recent un-undone `apply`, and the search issues them in matched pairs on
/// every path, including early pruning exits. The `&mut` receivers double as
/// the exclusivity requirement — no other use of the position may overlap a
/// running search.
pub trait Position {
    /// Opaque move token produced by the rules engine. The search only copies
    /// and compares it, never takes it apart.
    type Move: Copy + PartialEq + Debug;

    /// All legal moves in the current position, in no particular order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv` on the position. Must be paired with a later [`undo`].
    ///
    /// [`undo`]: Position::undo
    fn apply(&mut self, mv: Self::Move);

    /// Reverts the most recent [`apply`].
    ///
    /// [`apply`]: Position::apply
    fn undo(&mut self);

    /// Piece on `square`, or `None` when empty. Squares are indexed 0..64,
    /// rank-major with a1 = 0 and h8 = 63.
    fn piece_at(&self, square: u8) -> Option<Piece>;

    /// Whether the game has ended (checkmate, stalemate, or a draw rule).
    fn is_game_over(&self) -> bool;
}
