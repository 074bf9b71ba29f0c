// Root move selection
//
// Runs the alpha-beta search once per legal root move and commits the move
// with the strictly best score. This is the only place the searched position
// is left changed: exactly one ply, the chosen one.

use std::error::Error;
use std::fmt;

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::game_repr::Position;

use super::minimax::{search, SCORE_INF};

/// Why the agent could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The game is already over; the caller must not ask for a move.
    GameOver,
    /// The position has no legal moves. Callers are expected to check
    /// game-over state first, so reaching this is a caller bug reported
    /// loudly instead of an undefined move.
    NoLegalMoves,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::GameOver => write!(f, "game is already over"),
            SearchError::NoLegalMoves => write!(f, "position has no legal moves"),
        }
    }
}

impl Error for SearchError {}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport<M> {
    /// The move committed to the position.
    pub best_move: M,
    /// Score of `best_move` under the search's sign convention (higher is
    /// better for the side that moved at the root).
    pub score: i32,
    /// Positions visited, root children included.
    pub nodes_searched: u64,
}

/// Picks the best move for the side to move in `pos`, searching `depth` plies,
/// applies it to `pos`, and returns it with its score.
///
/// Root moves are shuffled when `rng` is given. That only affects which of
/// several equally scored moves is found first (the comparison is a strict
/// `>`, first move wins ties) and can improve pruning; it never changes the
/// best score. Pass `None` for fully reproducible selection.
///
/// Errors with [`SearchError::NoLegalMoves`] instead of returning an
/// undefined move when the root has no legal continuation.
pub fn select_best_move<P: Position>(
    pos: &mut P,
    depth: u8,
    rng: Option<&mut SmallRng>,
) -> Result<SearchReport<P::Move>, SearchError> {
    let mut moves = pos.legal_moves();
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    if let Some(rng) = rng {
        moves.shuffle(rng);
    }

    let mut best_move = moves[0];
    let mut best_score = -SCORE_INF;
    let mut nodes = 0u64;

    for mv in moves {
        pos.apply(mv);
        // The opponent answers next, so the child level minimizes.
        let score = search(pos, depth.saturating_sub(1), -SCORE_INF, SCORE_INF, false, &mut nodes);
        pos.undo();

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    debug!(
        "depth {} searched {} nodes, best {:?} score {}",
        depth, nodes, best_move, best_score
    );

    pos.apply(best_move);

    Ok(SearchReport {
        best_move,
        score: best_score,
        nodes_searched: nodes,
    })
}
