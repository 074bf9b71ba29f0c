// AI Agent - Minimax with Alpha-Beta Pruning
//
// Classical fixed-depth chess AI: a static material-plus-positional
// evaluation and a minimax tree search with alpha-beta pruning over it.
// The search is deterministic for a fixed move order; the root driver can
// shuffle root moves for variety, which never changes which scores exist,
// only which tying move is found first.

mod evaluation;
mod minimax;
mod minimax_player;
mod piece_square_tables;
mod search;

#[cfg(test)]
mod tests;

pub use evaluation::evaluate;
pub use minimax::{search, SCORE_INF};
pub use minimax_player::{Difficulty, MinimaxPlayer};
pub use search::{select_best_move, SearchError, SearchReport};
