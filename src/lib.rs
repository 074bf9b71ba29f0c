//! Move selection for a chess-playing agent.
//!
//! The crate contains exactly two concerns: a static evaluation of board
//! positions and a fixed-depth minimax search with alpha-beta pruning on top
//! of it. Everything a chess program otherwise needs (legal-move generation,
//! check and game-over detection, notation, UI) is expected from the host
//! behind the [`game_repr::Position`] trait.

pub mod agent;
pub mod game_repr;
