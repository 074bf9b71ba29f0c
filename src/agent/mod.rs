pub mod ai;

pub use ai::{Difficulty, MinimaxPlayer, SearchError, SearchReport};
