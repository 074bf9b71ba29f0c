//! MinimaxPlayer - the agent-side session object.
//!
//! The host owns one `MinimaxPlayer` per game and passes the live position in
//! on every agent turn. All agent state lives here (side, difficulty, RNG for
//! root-move variety); the search itself keeps nothing between calls.

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::game_repr::{Color, Position};

use super::search::{select_best_move, SearchError, SearchReport};

/// Difficulty levels that map to the search's ply budget.
///
/// The recursion depth equals the ply budget, so even Expert keeps the stack
/// shallow; what grows with depth is the tree width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// 1 ply: pick the immediately best-scoring reply.
    Easy,
    /// 2 plies: account for the opponent's direct refutation.
    Medium,
    /// 3 plies: the default strength.
    Hard,
    /// 4 plies: strongest setting, noticeably slower.
    Expert,
}

impl Difficulty {
    /// Search depth in plies for this difficulty level.
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    /// Display name for this difficulty level.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Hard
    }
}

/// Chess agent backed by the alpha-beta minimax search.
pub struct MinimaxPlayer {
    /// Side this agent plays.
    color: Color,
    /// Difficulty level determining search depth.
    difficulty: Difficulty,
    /// RNG for root-move shuffling. Seedable for reproducible games.
    rng: SmallRng,
    /// Display name used in logging.
    name: String,
}

impl MinimaxPlayer {
    /// Create a player with custom difficulty and name.
    pub fn new(color: Color, difficulty: Difficulty, name: String) -> Self {
        Self {
            color,
            difficulty,
            rng: SmallRng::from_entropy(),
            name,
        }
    }

    /// Create a player with an auto-generated `"AI ({difficulty})"` name.
    pub fn with_difficulty(color: Color, difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(color, difficulty, name)
    }

    /// Create a player whose root-move shuffling is reproducible.
    pub fn with_seed(color: Color, difficulty: Difficulty, seed: u64) -> Self {
        let mut player = Self::with_difficulty(color, difficulty);
        player.rng = SmallRng::seed_from_u64(seed);
        player
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change strength for future turns. Updates auto-generated names.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Select and commit this agent's move on `pos`.
    ///
    /// The host calls this once per agent turn, after checking for game over
    /// on its side; a position whose game already ended is rejected with
    /// [`SearchError::GameOver`] rather than searched. On success exactly one
    /// ply has been applied to `pos` — the returned move.
    pub fn choose_move<P: Position>(
        &mut self,
        pos: &mut P,
    ) -> Result<SearchReport<P::Move>, SearchError> {
        if pos.is_game_over() {
            return Err(SearchError::GameOver);
        }

        let report = select_best_move(pos, self.difficulty.max_depth(), Some(&mut self.rng))?;

        info!(
            "[{}] played {:?} (score {}, {} nodes)",
            self.name, report.best_move, report.score, report.nodes_searched
        );

        Ok(report)
    }
}
