//! Rules-engine adapter used by the integration tests and benches.
//!
//! The `chess` crate's `Board` is immutable (`make_move_new` returns a new
//! board), so the apply/undo contract is implemented as a stack of boards:
//! `apply` pushes the successor, `undo` pops it. LIFO by construction.

use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, MoveGen, ALL_SQUARES};

use chess_agent::game_repr::{Color, Piece, Position, Type};

pub struct StackedBoard {
    boards: Vec<Board>,
}

impl StackedBoard {
    /// Standard starting position.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::default()],
        }
    }

    pub fn from_fen(fen: &str) -> Self {
        Self {
            boards: vec![Board::from_str(fen).expect("valid FEN")],
        }
    }

    fn top(&self) -> &Board {
        self.boards.last().expect("stack never empty")
    }

    /// Plies applied on top of the initial board.
    pub fn ply(&self) -> usize {
        self.boards.len() - 1
    }

    /// Piece layout snapshot, for before/after comparisons.
    pub fn snapshot(&self) -> Vec<Option<Piece>> {
        (0..64).map(|square| self.piece_at(square)).collect()
    }

    pub fn piece_count(&self) -> usize {
        self.snapshot().iter().flatten().count()
    }
}

fn convert_color(color: chess::Color) -> Color {
    match color {
        chess::Color::White => Color::White,
        chess::Color::Black => Color::Black,
    }
}

fn convert_type(piece: chess::Piece) -> Type {
    match piece {
        chess::Piece::Pawn => Type::Pawn,
        chess::Piece::Knight => Type::Knight,
        chess::Piece::Bishop => Type::Bishop,
        chess::Piece::Rook => Type::Rook,
        chess::Piece::Queen => Type::Queen,
        chess::Piece::King => Type::King,
    }
}

impl Position for StackedBoard {
    type Move = ChessMove;

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(self.top()).collect()
    }

    fn apply(&mut self, mv: ChessMove) {
        let next = self.top().make_move_new(mv);
        self.boards.push(next);
    }

    fn undo(&mut self) {
        self.boards.pop();
    }

    fn piece_at(&self, square: u8) -> Option<Piece> {
        let sq = ALL_SQUARES[square as usize];
        let piece = self.top().piece_on(sq)?;
        let color = self.top().color_on(sq)?;
        Some(Piece::new(convert_color(color), convert_type(piece)))
    }

    fn is_game_over(&self) -> bool {
        self.top().status() != BoardStatus::Ongoing
    }
}
