mod piece;
mod position;

pub use piece::*;
pub use position::*;
