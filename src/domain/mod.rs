mod board;
mod cell;
mod error;
mod patterns;

pub use board::GameBoard;
pub use cell::Cell;
pub use error::{BoardError, BoardResult};
pub use patterns::{Pattern, presets};
