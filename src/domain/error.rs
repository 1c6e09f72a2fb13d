//! Board error types.

use thiserror::Error;

/// Errors raised while building or seeding a board.
///
/// Cell reads and writes never fail: out-of-bounds coordinates read as
/// dead and writes to them are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Width or height was negative.
    #[error("invalid board dimensions {width}x{height}: width and height must be non-negative")]
    InvalidDimension { width: isize, height: isize },

    /// `width * height` does not fit in memory addressing.
    #[error("board dimensions {width}x{height} overflow the cell count")]
    TooLarge { width: usize, height: usize },

    /// A pattern placed strictly would spill over the board edge.
    #[error("pattern {name:?} does not fit on the board at ({x}, {y})")]
    PatternOutOfBounds { name: &'static str, x: isize, y: isize },
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
