// Domain layer - board, cells, patterns
pub mod domain;

// Application layer - driving generations
pub mod application;

// Re-exports for convenience
pub use domain::{BoardError, BoardResult, Cell, GameBoard, Pattern, presets};
pub use application::{Outcome, Simulation};
