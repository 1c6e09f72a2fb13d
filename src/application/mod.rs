mod simulation;

pub use simulation::{Outcome, Simulation};
