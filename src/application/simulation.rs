use std::collections::HashMap;

use tracing::debug;

use crate::domain::GameBoard;

/// How a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell died; `generation` is the first all-dead generation
    Extinct { generation: u64 },
    /// The board stopped changing at `generation`
    StillLife { generation: u64 },
    /// The board first entered a cycle of length `period` at `generation`
    Oscillator { period: u64, generation: u64 },
    /// No repeat seen before the limit; `generation` is where the run stopped
    Undecided { generation: u64 },
}

/// Simulation drives a board through generations and keeps count.
pub struct Simulation {
    board: GameBoard,
    generation: u64,
}

impl Simulation {
    pub fn new(board: GameBoard) -> Self {
        Self { board, generation: 0 }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn into_board(self) -> GameBoard {
        self.board
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance by one generation
    pub fn step(&mut self) {
        self.board.iterate();
        self.generation += 1;
    }

    /// Advance by `generations` generations
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Step until the board repeats a state it held before, or until
    /// `max_generations` more generations have passed.
    ///
    /// Every visited board is remembered, so memory grows with the number
    /// of generations run.
    pub fn run_until_stable(&mut self, max_generations: u64) -> Outcome {
        let mut seen = HashMap::new();
        seen.insert(self.board.clone(), self.generation);

        for _ in 0..max_generations {
            self.step();

            if let Some(&first) = seen.get(&self.board) {
                let period = self.generation - first;
                let outcome = if self.board.is_empty() {
                    Outcome::Extinct { generation: first }
                } else if period == 1 {
                    Outcome::StillLife { generation: first }
                } else {
                    Outcome::Oscillator { period, generation: first }
                };
                debug!(?outcome, generation = self.generation, "board repeated");
                return outcome;
            }

            seen.insert(self.board.clone(), self.generation);
        }

        debug!(generation = self.generation, max_generations, "no repeat within limit");
        Outcome::Undecided { generation: self.generation }
    }
}
