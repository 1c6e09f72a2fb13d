use super::{BoardError, BoardResult, Cell, GameBoard};

/// A named seed pattern, stored as the relative positions of its live cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a pattern; its bounding box is derived from the cells.
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|&(x, _)| x.saturating_add(1)).max().unwrap_or(0);
        let height = cells.iter().map(|&(_, y)| y.saturating_add(1)).max().unwrap_or(0);
        Self { name, description, width, height, cells }
    }

    /// Absolute board positions of the live cells with the top-left corner
    /// at `(x, y)`. `None` marks a cell whose position is not representable,
    /// which is always off the board.
    fn positions(&self, x: isize, y: isize) -> impl Iterator<Item = Option<(isize, isize)>> + '_ {
        self.cells.iter().map(move |&(dx, dy)| {
            let px = x.checked_add(isize::try_from(dx).ok()?)?;
            let py = y.checked_add(isize::try_from(dy).ok()?)?;
            Some((px, py))
        })
    }

    /// Stamp the pattern onto the board. Cells past the edge are dropped.
    pub fn place_on(&self, board: &mut GameBoard, x: isize, y: isize) {
        for (px, py) in self.positions(x, y).flatten() {
            board.set(px, py, Cell::Alive);
        }
    }

    /// Like [`Pattern::place_on`], but refuses to clip: the board is left
    /// untouched unless every cell fits.
    pub fn try_place_on(&self, board: &mut GameBoard, x: isize, y: isize) -> BoardResult<()> {
        let fits = self
            .positions(x, y)
            .all(|pos| pos.is_some_and(|(px, py)| board.in_bounds(px, py)));
        if !fits {
            return Err(BoardError::PatternOutOfBounds { name: self.name, x, y });
        }
        self.place_on(board, x, y);
        Ok(())
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Beehive - six-cell still life
    pub fn beehive() -> Pattern {
        Pattern::new(
            "Beehive",
            "Still life",
            vec![
                (1, 0), (2, 0),
                (0, 1), (3, 1),
                (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// R-pentomino - methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            beehive(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            r_pentomino(),
        ]
    }
}
