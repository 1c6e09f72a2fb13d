use rand::Rng;
use tracing::{debug, trace};

use super::{BoardError, BoardResult, Cell};

/// Relative positions of the eight surrounding cells
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// GameBoard is a fixed-size Game of Life grid.
///
/// Cells live in one flat row-major buffer indexed by `y * width + x`.
/// Width and height never change after construction, so the buffer length
/// always equals `width * height`.
///
/// The grid is bounded, not toroidal: anything outside
/// `[0, width) x [0, height)` reads as [`Cell::Dead`] and ignores writes.
/// Two boards compare equal when their dimensions and every cell match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameBoard {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GameBoard {
    /// Create a board with every cell dead. Zero-sized boards are valid.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows. Use [`GameBoard::try_new`] to
    /// get an error instead.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::with_dimensions(width, height) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a board from signed dimensions, rejecting negative sizes.
    pub fn try_new(width: isize, height: isize) -> BoardResult<Self> {
        let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
            return Err(BoardError::InvalidDimension { width, height });
        };
        Self::with_dimensions(w, h)
    }

    fn with_dimensions(width: usize, height: usize) -> BoardResult<Self> {
        // Coordinates are signed, so the cell count must stay addressable as isize.
        let len = width
            .checked_mul(height)
            .filter(|&len| isize::try_from(len).is_ok())
            .ok_or(BoardError::TooLarge { width, height })?;

        debug!(width, height, "created board");
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Flat index of `(x, y)`, or `None` when it lies off the board
    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some()
    }

    /// Cell at `(x, y)`; off-board positions are dead.
    pub fn get(&self, x: isize, y: isize) -> Cell {
        self.index(x, y).map_or(Cell::Dead, |idx| self.cells[idx])
    }

    /// Write a cell. Off-board writes are ignored.
    pub fn set(&mut self, x: isize, y: isize, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Count live cells among the eight around `(x, y)`.
    /// Positions past the edge contribute nothing.
    pub fn neighbors(&self, x: isize, y: isize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(nx, ny)| self.get(nx, ny).is_alive())
            .count() as u8
    }

    /// Every cell's next state, computed only from the current buffer
    fn evolved_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| {
                let x = (idx % self.width) as isize;
                let y = (idx / self.width) as isize;
                cell.evolve(self.neighbors(x, y))
            })
            .collect()
    }

    /// Pure form of [`GameBoard::iterate`]: the next generation as a new board.
    pub fn next_generation(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.evolved_cells(),
        }
    }

    /// Advance one generation in place.
    ///
    /// The whole next generation is computed from the untouched current
    /// buffer before any cell is replaced, so every cell updates
    /// simultaneously.
    pub fn iterate(&mut self) {
        self.cells = self.evolved_cells();
        trace!(population = self.population(), "advanced one generation");
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Make each cell alive with probability `density`, clamped to `[0, 1]`.
    /// A NaN density is treated as 0.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for cell in &mut self.cells {
            *cell = Cell::from(rng.random_bool(p));
        }
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn board_with(width: usize, height: usize, alive: &[(isize, isize)]) -> GameBoard {
        let mut board = GameBoard::new(width, height);
        for &(x, y) in alive {
            board.set(x, y, Cell::Alive);
        }
        board
    }

    fn live_cells(board: &GameBoard) -> Vec<(usize, usize)> {
        board
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Updates cells while scanning, letting later cells see earlier writes
    fn iterate_in_place(board: &mut GameBoard) {
        for y in 0..board.height() as isize {
            for x in 0..board.width() as isize {
                let next = board.get(x, y).evolve(board.neighbors(x, y));
                board.set(x, y, next);
            }
        }
    }

    #[test]
    fn test_new_board_is_dead() {
        let board = GameBoard::new(5, 4);
        assert_eq!(board.dimensions(), (5, 4));
        assert_eq!(board.iter_cells().count(), 20);
        assert!(board.is_empty());
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_zero_sized_boards() {
        for (w, h) in [(0, 0), (0, 7), (7, 0)] {
            let mut board = GameBoard::new(w, h);
            assert_eq!(board.iter_cells().count(), 0);
            assert_eq!(board.get(0, 0), Cell::Dead);
            board.set(0, 0, Cell::Alive);
            board.iterate();
            assert!(board.is_empty());
        }
    }

    #[test]
    fn test_try_new_rejects_negative_dimensions() {
        assert_eq!(
            GameBoard::try_new(-1, 3),
            Err(BoardError::InvalidDimension { width: -1, height: 3 })
        );
        assert_eq!(
            GameBoard::try_new(3, -2),
            Err(BoardError::InvalidDimension { width: 3, height: -2 })
        );
        assert_eq!(GameBoard::try_new(3, 2), Ok(GameBoard::new(3, 2)));
    }

    #[test]
    fn test_try_new_rejects_overflowing_dimensions() {
        let result = GameBoard::try_new(isize::MAX, 3);
        assert!(matches!(result, Err(BoardError::TooLarge { .. })));
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn test_new_panics_on_overflow() {
        let _ = GameBoard::new(usize::MAX, 2);
    }

    #[test]
    fn test_set_then_get_leaves_others_untouched() {
        let mut board = GameBoard::new(4, 3);
        board.set(2, 1, Cell::Alive);

        for (x, y, cell) in board.iter_cells() {
            let expected = if (x, y) == (2, 1) { Cell::Alive } else { Cell::Dead };
            assert_eq!(cell, expected, "at ({x}, {y})");
        }

        board.set(2, 1, Cell::Dead);
        assert!(board.is_empty());
    }

    #[test]
    fn test_out_of_bounds_reads_dead_and_ignores_writes() {
        let mut board = GameBoard::new(3, 3);
        board.randomize(&mut StdRng::seed_from_u64(1), 1.0);
        let before = board.clone();

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (isize::MIN, isize::MAX)] {
            assert!(!board.in_bounds(x, y));
            assert_eq!(board.get(x, y), Cell::Dead);
            board.set(x, y, Cell::Alive);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_in_bounds_edges() {
        let board = GameBoard::new(3, 2);
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(2, 1));
        assert!(!board.in_bounds(3, 1));
        assert!(!board.in_bounds(2, 2));
    }

    #[test]
    fn test_neighbors_full_board() {
        let mut board = GameBoard::new(3, 3);
        board.randomize(&mut StdRng::seed_from_u64(7), 1.0);

        assert_eq!(board.neighbors(1, 1), 8);
        assert_eq!(board.neighbors(0, 0), 3);
        assert_eq!(board.neighbors(1, 0), 5);
        // Just outside the corner only touches one cell
        assert_eq!(board.neighbors(-1, -1), 1);
        assert_eq!(board.neighbors(isize::MAX, isize::MAX), 0);
    }

    #[test]
    fn test_neighbors_excludes_self_and_does_not_wrap() {
        let board = board_with(5, 5, &[(0, 0), (4, 4), (4, 0)]);
        assert_eq!(board.neighbors(0, 0), 0);
        assert_eq!(board.neighbors(1, 1), 1);
        // Toroidal wrapping would count (0, 0) and (4, 4) here
        assert_eq!(board.neighbors(4, 0), 0);
    }

    #[test]
    fn test_iterate_is_simultaneous() {
        let mut board = board_with(3, 3, &[(0, 1), (1, 1), (2, 1)]);
        let mut scanned = board.clone();

        board.iterate();
        iterate_in_place(&mut scanned);

        assert_eq!(live_cells(&board), vec![(1, 0), (1, 1), (1, 2)]);
        assert_ne!(board, scanned, "in-place scanning should diverge");
    }

    #[test]
    fn test_next_generation_matches_iterate() {
        let mut board = GameBoard::new(16, 12);
        board.randomize(&mut StdRng::seed_from_u64(42), 0.35);

        let next = board.next_generation();
        board.iterate();
        assert_eq!(board, next);
    }

    #[test]
    fn test_edge_cells_die_without_wraparound() {
        // Blinker on the left edge, clipped by the border
        let mut board = board_with(4, 4, &[(0, 0), (0, 1), (0, 2)]);
        board.iterate();
        assert_eq!(live_cells(&board), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_equality_needs_matching_dimensions() {
        let wide = GameBoard::new(3, 2);
        let tall = GameBoard::new(2, 3);
        assert_ne!(wide, tall);
        assert_eq!(wide, wide.clone());
    }

    #[test]
    fn test_randomize_is_deterministic_for_seed() {
        let mut a = GameBoard::new(20, 20);
        let mut b = GameBoard::new(20, 20);
        a.randomize(&mut StdRng::seed_from_u64(9), 0.5);
        b.randomize(&mut StdRng::seed_from_u64(9), 0.5);
        assert_eq!(a, b);
        assert!(a.population() > 0 && a.population() < 400);
    }

    #[test]
    fn test_randomize_clamps_density() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = GameBoard::new(10, 10);

        board.randomize(&mut rng, 2.5);
        assert_eq!(board.population(), 100);

        board.randomize(&mut rng, -1.0);
        assert!(board.is_empty());

        board.randomize(&mut rng, f64::NAN);
        assert!(board.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut board = board_with(10, 10, &[(0, 0), (5, 5), (9, 9)]);
        assert_eq!(board.population(), 3);
        board.clear();
        assert_eq!(board.population(), 0);
    }
}
