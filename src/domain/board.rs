use super::{BoardError, Cell};
use rand::Rng;
use rayon::prelude::*;

/// The eight Moore offsets around a cell as (row delta, col delta).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Board owns the toroidal cell grid.
/// Evolution never mutates the board being read; `step` returns a fresh one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of the given size with every cell dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let len = rows
            .checked_mul(cols)
            .filter(|_| rows > 0 && cols > 0)
            .ok_or(BoardError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get board dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major view of every cell, for renderers that want the whole grid
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get the cell at (row, col). Direct access never wraps.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite a single cell
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a single cell and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Make a cell alive regardless of its current state
    pub fn force_alive(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.set(row, col, Cell::Alive)
    }

    /// Count live neighbors of (row, col) with toroidal wrapping
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        self.checked_index(row, col)?;
        Ok(self.count_live_neighbors(row, col))
    }

    /// Wrap `index + delta` into `0..len`
    fn wrap(index: usize, delta: isize, len: usize) -> usize {
        (index as isize + delta).rem_euclid(len as isize) as usize
    }

    // Caller guarantees (row, col) is on the board.
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let nr = Self::wrap(row, dr, self.rows);
                let nc = Self::wrap(col, dc, self.cols);
                self.cells[self.index(nr, nc)].value()
            })
            .sum()
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.index(row, col)];
        current.evolve(self.count_live_neighbors(row, col))
    }

    /// Compute the next generation (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Compute the next generation with rows spread across the rayon pool.
    /// Produces exactly the same board as `step`.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.cols).map(move |col| self.next_cell(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the board at random, each cell alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        density: f64,
    ) -> Result<(), BoardError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(BoardError::InvalidDensity(density));
        }
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        Ok(())
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Board {
        let mut board = Board::new(rows, cols).unwrap();
        for &(r, c) in alive {
            board.force_alive(r, c).unwrap();
        }
        board
    }

    fn alive_cells(board: &Board) -> Vec<(usize, usize)> {
        board
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn test_new_board_is_dead() {
        let board = Board::new(4, 7).unwrap();
        assert_eq!(board.dimensions(), (4, 7));
        assert_eq!(board.cells().len(), 28);
        assert!(board.is_extinct());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 5),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Board::new(5, 0),
            Err(BoardError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_rejects_dimensions_that_overflow() {
        let (rows, cols) = (1usize << 33, 1usize << 32);
        assert_eq!(
            Board::new(rows, cols),
            Err(BoardError::InvalidDimensions { rows, cols })
        );
        assert!(Board::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_out_of_bounds_is_rejected_not_wrapped() {
        let mut board = Board::new(3, 4).unwrap();
        let expected = BoardError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 4 };

        assert_eq!(board.get(3, 0), Err(expected));
        assert_eq!(board.set(3, 0, Cell::Alive), Err(expected));
        assert_eq!(board.toggle(3, 0), Err(expected));
        assert_eq!(board.force_alive(3, 0), Err(expected));
        assert_eq!(board.live_neighbor_count(3, 0), Err(expected));
        assert!(board.get(0, 4).is_err());
        assert!(board.is_extinct(), "failed writes must not touch the board");
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(board.get(1, 2), Ok(Cell::Alive));
        board.set(1, 2, Cell::Dead).unwrap();
        assert_eq!(board.get(1, 2), Ok(Cell::Dead));
    }

    #[test]
    fn test_toggle_dead_once_and_twice() {
        let mut board = Board::new(3, 3).unwrap();
        assert_eq!(board.toggle(1, 1), Ok(Cell::Alive));
        assert_eq!(board.get(1, 1), Ok(Cell::Alive));
        assert_eq!(board.toggle(1, 1), Ok(Cell::Dead));
        assert_eq!(board.get(1, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_force_alive_is_idempotent() {
        let mut once = Board::new(3, 3).unwrap();
        once.force_alive(2, 0).unwrap();

        let mut many = Board::new(3, 3).unwrap();
        for _ in 0..5 {
            many.force_alive(2, 0).unwrap();
        }

        assert_eq!(once, many);
        assert_eq!(many.get(2, 0), Ok(Cell::Alive));
    }

    #[test]
    fn test_dead_board_stays_dead() {
        let board = Board::new(6, 9).unwrap();
        assert!(board.step().is_extinct());
    }

    #[test]
    fn test_neighbor_count_never_counts_self() {
        let board = board_with(5, 5, &[(2, 2)]);
        assert_eq!(board.live_neighbor_count(2, 2), Ok(0));
        assert_eq!(board.live_neighbor_count(1, 1), Ok(1));
    }

    #[test]
    fn test_full_board_counts_eight() {
        let mut board = Board::new(4, 4).unwrap();
        board.cells.iter_mut().for_each(|cell| *cell = Cell::Alive);
        for (r, c, _) in board.iter_cells() {
            assert_eq!(board.live_neighbor_count(r, c), Ok(8), "at ({}, {})", r, c);
        }
    }

    #[test]
    fn test_vertical_edges_wrap() {
        let rows = 6;
        // Bottom row is the "up" row of row 0
        let board = board_with(rows, 5, &[(rows - 1, 2)]);
        assert_eq!(board.live_neighbor_count(0, 2), Ok(1));
        assert_eq!(board.live_neighbor_count(0, 1), Ok(1));
        assert_eq!(board.live_neighbor_count(0, 3), Ok(1));

        // Top row is the "down" row of the last row
        let board = board_with(rows, 5, &[(0, 2)]);
        assert_eq!(board.live_neighbor_count(rows - 1, 2), Ok(1));
        assert_eq!(board.live_neighbor_count(rows - 2, 2), Ok(0));
    }

    #[test]
    fn test_horizontal_edges_wrap() {
        let cols = 7;
        let board = board_with(5, cols, &[(2, cols - 1)]);
        assert_eq!(board.live_neighbor_count(2, 0), Ok(1));

        let board = board_with(5, cols, &[(2, 0)]);
        assert_eq!(board.live_neighbor_count(2, cols - 1), Ok(1));
    }

    #[test]
    fn test_diagonal_wrap_on_3x3() {
        let board = board_with(3, 3, &[(0, 0), (2, 2)]);
        // (2, 2) is the wrapped top-left neighbour of (0, 0) and vice versa
        assert_eq!(board.live_neighbor_count(0, 0), Ok(1));
        assert_eq!(board.live_neighbor_count(2, 2), Ok(1));
    }

    #[test]
    fn test_isolated_cell_dies() {
        let board = board_with(5, 5, &[(2, 2)]);
        assert!(board.step().is_extinct());
    }

    #[test]
    fn test_blinker_oscillates() {
        let board = board_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let next = board.step();
        assert_eq!(alive_cells(&next), vec![(1, 2), (2, 2), (3, 2)]);

        let back = next.step();
        assert_eq!(back, board, "blinker has period 2");
    }

    #[test]
    fn test_block_still_life() {
        let board = board_with(5, 5, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(board.step(), board);
    }

    #[test]
    fn test_blinker_across_the_seam() {
        // Horizontal blinker straddling the left/right edge
        let board = board_with(5, 5, &[(2, 4), (2, 0), (2, 1)]);
        let next = board.step();
        assert_eq!(alive_cells(&next), vec![(1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_step_does_not_mutate_source() {
        let board = board_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let snapshot = board.clone();
        let _ = board.step();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(37, 53).unwrap();
        board.randomize(&mut rng, 0.35).unwrap();

        for _ in 0..10 {
            let serial = board.step();
            let parallel = board.step_parallel();
            assert_eq!(serial, parallel);
            board = serial;
        }
    }

    #[test]
    fn test_randomize_density_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(10, 10).unwrap();

        board.randomize(&mut rng, 0.0).unwrap();
        assert!(board.is_extinct());

        board.randomize(&mut rng, 1.0).unwrap();
        assert_eq!(board.population(), 100);

        assert_eq!(board.randomize(&mut rng, 1.5), Err(BoardError::InvalidDensity(1.5)));
        assert!(board.randomize(&mut rng, f64::NAN).is_err());
    }

    #[test]
    fn test_clear() {
        let mut board = board_with(4, 4, &[(0, 0), (3, 3)]);
        assert_eq!(board.population(), 2);
        board.clear();
        assert!(board.is_extinct());
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let board = board_with(2, 3, &[(1, 0)]);
        let positions: Vec<_> = board.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(alive_cells(&board), vec![(1, 0)]);
    }
}
