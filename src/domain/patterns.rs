use super::{Board, BoardError};

/// Represents a pattern that can be stamped onto the board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(
        name: &'static str,
        description: &'static str,
        cells: Vec<(usize, usize)>,
    ) -> Self {
        let rows = cells.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Nothing is written unless every cell fits on the board.
    pub fn place_on(&self, board: &mut Board, row: usize, col: usize) -> Result<(), BoardError> {
        let (rows, cols) = board.dimensions();
        let targets = self
            .cells
            .iter()
            .map(|&(dr, dc)| {
                let r = row.checked_add(dr).filter(|&r| r < rows);
                let c = col.checked_add(dc).filter(|&c| c < cols);
                r.zip(c).ok_or(BoardError::OutOfBounds {
                    row: row.saturating_add(dr),
                    col: col.saturating_add(dc),
                    rows,
                    cols,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        targets
            .into_iter()
            .try_for_each(|(r, c)| board.force_alive(r, c))
    }

    /// Top-left corner that centres the pattern on a board of the given size
    pub fn centered_origin(&self, rows: usize, cols: usize) -> (usize, usize) {
        (rows.saturating_sub(self.rows) / 2, cols.saturating_sub(self.cols) / 2)
    }
}

/// Small classic patterns, bound to the number keys in the window
pub mod presets {
    use super::*;

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(1, 0), (1, 1), (1, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - travels diagonally, and wraps forever on a torus
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Get all available patterns, in key order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }
}
