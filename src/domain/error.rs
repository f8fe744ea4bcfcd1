use thiserror::Error;

/// Errors raised by board construction and direct cell access.
/// All of them are caller mistakes; nothing here is retried.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("random density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}
