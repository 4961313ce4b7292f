use thiserror::Error;

/// Errors surfaced at the engine boundary (construction and sampling).
/// Numerical divergence from unstable parameter choices is deliberately not an
/// error: it propagates into subsequent ticks and shows up as abnormal samples.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// A 1-cell boundary margin on each side requires at least a 3x3 grid.
    #[error("grid of {rows}x{cols} is too small: need at least 3x3 for an interior")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Rate constants must be finite and non-negative.
    #[error("parameter {name} = {value} must be finite and non-negative")]
    InvalidParameters { name: &'static str, value: f64 },

    /// Sample coordinates outside the grid.
    #[error("coordinates ({x}, {y}) outside {rows}x{cols} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        rows: usize,
        cols: usize,
    },
}
