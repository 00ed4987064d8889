use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeConfigError {
    #[error("Tick period must be at least 1 ms")]
    ZeroTick,
    #[error("Grid {width}x{height} has no cells")]
    EmptyGrid { width: usize, height: usize },
    #[error("Initial snake length {length} does not fit, must be between 1 and {max}")]
    InitialLength { length: usize, max: usize },
}
