use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RoundError {
    #[error("Candidate pool has {distinct} distinct values, {required} are needed")]
    PoolTooSmall { distinct: usize, required: usize },
    #[error("A session needs at least one round")]
    NoRounds,
    #[error("Success threshold {0} is outside 0..=1")]
    InvalidThreshold(f64),
    #[error("Session already finished, no further rounds are accepted")]
    SessionFinished,
}

pub type Result<T> = core::result::Result<T, RoundError>;
