use ix_core::{EventError, LanePair};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("arrival parse error: {0}")]
    Parse(String),

    #[error("invalid arrival rate {rate} for lane {lane}: must be finite and at most {max}/h", max = crate::MAX_RATE_PER_HOUR)]
    InvalidRate { lane: LanePair, rate: f64 },

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
