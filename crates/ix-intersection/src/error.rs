use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntersectionError {
    #[error("lane {0} does not exist (intersection has {1} lanes)")]
    UnknownLane(u32, usize),
}

pub type IntersectionResult<T> = Result<T, IntersectionError>;
