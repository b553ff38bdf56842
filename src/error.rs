use thiserror::Error;

/// A requested window violates the ordering or width invariants. This is a
/// programming error on the caller's side; the engine rejects the call and
/// leaves its current window and frame untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window bounds reversed: low {low} > high {high}")]
    ReversedBounds { low: u64, high: u64 },
    #[error("window [{low}, {high}] is {width} wide, maximum is {max_width}")]
    TooWide {
        low: u64,
        high: u64,
        width: u64,
        max_width: u64,
    },
}

/// A transient failure reported by the host's node client when a block
/// fetch could not complete. The engine logs it and keeps its previous
/// frame; retry policy belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("block fetch failed: {reason}")]
pub struct FetchError {
    pub reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
