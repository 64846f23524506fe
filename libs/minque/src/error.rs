use std::fmt;

/// Failure conditions reported by a [`PriorityQueue`](crate::PriorityQueue).
///
/// All of them are local and recoverable: the queue never retries on its own, so any
/// back-off policy (e.g. spinning until space frees up) belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("could not allocate storage for {capacity} nodes, try a smaller capacity")]
    Allocation { capacity: usize },
    #[error("queue is full (capacity {capacity})")]
    Full { capacity: usize },
    #[error("queue is empty")]
    Empty,
    /// The queue is absent or was left unusable by a thread that panicked while holding its lock.
    #[error("queue is absent or no longer usable")]
    Invalid,
}

/// Returned by a rejected insert.
///
/// The queue never takes ownership of a payload it could not store, so the payload travels back
/// to the caller inside the error.
pub struct InsertError<T> {
    error: QueueError,
    payload: T,
}

impl<T> InsertError<T> {
    pub fn new(error: QueueError, payload: T) -> Self {
        Self { error, payload }
    }

    pub fn error(&self) -> QueueError {
        self.error
    }

    /// Hands the rejected payload back to the caller.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

// Manual impls so that `T` needs no `Debug` bound, same as the std channel errors.
impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insert rejected: {}", self.error)
    }
}

impl<T> std::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<InsertError<T>> for QueueError {
    fn from(value: InsertError<T>) -> Self {
        value.error
    }
}
