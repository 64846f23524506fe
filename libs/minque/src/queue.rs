use crate::{InsertError, QueueError};

/// Contract shared by every bounded minimum priority queue in the workspace.
///
/// Lower priority values are served first. Implementations serialize all callers on a single
/// lock, so every method may be called concurrently from any number of threads.
pub trait PriorityQueue<T, P = u16>: Send + Sync
where
    P: Ord + Copy,
{
    /// Stores `payload` with the given `priority`.
    ///
    /// # Errors
    /// Fails with [`QueueError::Full`] when the queue already holds `capacity` items. The payload
    /// is returned inside the [`InsertError`] and the queue is left untouched.
    fn insert(&self, payload: T, priority: P) -> Result<(), InsertError<T>>;

    /// Removes and returns the payload with the lowest priority.
    ///
    /// # Errors
    /// Fails with [`QueueError::Empty`] when there is nothing to extract.
    fn extract(&self) -> Result<T, QueueError>;

    /// Priority of the current minimum, without removing it.
    fn peek_priority(&self) -> Result<P, QueueError>;

    /// Extracts up to `n` payloads in ascending priority order.
    ///
    /// The default implementation calls [`PriorityQueue::extract`] repeatedly, so other callers
    /// may interleave. Implementations that can hold their lock for the whole batch should.
    fn drain(&self, n: usize) -> Vec<T> {
        let mut items = Vec::with_capacity(n);
        for _ in 0..n {
            let Ok(value) = self.extract() else {
                break;
            };
            items.push(value);
        }
        items
    }

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Verifies the implementation's ordering invariant. Meant for tests and instrumentation.
    fn is_consistent(&self) -> bool;
}

/// An absent queue counts as empty: there is nothing to extract from it.
pub fn is_empty<T, P, Q>(queue: Option<&Q>) -> bool
where
    P: Ord + Copy,
    Q: PriorityQueue<T, P> + ?Sized,
{
    queue.is_none_or(|q| q.is_empty())
}

/// Unlike [`is_empty`], fullness of an absent queue has no sensible answer.
///
/// # Errors
/// Returns [`QueueError::Invalid`] when `queue` is `None`.
pub fn is_full<T, P, Q>(queue: Option<&Q>) -> Result<bool, QueueError>
where
    P: Ord + Copy,
    Q: PriorityQueue<T, P> + ?Sized,
{
    queue.map(|q| q.is_full()).ok_or(QueueError::Invalid)
}
