use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{InsertError, PriorityQueue, QueueError, heap::Heap};

/// Cleanup applied to every payload still queued when a [`BoundedMinHeap`] is torn down.
pub type Destructor<T> = Box<dyn Fn(T) + Send + Sync>;

/// Fixed-capacity, thread-safe minimum priority queue.
///
/// Payloads are opaque to the queue: it never inspects them, it only moves them between the
/// caller and its backing array. All operations take a single queue-wide lock, held for a number
/// of steps proportional to the heap height.
///
/// ```
/// use minque::{BoundedMinHeap, PriorityQueue};
///
/// let queue = BoundedMinHeap::new(3).unwrap();
/// queue.insert("later", 9).unwrap();
/// queue.insert("sooner", 1).unwrap();
/// assert_eq!(queue.extract(), Ok("sooner"));
/// ```
pub struct BoundedMinHeap<T, P = u16> {
    heap: Mutex<Heap<T, P>>,
    destructor: Option<Destructor<T>>,
}

impl<T, P: Ord + Copy> BoundedMinHeap<T, P> {
    /// Creates a queue holding at most `capacity` payloads. Leftover payloads are dropped
    /// normally on teardown.
    ///
    /// # Errors
    /// [`QueueError::Allocation`] when storage for `capacity` nodes cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Self::create(capacity, None)
    }

    /// Creates a queue whose leftover payloads are handed to `destructor` on teardown.
    pub fn with_destructor<F>(capacity: usize, destructor: F) -> Result<Self, QueueError>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::create(capacity, Some(Box::new(destructor)))
    }

    fn create(capacity: usize, destructor: Option<Destructor<T>>) -> Result<Self, QueueError> {
        let heap = Heap::with_capacity(capacity).inspect_err(|e| {
            tracing::debug!(capacity, "failed to create queue: {e}");
        })?;
        Ok(Self {
            heap: Mutex::new(heap),
            destructor,
        })
    }

    /// Runs `f` on the current minimum without removing it.
    ///
    /// `f` runs while the lock is held. If it panics the lock is poisoned and later mutations
    /// fail with [`QueueError::Invalid`]; the stored nodes themselves are left untouched.
    pub fn peek_with<R>(&self, f: impl FnOnce(&T, P) -> R) -> Result<R, QueueError> {
        let heap = self.lock()?;
        let node = heap.peek().ok_or(QueueError::Empty)?;
        Ok(f(&node.payload, node.priority))
    }

    /// Tears the queue down, passing every remaining payload to the destructor.
    ///
    /// Dropping the queue has the same effect; this method only makes the point of teardown
    /// explicit. Consuming `self` rules out a second call.
    pub fn destroy(self) {
        drop(self);
    }
}

impl<T, P> BoundedMinHeap<T, P> {
    fn lock(&self) -> Result<MutexGuard<'_, Heap<T, P>>, QueueError> {
        self.heap.lock().map_err(|_| QueueError::Invalid)
    }

    /// Read-only access that survives a poisoned lock. The lock is poisoned either by a panicking
    /// `Ord` impl of `P` mid-sift or by a panicking `peek_with` closure. Sifts only swap nodes, so
    /// every node is still present either way, and `is_consistent` reports whether their order
    /// suffered.
    fn read(&self) -> MutexGuard<'_, Heap<T, P>> {
        self.heap.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, P> PriorityQueue<T, P> for BoundedMinHeap<T, P>
where
    T: Send,
    P: Ord + Copy + Send,
{
    fn insert(&self, payload: T, priority: P) -> Result<(), InsertError<T>> {
        let mut heap = match self.lock() {
            Ok(heap) => heap,
            Err(e) => return Err(InsertError::new(e, payload)),
        };
        heap.push(payload, priority).map_err(|payload| {
            tracing::debug!(capacity = heap.capacity(), "insert rejected, queue is full");
            InsertError::new(
                QueueError::Full {
                    capacity: heap.capacity(),
                },
                payload,
            )
        })?;
        tracing::trace!(count = heap.len(), "inserted");
        Ok(())
    }

    fn extract(&self) -> Result<T, QueueError> {
        let mut heap = self.lock()?;
        let Some(payload) = heap.pop() else {
            tracing::debug!("extract failed, queue is empty");
            return Err(QueueError::Empty);
        };
        tracing::trace!(count = heap.len(), "extracted");
        Ok(payload)
    }

    fn peek_priority(&self) -> Result<P, QueueError> {
        self.peek_with(|_, priority| priority)
    }

    /// Holds the lock for the whole batch, so the returned payloads are consecutive minima.
    fn drain(&self, n: usize) -> Vec<T> {
        let Ok(mut heap) = self.lock() else {
            return vec![];
        };
        let mut items = Vec::with_capacity(n.min(heap.len()));
        for _ in 0..n {
            let Some(value) = heap.pop() else {
                break;
            };
            items.push(value);
        }
        items
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn capacity(&self) -> usize {
        self.read().capacity()
    }

    fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn is_full(&self) -> bool {
        self.read().is_full()
    }

    fn is_consistent(&self) -> bool {
        self.read().is_valid()
    }
}

impl<T, P> Drop for BoundedMinHeap<T, P> {
    fn drop(&mut self) {
        // `&mut self` already guarantees exclusive access, no locking required.
        let heap = self.heap.get_mut().unwrap_or_else(PoisonError::into_inner);
        let remaining = heap.len();
        if remaining == 0 {
            return;
        }

        match &self.destructor {
            Some(destructor) => {
                tracing::debug!(remaining, "destroying remaining payloads");
                for node in heap.take_all() {
                    destructor(node.payload);
                }
            }
            None => {
                tracing::debug!(remaining, "dropping remaining payloads");
                heap.take_all().for_each(drop);
            }
        }
    }
}

impl<T, P> fmt::Debug for BoundedMinHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heap = self.read();
        f.debug_struct("BoundedMinHeap")
            .field("count", &heap.len())
            .field("capacity", &heap.capacity())
            .field("has_destructor", &self.destructor.is_some())
            .finish()
    }
}
