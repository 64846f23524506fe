use std::sync::{Mutex, MutexGuard, PoisonError};

use minque::{InsertError, PriorityQueue, QueueError};

/// Naive implementation of a bounded priority queue that keeps all nodes sorted within a vector.
/// No heap is involved; it serves as a reference for the heap-based queue in tests and benches.
pub struct NaiveQueue<T, P = u16> {
    /// Sorted by descending priority, so the minimum sits at the end and can easily be `popped`.
    /// Among equal priorities the earliest insert sits closest to the end.
    pool: Mutex<Vec<(P, T)>>,
    capacity: usize,
}

impl<T, P> NaiveQueue<T, P> {
    /// # Errors
    /// [`QueueError::Allocation`] when storage for `capacity` entries cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        let mut pool = Vec::new();
        pool.try_reserve_exact(capacity).map_err(|_| QueueError::Allocation { capacity })?;
        Ok(Self {
            pool: Mutex::new(pool),
            capacity,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<(P, T)>>, QueueError> {
        self.pool.lock().map_err(|_| QueueError::Invalid)
    }

    fn read(&self) -> MutexGuard<'_, Vec<(P, T)>> {
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, P> PriorityQueue<T, P> for NaiveQueue<T, P>
where
    T: Send,
    P: Ord + Copy + Send,
{
    /// Linear insertion (~O(n) due to shifting the tail of the vector on every insert).
    fn insert(&self, payload: T, priority: P) -> Result<(), InsertError<T>> {
        let mut guard = match self.lock() {
            Ok(guard) => guard,
            Err(e) => return Err(InsertError::new(e, payload)),
        };
        if guard.len() == self.capacity {
            tracing::debug!(capacity = self.capacity, "insert rejected, queue is full");
            let error = QueueError::Full {
                capacity: self.capacity,
            };
            return Err(InsertError::new(error, payload));
        }

        let pos = guard.partition_point(|(p, _)| *p > priority);
        guard.insert(pos, (priority, payload));
        Ok(())
    }

    fn extract(&self) -> Result<T, QueueError> {
        let mut guard = self.lock()?;
        guard.pop().map(|(_, payload)| payload).ok_or(QueueError::Empty)
    }

    fn peek_priority(&self) -> Result<P, QueueError> {
        let guard = self.lock()?;
        guard.last().map(|(p, _)| *p).ok_or(QueueError::Empty)
    }

    fn drain(&self, n: usize) -> Vec<T> {
        let Ok(mut guard) = self.lock() else {
            return vec![];
        };
        let drain_start = guard.len().saturating_sub(n);

        let drained = guard.split_off(drain_start);
        // bring lowest priority to the front
        drained.into_iter().rev().map(|(_, payload)| payload).collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn is_consistent(&self) -> bool {
        self.read().windows(2).all(|pair| pair[0].0 >= pair[1].0)
    }
}

#[cfg(test)]
mod test_suite {
    use minque::test::suite;

    use super::NaiveQueue;

    struct NaiveTester;

    impl suite::Tester for NaiveTester {
        type Queue<T: Send + 'static> = NaiveQueue<T>;

        fn create_queue<T: Send + 'static>(&self, capacity: usize) -> NaiveQueue<T> {
            NaiveQueue::new(capacity).unwrap()
        }
    }

    #[test]
    fn ordering_scenario() {
        suite::test_ordering_scenario(NaiveTester);
    }

    #[test]
    fn capacity_boundary() {
        suite::test_capacity_boundary(NaiveTester);
    }

    #[test]
    fn zero_capacity() {
        suite::test_zero_capacity(NaiveTester);
    }

    #[test]
    fn empty_boundary() {
        suite::test_empty_boundary(NaiveTester);
    }

    #[test]
    fn round_trip() {
        suite::test_round_trip(NaiveTester);
    }

    #[test]
    fn min_order_extraction() {
        suite::test_min_order_extraction(NaiveTester);
    }

    #[test]
    fn drain() {
        suite::test_drain(NaiveTester);
    }

    #[test]
    fn absent_queue() {
        suite::test_absent_queue(NaiveTester);
    }

    #[test]
    fn present_queue_predicates() {
        suite::test_present_queue_predicates(NaiveTester);
    }

    #[test]
    fn concurrent_insert() {
        suite::test_concurrent_insert(NaiveTester);
    }

    #[test]
    fn concurrent_insert_and_extract() {
        suite::test_concurrent_insert_and_extract(NaiveTester);
    }

    #[test]
    fn concurrent_saturation() {
        suite::test_concurrent_saturation(NaiveTester);
    }
}
