use crate::QueueError;

#[derive(Debug)]
pub(crate) struct Node<T, P> {
    pub(crate) priority: P,
    pub(crate) payload: T,
}

/// Array-backed binary min-heap with a hard capacity.
///
/// Storage for exactly `capacity` nodes is reserved up front and `nodes` never grows past it, so
/// pushes never reallocate. Not synchronized; see [`crate::BoundedMinHeap`] for the locked queue.
#[derive(Debug)]
pub(crate) struct Heap<T, P> {
    nodes: Vec<Node<T, P>>,
    capacity: usize,
}

impl<T, P> Heap<T, P> {
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, QueueError> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(capacity)
            .map_err(|_| QueueError::Allocation { capacity })?;
        Ok(Self { nodes, capacity })
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.nodes.len() == self.capacity
    }

    pub(crate) fn peek(&self) -> Option<&Node<T, P>> {
        self.nodes.first()
    }

    /// Removes every node in index order, leaving the reserved storage in place.
    pub(crate) fn take_all(&mut self) -> std::vec::Drain<'_, Node<T, P>> {
        self.nodes.drain(..)
    }
}

impl<T, P: Ord + Copy> Heap<T, P> {
    /// Appends the node and sifts it up. A full heap hands the payload straight back.
    pub(crate) fn push(&mut self, payload: T, priority: P) -> Result<(), T> {
        if self.is_full() {
            return Err(payload);
        }
        self.nodes.push(Node { priority, payload });
        self.sift_up(self.nodes.len() - 1);
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }
        // Moves the last node into the root slot.
        let min = self.nodes.swap_remove(0);
        self.sift_down(0);
        Some(min.payload)
    }

    /// Walks the node towards the root while its parent has a strictly greater priority.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.nodes[parent].priority <= self.nodes[pos].priority {
                break;
            }
            self.nodes.swap(parent, pos);
            pos = parent;
        }
    }

    /// Walks the node towards the leaves, always swapping with the smaller child.
    /// Equal children resolve to the left one.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.nodes[right].priority < self.nodes[left].priority {
                right
            } else {
                left
            };

            if self.nodes[pos].priority <= self.nodes[child].priority {
                break;
            }
            self.nodes.swap(pos, child);
            pos = child;
        }
    }

    /// Every populated node is no greater than its children.
    pub(crate) fn is_valid(&self) -> bool {
        (1..self.nodes.len()).all(|i| self.nodes[(i - 1) / 2].priority <= self.nodes[i].priority)
    }
}
