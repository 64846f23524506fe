//! Fixed-capacity, thread-safe minimum priority queues.

mod bounded;
mod error;
mod heap;
mod queue;
pub mod test;

// region:    --- Exports
pub use bounded::{BoundedMinHeap, Destructor};
pub use error::{InsertError, QueueError};
pub use queue::{PriorityQueue, is_empty, is_full};
// endregion: --- Exports
