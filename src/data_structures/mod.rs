pub mod priority_queue;
pub mod linear_scan;
pub mod binary_heap;
pub mod fibonacci_heap;

pub use priority_queue::{PriorityQueue, QueueError, QueueHandle, QueueStrategy};
pub use linear_scan::LinearScanQueue;
pub use binary_heap::BinaryHeapQueue;
pub use fibonacci_heap::{FibonacciHeapQueue, HeapStats};
