use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::Error;

/// Opaque reference to a live queue entry, returned by [`PriorityQueue::insert`]
///
/// Only the queue that issued a handle can interpret it. A handle becomes
/// invalid once its entry has been extracted, and stays invalid even if the
/// same vertex is inserted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueHandle {
    index: usize,
    /// Insertion count of the slot at `index` when the handle was issued
    generation: u32,
}

impl QueueHandle {
    pub(crate) fn new(index: usize) -> Self {
        QueueHandle::with_generation(index, 0)
    }

    pub(crate) fn with_generation(index: usize, generation: u32) -> Self {
        QueueHandle { index, generation }
    }

    pub(crate) fn index(self) -> usize {
        self.index
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

/// Misuse of the priority queue protocol
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("vertex {0} already has a live entry")]
    DuplicateEntry(usize),

    #[error("new key for vertex {vertex} is not smaller than its current key")]
    KeyNotDecreased { vertex: usize },

    #[error("handle does not refer to a live entry")]
    InvalidHandle,
}

/// Min-priority queue of `(vertex, key)` entries with decrease-key
///
/// At most one live entry per vertex may exist. A vertex can be inserted again
/// once its previous entry has been extracted.
pub trait PriorityQueue<W>
where
    W: Copy + Debug + Ord,
{
    /// Creates an empty queue sized for vertices `0..vertex_hint`
    fn with_capacity(vertex_hint: usize) -> Self
    where
        Self: Sized;

    /// Adds a new entry and returns a handle for later `decrease_key` calls
    fn insert(&mut self, vertex: usize, key: W) -> Result<QueueHandle, QueueError>;

    /// Removes and returns the entry with the smallest key
    fn extract_min(&mut self) -> Option<(usize, W)>;

    /// Lowers the key of a live entry; `new_key` must be strictly smaller
    fn decrease_key(&mut self, handle: QueueHandle, new_key: W) -> Result<(), QueueError>;

    /// Returns true if no entries are live
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live entries
    fn len(&self) -> usize;

    /// Returns true if the vertex has a live entry
    fn contains(&self, vertex: usize) -> bool;

    /// Name of the strategy, for logs and reports
    fn name(&self) -> &'static str;
}

/// Selects which priority queue backs a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueStrategy {
    /// O(V) scan per extraction
    #[serde(alias = "unordered", alias = "linear")]
    LinearScan,
    /// Indexed binary heap, O(log n) extraction and decrease-key
    #[serde(alias = "minheap", alias = "binary")]
    BinaryHeap,
    /// Fibonacci heap, O(1) amortized insert and decrease-key
    #[default]
    #[serde(alias = "fib")]
    Fibonacci,
}

impl QueueStrategy {
    /// Every strategy, cheapest-structure first
    pub const ALL: [QueueStrategy; 3] = [
        QueueStrategy::LinearScan,
        QueueStrategy::BinaryHeap,
        QueueStrategy::Fibonacci,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QueueStrategy::LinearScan => "linearscan",
            QueueStrategy::BinaryHeap => "binaryheap",
            QueueStrategy::Fibonacci => "fibonacci",
        }
    }
}

impl fmt::Display for QueueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linearscan" | "linear" | "unordered" => Ok(QueueStrategy::LinearScan),
            "binaryheap" | "binary" | "minheap" => Ok(QueueStrategy::BinaryHeap),
            "fibonacci" | "fib" => Ok(QueueStrategy::Fibonacci),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}
