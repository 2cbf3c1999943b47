use std::fmt::Debug;

use crate::data_structures::priority_queue::{PriorityQueue, QueueError, QueueHandle};

/// Array-based binary min-heap with an index map for true decrease-key
///
/// `position[v]` tracks where vertex `v` currently sits in `heap`, so a
/// decrease-key is a sift-up from that slot. There are never duplicate or stale
/// entries. Ties on key go to the smaller vertex id.
#[derive(Debug, Clone)]
pub struct BinaryHeapQueue<W> {
    /// Heap-ordered `(key, vertex)` entries
    heap: Vec<(W, usize)>,
    /// Heap slot of each vertex's live entry
    position: Vec<Option<usize>>,
    /// Bumped on every insert so handles of extracted entries go stale
    generations: Vec<u32>,
}

impl<W> BinaryHeapQueue<W>
where
    W: Copy + Debug + Ord,
{
    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap.first().map(|&(key, vertex)| (vertex, key))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].1] = Some(a);
        self.position[self.heap[b].1] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot] >= self.heap[parent] {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl<W> PriorityQueue<W> for BinaryHeapQueue<W>
where
    W: Copy + Debug + Ord,
{
    fn with_capacity(vertex_hint: usize) -> Self {
        BinaryHeapQueue {
            heap: Vec::with_capacity(vertex_hint),
            position: vec![None; vertex_hint],
            generations: vec![0; vertex_hint],
        }
    }

    fn insert(&mut self, vertex: usize, key: W) -> Result<QueueHandle, QueueError> {
        if vertex >= self.position.len() {
            self.position.resize(vertex + 1, None);
            self.generations.resize(vertex + 1, 0);
        }
        if self.position[vertex].is_some() {
            return Err(QueueError::DuplicateEntry(vertex));
        }

        let slot = self.heap.len();
        self.heap.push((key, vertex));
        self.position[vertex] = Some(slot);
        self.sift_up(slot);
        self.generations[vertex] = self.generations[vertex].wrapping_add(1);
        Ok(QueueHandle::with_generation(vertex, self.generations[vertex]))
    }

    fn extract_min(&mut self) -> Option<(usize, W)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (key, vertex) = self.heap.pop()?;
        self.position[vertex] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((vertex, key))
    }

    fn decrease_key(&mut self, handle: QueueHandle, new_key: W) -> Result<(), QueueError> {
        let vertex = handle.index();
        if self.generations.get(vertex) != Some(&handle.generation()) {
            return Err(QueueError::InvalidHandle);
        }
        let slot = self
            .position
            .get(vertex)
            .copied()
            .flatten()
            .ok_or(QueueError::InvalidHandle)?;

        if new_key >= self.heap[slot].0 {
            return Err(QueueError::KeyNotDecreased { vertex });
        }
        self.heap[slot].0 = new_key;
        self.sift_up(slot);
        Ok(())
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, vertex: usize) -> bool {
        matches!(self.position.get(vertex), Some(Some(_)))
    }

    fn name(&self) -> &'static str {
        "BinaryHeap"
    }
}
