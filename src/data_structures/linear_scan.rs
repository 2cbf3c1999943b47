use std::fmt::Debug;

use crate::data_structures::priority_queue::{PriorityQueue, QueueError, QueueHandle};

/// Priority queue without auxiliary structure: a dense key table scanned on every extraction
///
/// `insert` and `decrease_key` are O(1) field writes, `extract_min` is O(V).
/// Ties go to the smaller vertex id.
#[derive(Debug, Clone)]
pub struct LinearScanQueue<W> {
    /// Key of the live entry for each vertex
    keys: Vec<Option<W>>,
    /// Bumped on every insert so handles of extracted entries go stale
    generations: Vec<u32>,
    len: usize,
}

impl<W> PriorityQueue<W> for LinearScanQueue<W>
where
    W: Copy + Debug + Ord,
{
    fn with_capacity(vertex_hint: usize) -> Self {
        LinearScanQueue {
            keys: vec![None; vertex_hint],
            generations: vec![0; vertex_hint],
            len: 0,
        }
    }

    fn insert(&mut self, vertex: usize, key: W) -> Result<QueueHandle, QueueError> {
        if vertex >= self.keys.len() {
            self.keys.resize(vertex + 1, None);
            self.generations.resize(vertex + 1, 0);
        }
        if self.keys[vertex].is_some() {
            return Err(QueueError::DuplicateEntry(vertex));
        }

        self.keys[vertex] = Some(key);
        self.generations[vertex] = self.generations[vertex].wrapping_add(1);
        self.len += 1;
        Ok(QueueHandle::with_generation(vertex, self.generations[vertex]))
    }

    fn extract_min(&mut self) -> Option<(usize, W)> {
        let mut best: Option<(usize, W)> = None;
        for (vertex, key) in self.keys.iter().enumerate() {
            if let Some(key) = *key {
                match best {
                    Some((_, best_key)) if best_key <= key => {}
                    _ => best = Some((vertex, key)),
                }
            }
        }

        let (vertex, key) = best?;
        self.keys[vertex] = None;
        self.len -= 1;
        Some((vertex, key))
    }

    fn decrease_key(&mut self, handle: QueueHandle, new_key: W) -> Result<(), QueueError> {
        let vertex = handle.index();
        if self.generations.get(vertex) != Some(&handle.generation()) {
            return Err(QueueError::InvalidHandle);
        }
        let slot = self
            .keys
            .get_mut(vertex)
            .and_then(Option::as_mut)
            .ok_or(QueueError::InvalidHandle)?;

        if new_key >= *slot {
            return Err(QueueError::KeyNotDecreased { vertex });
        }
        *slot = new_key;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, vertex: usize) -> bool {
        matches!(self.keys.get(vertex), Some(Some(_)))
    }

    fn name(&self) -> &'static str {
        "LinearScan"
    }
}
