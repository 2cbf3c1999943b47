//! Fibonacci heap priority queue
//!
//! A forest of heap-ordered multi-way trees whose roots form one circular
//! doubly-linked ring. Nodes live in an arena (`Vec<Node>`) and refer to each
//! other by index: `left`/`right` close each sibling ring, `child` points at any
//! one child, and `parent` is a non-owning back reference. A node starts as a
//! singleton ring pointing at itself.
//!
//! - `insert` splices a singleton into the root ring, O(1).
//! - `extract_min` promotes the minimum's children to roots, then consolidates
//!   the root ring by linking roots of equal degree until all degrees differ.
//! - `decrease_key` cuts a node that now violates heap order, then walks up
//!   marking parents; a parent losing its second child is cut as well
//!   (cascading cut). This keeps every subtree of degree `d` at least `F(d+2)`
//!   nodes large, which bounds root degrees by `log_phi(n)`.
//!
//! Arena slots are not reused, so a heap is meant to live for one search.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::data_structures::priority_queue::{PriorityQueue, QueueError, QueueHandle};

#[derive(Debug, Clone)]
struct Node<W> {
    vertex: usize,
    key: W,
    degree: usize,
    /// Lost a child since it last became a child itself
    mark: bool,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    live: bool,
}

/// Counters for the structural work done by a [`FibonacciHeapQueue`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapStats {
    pub inserts: usize,
    pub extractions: usize,
    pub decrease_keys: usize,
    /// Trees merged during consolidation
    pub links: usize,
    /// Nodes moved to the root ring by decrease-key, cascading cuts included
    pub cuts: usize,
    /// Cuts of marked ancestors
    pub cascading_cuts: usize,
    pub consolidations: usize,
}

/// Fibonacci heap with true O(1) amortized decrease-key
#[derive(Debug, Clone)]
pub struct FibonacciHeapQueue<W> {
    nodes: Vec<Node<W>>,
    min: Option<usize>,
    len: usize,
    /// Arena index of each vertex's live entry
    live: Vec<Option<usize>>,
    /// Scratch space reused by `consolidate`
    degree_table: Vec<Option<usize>>,
    root_scratch: Vec<usize>,
    stats: HeapStats,
}

impl<W> FibonacciHeapQueue<W>
where
    W: Copy + Debug + Ord,
{
    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.min.map(|m| (self.nodes[m].vertex, self.nodes[m].key))
    }

    /// Degrees of the trees in the root ring, starting at the minimum
    pub fn root_degrees(&self) -> Vec<usize> {
        self.ring(self.min).map(|r| self.nodes[r].degree).collect()
    }

    /// Largest degree of any live node
    pub fn max_degree(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.live)
            .map(|n| n.degree)
            .max()
            .unwrap_or(0)
    }

    /// Walks the whole forest and verifies ring links, parent links, heap
    /// order, degrees, marks, the minimum pointer and the `F(d+2)` size bound.
    ///
    /// O(n); meant for tests.
    pub fn check_invariants(&self) -> Result<(), String> {
        let min = match self.min {
            None if self.len == 0 => return Ok(()),
            None => return Err(format!("min is empty but len is {}", self.len)),
            Some(m) => m,
        };
        let roots = self.checked_ring(min)?;

        let min_key = self.nodes[min].key;
        for &r in &roots {
            let node = &self.nodes[r];
            if node.parent.is_some() {
                return Err(format!("root {} has a parent", r));
            }
            if node.mark {
                return Err(format!("root {} is marked", r));
            }
            if node.key < min_key {
                return Err(format!("root {} is smaller than min", r));
            }
        }

        let mut order = Vec::with_capacity(self.len);
        let mut stack = roots;
        while let Some(x) = stack.pop() {
            let node = &self.nodes[x];
            if !node.live {
                return Err(format!("node {} is reachable but not live", x));
            }
            if self.live.get(node.vertex).copied().flatten() != Some(x) {
                return Err(format!("vertex {} does not map to node {}", node.vertex, x));
            }
            order.push(x);

            let children = match node.child {
                Some(c) => self.checked_ring(c)?,
                None => Vec::new(),
            };
            if children.len() != node.degree {
                return Err(format!(
                    "node {} has degree {} but {} children",
                    x,
                    node.degree,
                    children.len()
                ));
            }
            for &c in &children {
                if self.nodes[c].parent != Some(x) {
                    return Err(format!("child {} does not point back to parent {}", c, x));
                }
                if self.nodes[c].key < node.key {
                    return Err(format!("child {} is smaller than parent {}", c, x));
                }
            }
            stack.extend(children);
        }

        if order.len() != self.len {
            return Err(format!("forest holds {} nodes but len is {}", order.len(), self.len));
        }

        // Reverse pre-order visits every node after all of its descendants
        let mut size = vec![0usize; self.nodes.len()];
        for &x in order.iter().rev() {
            size[x] += 1;
            let degree = self.nodes[x].degree;
            if (size[x] as u128) < fibonacci(degree + 2) {
                return Err(format!(
                    "node {} of degree {} has only {} descendants",
                    x, degree, size[x]
                ));
            }
            if let Some(p) = self.nodes[x].parent {
                size[p] += size[x];
            }
        }

        Ok(())
    }

    /// Iterates a sibling ring starting at `start`
    fn ring(&self, start: Option<usize>) -> impl Iterator<Item = usize> + '_ {
        let mut next = start;
        std::iter::from_fn(move || {
            let current = next?;
            let right = self.nodes[current].right;
            next = if Some(right) == start { None } else { Some(right) };
            Some(current)
        })
    }

    /// Collects a ring, failing on broken back links or a ring that never closes
    fn checked_ring(&self, start: usize) -> Result<Vec<usize>, String> {
        let mut members = Vec::new();
        let mut x = start;
        loop {
            let right = self.nodes[x].right;
            if self.nodes[right].left != x {
                return Err(format!("ring link {} -> {} is not mirrored", x, right));
            }
            members.push(x);
            if members.len() > self.nodes.len() {
                return Err(format!("ring starting at {} does not close", start));
            }
            x = right;
            if x == start {
                return Ok(members);
            }
        }
    }

    /// Detaches `x` from its ring, leaving it a singleton
    fn unlink(&mut self, x: usize) {
        let (l, r) = (self.nodes[x].left, self.nodes[x].right);
        self.nodes[l].right = r;
        self.nodes[r].left = l;
        self.nodes[x].left = x;
        self.nodes[x].right = x;
    }

    /// Joins the ring containing `b` into the ring containing `a`, right after `a`
    fn splice(&mut self, a: usize, b: usize) {
        let a_right = self.nodes[a].right;
        let b_left = self.nodes[b].left;
        self.nodes[a].right = b;
        self.nodes[b].left = a;
        self.nodes[b_left].right = a_right;
        self.nodes[a_right].left = b_left;
    }

    /// Adds the singleton `x` to the root ring
    fn add_root(&mut self, x: usize) {
        match self.min {
            None => self.min = Some(x),
            Some(m) => {
                self.splice(m, x);
                if self.nodes[x].key < self.nodes[m].key {
                    self.min = Some(x);
                }
            }
        }
    }

    /// Makes root `child` a child of root `parent`
    fn link(&mut self, child: usize, parent: usize) {
        self.unlink(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[child].mark = false;
        match self.nodes[parent].child {
            None => self.nodes[parent].child = Some(child),
            Some(c) => self.splice(c, child),
        }
        self.nodes[parent].degree += 1;
        self.stats.links += 1;
    }

    /// Links equal-degree roots until every root degree is distinct, then
    /// recomputes the minimum
    fn consolidate(&mut self) {
        self.stats.consolidations += 1;

        let mut roots = std::mem::take(&mut self.root_scratch);
        roots.clear();
        roots.extend(self.ring(self.min));

        let mut table = std::mem::take(&mut self.degree_table);
        table.clear();

        for &root in &roots {
            let mut x = root;
            let mut d = self.nodes[x].degree;
            loop {
                if d >= table.len() {
                    table.resize(d + 1, None);
                }
                let Some(y) = table[d].take() else {
                    break;
                };
                let (parent, child) = if self.nodes[y].key < self.nodes[x].key {
                    (y, x)
                } else {
                    (x, y)
                };
                self.link(child, parent);
                x = parent;
                d += 1;
            }
            table[d] = Some(x);
        }

        self.min = None;
        for &r in table.iter().flatten() {
            match self.min {
                Some(m) if self.nodes[m].key <= self.nodes[r].key => {}
                _ => self.min = Some(r),
            }
        }

        self.degree_table = table;
        self.root_scratch = roots;
    }

    /// Moves `x` out of `parent`'s child ring into the root ring
    fn cut(&mut self, x: usize, parent: usize) {
        if self.nodes[x].right == x {
            self.nodes[parent].child = None;
        } else {
            if self.nodes[parent].child == Some(x) {
                self.nodes[parent].child = Some(self.nodes[x].right);
            }
            self.unlink(x);
        }
        self.nodes[parent].degree -= 1;
        self.nodes[x].parent = None;
        self.nodes[x].mark = false;
        self.add_root(x);
        self.stats.cuts += 1;
    }

    /// Marks `y`, or cuts it and continues upward if it was already marked
    fn cascading_cut(&mut self, mut y: usize) {
        while let Some(parent) = self.nodes[y].parent {
            if !self.nodes[y].mark {
                self.nodes[y].mark = true;
                return;
            }
            self.cut(y, parent);
            self.stats.cascading_cuts += 1;
            y = parent;
        }
    }
}

impl<W> PriorityQueue<W> for FibonacciHeapQueue<W>
where
    W: Copy + Debug + Ord,
{
    fn with_capacity(vertex_hint: usize) -> Self {
        FibonacciHeapQueue {
            nodes: Vec::with_capacity(vertex_hint),
            min: None,
            len: 0,
            live: vec![None; vertex_hint],
            degree_table: Vec::new(),
            root_scratch: Vec::new(),
            stats: HeapStats::default(),
        }
    }

    fn insert(&mut self, vertex: usize, key: W) -> Result<QueueHandle, QueueError> {
        if vertex >= self.live.len() {
            self.live.resize(vertex + 1, None);
        }
        if self.live[vertex].is_some() {
            return Err(QueueError::DuplicateEntry(vertex));
        }

        let x = self.nodes.len();
        self.nodes.push(Node {
            vertex,
            key,
            degree: 0,
            mark: false,
            parent: None,
            child: None,
            left: x,
            right: x,
            live: true,
        });
        self.live[vertex] = Some(x);
        self.add_root(x);
        self.len += 1;
        self.stats.inserts += 1;

        Ok(QueueHandle::new(x))
    }

    fn extract_min(&mut self) -> Option<(usize, W)> {
        let z = self.min?;

        if let Some(first) = self.nodes[z].child.take() {
            let mut c = first;
            loop {
                self.nodes[c].parent = None;
                self.nodes[c].mark = false;
                c = self.nodes[c].right;
                if c == first {
                    break;
                }
            }
            self.nodes[z].degree = 0;
            self.splice(z, first);
        }

        let next = self.nodes[z].right;
        if next == z {
            self.min = None;
        } else {
            self.unlink(z);
            self.min = Some(next);
            self.consolidate();
        }

        let node = &mut self.nodes[z];
        node.live = false;
        let (vertex, key) = (node.vertex, node.key);
        self.live[vertex] = None;
        self.len -= 1;
        self.stats.extractions += 1;

        Some((vertex, key))
    }

    fn decrease_key(&mut self, handle: QueueHandle, new_key: W) -> Result<(), QueueError> {
        let x = handle.index();
        let node = self
            .nodes
            .get(x)
            .filter(|n| n.live)
            .ok_or(QueueError::InvalidHandle)?;

        if new_key >= node.key {
            return Err(QueueError::KeyNotDecreased { vertex: node.vertex });
        }

        self.nodes[x].key = new_key;
        self.stats.decrease_keys += 1;

        if let Some(parent) = self.nodes[x].parent {
            if new_key < self.nodes[parent].key {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(m) = self.min {
            if new_key < self.nodes[m].key {
                self.min = Some(x);
            }
        }

        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, vertex: usize) -> bool {
        matches!(self.live.get(vertex), Some(Some(_)))
    }

    fn name(&self) -> &'static str {
        "Fibonacci"
    }
}

/// `F(k)` with `F(1) = F(2) = 1`, saturating
fn fibonacci(k: usize) -> u128 {
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 0..k {
        (a, b) = (b, a.saturating_add(b));
    }
    a
}
