//! Generic relaxation loop shared by Dijkstra and A*
//!
//! The driver owns one priority queue, seeds it with the source and repeatedly
//! finalizes the minimum-key vertex, relaxing its outgoing edges. The queue key
//! of a vertex is `g + h`, where `g` is the best known distance and `h` the
//! heuristic estimate to the goal; Dijkstra is the case `h = 0`. The driver
//! never looks inside the queue, and the queue never sees the graph.

use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::heuristic::Heuristic;
use crate::algorithm::traits::{ShortestPathResult, SearchStats};
use crate::data_structures::{
    BinaryHeapQueue, FibonacciHeapQueue, LinearScanQueue, PriorityQueue, QueueHandle, QueueStrategy,
};
use crate::graph::Graph;
use crate::{Error, Result};

/// Lifecycle of a vertex within one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    Unvisited,
    /// Has a live queue entry
    Frontier,
    /// Extracted; its distance is final
    Finalized,
}

/// A successful relaxation: `vertex` got a shorter distance through `predecessor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relaxation<W> {
    pub vertex: usize,
    pub predecessor: usize,
    pub previous: W,
    pub distance: W,
}

/// Validated inputs of one run: source, optional goal, and heuristic estimates
///
/// Building a plan checks every vertex index and evaluates the heuristic for
/// every vertex, so invalid input fails before any vertex is extracted.
#[derive(Debug, Clone)]
pub struct SearchPlan<W> {
    vertex_count: usize,
    source: usize,
    goal: Option<usize>,
    /// `h(v, goal)` per vertex; absent means all zero
    estimates: Option<Vec<W>>,
}

impl<W> SearchPlan<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Plain single-source search that drains the whole queue
    pub fn dijkstra<G: Graph<W>>(graph: &G, source: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        Ok(SearchPlan {
            vertex_count: graph.vertex_count(),
            source,
            goal: None,
            estimates: None,
        })
    }

    /// Stops the search as soon as `target` is finalized
    pub fn with_target(mut self, target: usize) -> Result<Self> {
        if target >= self.vertex_count {
            return Err(Error::InvalidVertex(target));
        }
        self.goal = Some(target);
        Ok(self)
    }

    /// Goal-directed search ordered by `g + h(v, goal)`
    pub fn astar<G, H>(graph: &G, source: usize, goal: usize, heuristic: &H) -> Result<Self>
    where
        G: Graph<W>,
        H: Heuristic<W> + ?Sized,
    {
        let plan = Self::dijkstra(graph, source)?.with_target(goal)?;

        let mut estimates = Vec::with_capacity(plan.vertex_count);
        for vertex in 0..plan.vertex_count {
            let h = heuristic.estimate(vertex, goal);
            if h.is_nan() || h < W::zero() {
                return Err(Error::InvalidHeuristic {
                    vertex,
                    value: h.to_f64().unwrap_or(f64::NAN),
                });
            }
            estimates.push(h);
        }

        Ok(SearchPlan {
            estimates: Some(estimates),
            ..plan
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn goal(&self) -> Option<usize> {
        self.goal
    }

    fn estimate(&self, vertex: usize) -> W {
        self.estimates.as_ref().map_or_else(W::zero, |h| h[vertex])
    }
}

/// Final state of a run
#[derive(Debug, Clone)]
pub struct SearchOutcome<W> {
    pub source: usize,
    pub goal: Option<usize>,
    /// Best known distance per vertex, `W::infinity()` if never reached
    pub distances: Vec<W>,
    pub predecessors: Vec<Option<usize>>,
    pub states: Vec<VertexState>,
    /// True if the goal was finalized before the queue ran dry
    pub goal_reached: bool,
    pub stats: SearchStats,
}

impl<W> From<SearchOutcome<W>> for ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn from(outcome: SearchOutcome<W>) -> Self {
        ShortestPathResult {
            distances: outcome.distances,
            predecessors: outcome.predecessors,
            source: outcome.source,
            stats: outcome.stats,
        }
    }
}

/// One run of the relaxation loop over queue strategy `Q`
#[derive(Debug)]
pub struct ShortestPathDriver<'g, W, G, Q> {
    graph: &'g G,
    plan: SearchPlan<W>,
    queue: Q,
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    states: Vec<VertexState>,
    handles: Vec<Option<QueueHandle>>,
    /// Key currently held by each vertex's queue entry
    queued_keys: Vec<W>,
    stats: SearchStats,
}

impl<'g, W, G, Q> ShortestPathDriver<'g, W, G, Q>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    Q: PriorityQueue<W>,
{
    pub fn new(graph: &'g G, plan: SearchPlan<W>) -> Result<Self> {
        let n = graph.vertex_count();
        if plan.vertex_count != n {
            return Err(Error::PlanMismatch {
                plan: plan.vertex_count,
                graph: n,
            });
        }

        Ok(ShortestPathDriver {
            graph,
            plan,
            queue: Q::with_capacity(n),
            distances: vec![W::infinity(); n],
            predecessors: vec![None; n],
            states: vec![VertexState::Unvisited; n],
            handles: vec![None; n],
            queued_keys: vec![W::infinity(); n],
            stats: SearchStats::default(),
        })
    }

    pub fn run(self) -> Result<SearchOutcome<W>> {
        self.run_observed(|_| {})
    }

    /// Runs the search, reporting every successful relaxation to `observer`
    pub fn run_observed<F>(mut self, mut observer: F) -> Result<SearchOutcome<W>>
    where
        F: FnMut(Relaxation<W>),
    {
        let graph = self.graph;
        let source = self.plan.source;
        let goal = self.plan.goal;

        debug!(
            "Starting {} search from {} (goal {:?}) over {} vertices",
            self.queue.name(),
            source,
            goal,
            graph.vertex_count()
        );

        self.distances[source] = W::zero();
        self.enqueue(source, self.plan.estimate(source))?;

        let mut goal_reached = false;
        while let Some((u, key)) = self.queue.extract_min() {
            self.stats.extractions += 1;

            if self.states[u] == VertexState::Finalized {
                self.stats.stale_skips += 1;
                continue;
            }
            self.states[u] = VertexState::Finalized;
            self.handles[u] = None;
            trace!("Finalized vertex {} at key {:?}", u, key);

            if Some(u) == goal {
                goal_reached = true;
                break;
            }

            let g_u = self.distances[u];
            for (v, weight) in graph.outgoing_edges(u) {
                if self.states[v] == VertexState::Finalized {
                    continue;
                }

                let candidate = g_u + weight;
                if candidate >= self.distances[v] {
                    continue;
                }

                let previous = self.distances[v];
                self.distances[v] = candidate;
                self.predecessors[v] = Some(u);
                self.stats.relaxations += 1;
                observer(Relaxation {
                    vertex: v,
                    predecessor: u,
                    previous,
                    distance: candidate,
                });

                let f = candidate + self.plan.estimate(v);
                match self.handles[v] {
                    None => self.enqueue(v, f)?,
                    Some(handle) => {
                        // g' < g does not guarantee g'+h < g+h under rounding
                        if f < self.queued_keys[v] {
                            self.queue.decrease_key(handle, f)?;
                            self.queued_keys[v] = f;
                            self.stats.decrease_keys += 1;
                        }
                    }
                }
            }
        }

        debug!(
            "Finished {} search from {}: goal reached {}, {:?}",
            self.queue.name(),
            source,
            goal_reached,
            self.stats
        );

        Ok(SearchOutcome {
            source,
            goal,
            distances: self.distances,
            predecessors: self.predecessors,
            states: self.states,
            goal_reached,
            stats: self.stats,
        })
    }

    fn enqueue(&mut self, vertex: usize, key: W) -> Result<()> {
        let handle = self.queue.insert(vertex, key)?;
        self.handles[vertex] = Some(handle);
        self.queued_keys[vertex] = key;
        self.states[vertex] = VertexState::Frontier;
        self.stats.inserts += 1;
        Ok(())
    }
}

/// Runs a plan with the queue chosen by `strategy`
pub fn search<W, G, F>(
    graph: &G,
    plan: SearchPlan<W>,
    strategy: QueueStrategy,
    observer: F,
) -> Result<SearchOutcome<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    F: FnMut(Relaxation<W>),
{
    match strategy {
        QueueStrategy::LinearScan => {
            ShortestPathDriver::<W, G, LinearScanQueue<W>>::new(graph, plan)?.run_observed(observer)
        }
        QueueStrategy::BinaryHeap => {
            ShortestPathDriver::<W, G, BinaryHeapQueue<W>>::new(graph, plan)?.run_observed(observer)
        }
        QueueStrategy::Fibonacci => {
            ShortestPathDriver::<W, G, FibonacciHeapQueue<W>>::new(graph, plan)?.run_observed(observer)
        }
    }
}
