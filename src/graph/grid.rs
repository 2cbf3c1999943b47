use crate::algorithm::astar::run_astar;
use crate::algorithm::heuristic::Heuristic;
use crate::data_structures::QueueStrategy;
use crate::graph::DirectedGraph;
use crate::{Error, Result};
use num_traits::{Float, NumCast, Zero};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::fmt::Debug;

/// Cost of a horizontal or vertical move
pub const STRAIGHT_COST: f64 = 1.0;

/// Cost of a diagonal move
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// 8-directional movement as (row delta, col delta)
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// An occupancy grid indexed `[row][col]` where a non-zero cell is blocked
///
/// Cell `(row, col)` maps to vertex `row * cols + col` in the graph produced by
/// [`Grid::to_graph`].
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
}

impl Grid {
    /// Creates an open grid with no obstacles
    pub fn open(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            blocked: vec![false; rows * cols],
        }
    }

    /// Creates a grid from rows of cells (`1` = blocked, `0` = open)
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut blocked = Vec::with_capacity(rows.len() * cols);

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::InvalidGraphSpec(format!(
                    "grid row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            blocked.extend(row.iter().map(|&cell| cell != 0));
        }

        Ok(Grid {
            rows: rows.len(),
            cols,
            blocked,
        })
    }

    /// Parses a text map, one line per row: `#` is blocked, `.` is open
    pub fn parse(map: &str) -> Result<Self> {
        let rows = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.bytes()
                    .map(|cell| match cell {
                        b'#' => Ok(1u8),
                        b'.' => Ok(0u8),
                        other => Err(Error::InvalidGraphSpec(format!(
                            "unexpected cell {:?} in grid row {}",
                            other as char, i
                        ))),
                    })
                    .collect::<Result<Vec<u8>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&rows)
    }

    /// Seeded random obstacle grid: each cell is blocked with probability `obstacle_chance`
    pub fn random(rows: usize, cols: usize, obstacle_chance: f64, seed: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&obstacle_chance) {
            return Err(Error::InvalidGraphSpec(format!(
                "obstacle chance {} is outside [0, 1]",
                obstacle_chance
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let blocked = (0..rows * cols)
            .map(|_| rng.gen::<f64>() < obstacle_chance)
            .collect();
        Ok(Grid { rows, cols, blocked })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Marks a cell as blocked
    pub fn block(&mut self, row: usize, col: usize) -> Result<()> {
        let vertex = self.index(row, col)?;
        self.blocked[vertex] = true;
        Ok(())
    }

    /// Marks a cell as open
    pub fn unblock(&mut self, row: usize, col: usize) -> Result<()> {
        let vertex = self.index(row, col)?;
        self.blocked[vertex] = false;
        Ok(())
    }

    /// Vertex index of a cell
    pub fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::InvalidVertex(row.saturating_mul(self.cols).saturating_add(col)));
        }
        Ok(row * self.cols + col)
    }

    /// Cell `(row, col)` of a vertex index
    pub fn cell(&self, vertex: usize) -> Option<(usize, usize)> {
        if vertex < self.rows * self.cols {
            Some((vertex / self.cols, vertex % self.cols))
        } else {
            None
        }
    }

    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        row >= self.rows || col >= self.cols || self.blocked[row * self.cols + col]
    }

    /// Builds the movement graph: every open cell links to each open neighbour
    /// among its 8 surrounding cells. Blocked cells stay in the vertex set but
    /// have no edges in or out.
    pub fn to_graph(&self) -> Result<DirectedGraph<OrderedFloat<f64>>> {
        let mut edges = Vec::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.is_blocked(row, col) {
                    continue;
                }
                let from = row * self.cols + col;

                for (dr, dc) in DIRECTIONS {
                    let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                        continue;
                    };
                    if self.is_blocked(nr, nc) {
                        continue;
                    }

                    let cost = if dr != 0 && dc != 0 { DIAGONAL_COST } else { STRAIGHT_COST };
                    edges.push((from, nr * self.cols + nc, OrderedFloat(cost)));
                }
            }
        }

        DirectedGraph::from_edges(self.rows * self.cols, &edges)
    }

    /// A* between two cells with the Euclidean heuristic
    ///
    /// Returns an empty path when either endpoint is blocked, even if they are
    /// the same cell, or when the goal cannot be reached.
    pub fn find_path(
        &self,
        start: (usize, usize),
        goal: (usize, usize),
        strategy: QueueStrategy,
    ) -> Result<Vec<usize>> {
        let source = self.index(start.0, start.1)?;
        let target = self.index(goal.0, goal.1)?;
        if self.is_blocked(start.0, start.1) || self.is_blocked(goal.0, goal.1) {
            return Ok(Vec::new());
        }

        let graph = self.to_graph()?;
        run_astar(&graph, source, target, &self.euclidean(), strategy)
    }

    /// Straight-line distance heuristic for this grid
    pub fn euclidean(&self) -> EuclideanHeuristic {
        EuclideanHeuristic { cols: self.cols }
    }

    /// Taxicab distance heuristic for this grid
    pub fn manhattan(&self) -> ManhattanHeuristic {
        ManhattanHeuristic { cols: self.cols }
    }
}

/// Straight-line distance between two grid cells
///
/// Admissible for 8-directional movement with unit straight cost.
#[derive(Debug, Clone, Copy)]
pub struct EuclideanHeuristic {
    pub cols: usize,
}

impl<W> Heuristic<W> for EuclideanHeuristic
where
    W: Float + Zero + Debug + Copy,
{
    fn estimate(&self, from: usize, to: usize) -> W {
        let (dr, dc) = cell_delta(self.cols, from, to);
        let distance = (dr * dr + dc * dc).sqrt();
        <W as NumCast>::from(distance).unwrap_or_else(W::zero)
    }
}

/// Taxicab distance between two grid cells
///
/// Admissible only for 4-connected grids with unit straight cost; it
/// overestimates diagonal moves.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanHeuristic {
    pub cols: usize,
}

impl<W> Heuristic<W> for ManhattanHeuristic
where
    W: Float + Zero + Debug + Copy,
{
    fn estimate(&self, from: usize, to: usize) -> W {
        let (dr, dc) = cell_delta(self.cols, from, to);
        <W as NumCast>::from(dr.abs() + dc.abs()).unwrap_or_else(W::zero)
    }
}

fn cell_delta(cols: usize, from: usize, to: usize) -> (f64, f64) {
    let cols = cols.max(1);
    let dr = (from / cols) as f64 - (to / cols) as f64;
    let dc = (from % cols) as f64 - (to % cols) as f64;
    (dr, dc)
}
