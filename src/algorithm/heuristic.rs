use num_traits::Zero;

/// Estimate of the remaining distance between two vertices, used by A*
///
/// Estimates must be non-negative. A* only returns optimal paths when the
/// estimate never exceeds the true remaining distance (admissibility); that
/// property is the caller's responsibility and is not checked.
pub trait Heuristic<W> {
    fn estimate(&self, from: usize, to: usize) -> W;
}

impl<W, F> Heuristic<W> for F
where
    F: Fn(usize, usize) -> W,
{
    fn estimate(&self, from: usize, to: usize) -> W {
        self(from, to)
    }
}

/// Always estimates zero, which turns A* into Dijkstra's algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<W: Zero> Heuristic<W> for ZeroHeuristic {
    fn estimate(&self, _from: usize, _to: usize) -> W {
        W::zero()
    }
}
