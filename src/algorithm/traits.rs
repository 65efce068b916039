use std::fmt::Debug;

use crate::graph::{Graph, VertexKey, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// The vectors are aligned with `vertices`, which lists the graph's vertex keys in
/// ascending order: `costs[i]` and `predecessors[i]` describe `vertices[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Vertex keys in ascending order
    pub vertices: Vec<VertexKey>,

    /// Path costs from the source; `None` for unreachable vertices
    pub costs: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree; `None` for the source and
    /// for unreachable vertices
    pub predecessors: Vec<Option<VertexKey>>,

    /// Source vertex key
    pub source: VertexKey,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    fn index_of(&self, vertex: VertexKey) -> Option<usize> {
        self.vertices.binary_search(&vertex).ok()
    }

    /// Shortest path cost to `vertex`, `None` if unreachable or unknown
    pub fn cost(&self, vertex: VertexKey) -> Option<W> {
        self.index_of(vertex).and_then(|i| self.costs[i])
    }

    /// Predecessor of `vertex` on its shortest path
    pub fn predecessor(&self, vertex: VertexKey) -> Option<VertexKey> {
        self.index_of(vertex).and_then(|i| self.predecessors[i])
    }

    /// Returns true if some path leads from the source to `vertex`
    pub fn is_reachable(&self, vertex: VertexKey) -> bool {
        self.cost(vertex).is_some()
    }

    /// Vertices that have a predecessor, in ascending key order.
    ///
    /// The source never has a predecessor and is therefore never listed.
    pub fn reachable(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.vertices
            .iter()
            .zip(&self.predecessors)
            .filter(|(_, pred)| pred.is_some())
            .map(|(&v, _)| v)
    }

    /// Vertex sequence from the source to `target`, following predecessors
    pub fn path_to(&self, target: VertexKey) -> Option<Vec<VertexKey>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);

            // A predecessor chain can't be longer than the vertex set
            if path.len() > self.vertices.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W>
where
    W: Weight,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<G>(&self, graph: &G, source: VertexKey) -> Result<ShortestPathResult<W>>
    where
        G: Graph<W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: VertexKey) -> Option<Vec<VertexKey>> {
        result.path_to(target)
    }
}
