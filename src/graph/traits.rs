use std::fmt::Debug;

use crate::graph::{Mode, VertexKey, Weight};
use crate::Result;

/// Trait representing a weighted graph whose vertices are addressed by key
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns whether edges are directed or mirrored
    fn mode(&self) -> Mode;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of logical edges in the graph (a mirrored pair counts once)
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertex keys in ascending order
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexKey> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex, by ascending neighbor
    fn outgoing_edges(&self, vertex: VertexKey) -> Box<dyn Iterator<Item = (VertexKey, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexKey) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexKey, to: VertexKey) -> bool;

    /// Gets the cost of an edge if it exists
    fn edge_cost(&self, from: VertexKey, to: VertexKey) -> Option<W>;

    /// Number of edges arriving at `vertex`, `None` if it doesn't exist
    fn in_degree(&self, vertex: VertexKey) -> Option<usize>;

    /// Number of edges leaving `vertex`, `None` if it doesn't exist
    fn out_degree(&self, vertex: VertexKey) -> Option<usize>;
}

/// Trait for mutable graph operations.
///
/// Every operation validates its arguments before touching the structure, so a
/// returned error always leaves the graph as it was.
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex with the given key
    fn insert_vertex(&mut self, vertex: VertexKey) -> Result<()>;

    /// Removes a vertex together with all its incident and emergent edges
    fn remove_vertex(&mut self, vertex: VertexKey) -> Result<()>;

    /// Adds an edge between two existing vertices with the given cost
    fn insert_edge(&mut self, from: VertexKey, to: VertexKey, cost: W) -> Result<()>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: VertexKey, to: VertexKey) -> Result<()>;
}
