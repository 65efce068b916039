use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::{VertexKey, Weight};
use crate::{Error, Result};

/// Whether a graph stores one-way edges or mirrored pairs.
///
/// The mode is fixed when the graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every logical edge is materialized as `a -> b` and `b -> a` with the same cost
    Undirected,
    Directed,
}

impl Mode {
    /// Flag used by the text format: `1` for directed, `0` for undirected
    pub fn as_flag(self) -> u8 {
        match self {
            Mode::Undirected => 0,
            Mode::Directed => 1,
        }
    }

    /// Mode for a text-format flag, `None` for anything but `0` or `1`
    pub fn from_flag(flag: u8) -> Option<Mode> {
        match flag {
            0 => Some(Mode::Undirected),
            1 => Some(Mode::Directed),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Undirected => f.write_str("graph"),
            Mode::Directed => f.write_str("digraph"),
        }
    }
}

/// A vertex record: its in-degree and its adjacency, ordered by neighbor key
#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex<W> {
    in_degree: usize,
    edges: BTreeMap<VertexKey, W>,
}

impl<W> Vertex<W> {
    fn new() -> Self {
        Vertex {
            in_degree: 0,
            edges: BTreeMap::new(),
        }
    }
}

/// A directed or undirected graph using ordered adjacency maps.
///
/// Vertices are kept in ascending key order, and so is every adjacency. Cloning
/// produces a fully independent copy; two graphs compare equal when they have the
/// same mode, the same vertices and the same edges with the same costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph<W = i32>
where
    W: Weight,
{
    /// vertex key -> vertex record
    vertices: BTreeMap<VertexKey, Vertex<W>>,

    /// Number of logical edges; a mirrored undirected pair counts once
    edge_count: usize,

    mode: Mode,
}

impl<W> Digraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph in the given mode
    pub fn new(mode: Mode) -> Self {
        Digraph {
            vertices: BTreeMap::new(),
            edge_count: 0,
            mode,
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(Mode::Directed)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(Mode::Undirected)
    }

    /// Returns the key of the vertex at `index` in ascending key order
    pub fn vertex_at(&self, index: usize) -> Option<VertexKey> {
        self.vertices.keys().nth(index).copied()
    }

    /// Every stored directed entry as `(from, to, cost)`, ordered by `(from, to)`.
    ///
    /// In undirected mode both halves of each mirrored pair are listed.
    pub fn edges(&self) -> impl Iterator<Item = (VertexKey, VertexKey, W)> + '_ {
        self.vertices.iter().flat_map(|(&from, vertex)| {
            vertex.edges.iter().map(move |(&to, &cost)| (from, to, cost))
        })
    }

    /// Every logical edge exactly once; undirected pairs are reported as `from < to`
    pub fn logical_edges(&self) -> impl Iterator<Item = (VertexKey, VertexKey, W)> + '_ {
        let mode = self.mode;
        self.edges()
            .filter(move |&(from, to, _)| mode == Mode::Directed || from < to)
    }

    /// Human readable listing of a vertex and its outgoing edges, e.g.
    /// `"Vertex  1 >  2 ( 5)  3 ( 1) "`
    pub fn adjacency_description(&self, vertex: VertexKey) -> Result<String> {
        let record = self
            .vertices
            .get(&vertex)
            .ok_or(Error::VertexNotFound(vertex))?;

        let mut description = format!("Vertex {:2} > ", vertex);
        for (to, cost) in &record.edges {
            description.push_str(&format!("{:2} ({:2}) ", to, cost));
        }
        Ok(description)
    }

    /// Adds the directed entry `from -> to`; both vertices must exist
    fn link(&mut self, from: VertexKey, to: VertexKey, cost: W) {
        if let Some(vertex) = self.vertices.get_mut(&from) {
            vertex.edges.insert(to, cost);
        }
        if let Some(vertex) = self.vertices.get_mut(&to) {
            vertex.in_degree += 1;
        }
    }

    /// Removes the directed entry `from -> to`, returning its cost
    fn unlink(&mut self, from: VertexKey, to: VertexKey) -> Option<W> {
        let cost = self.vertices.get_mut(&from)?.edges.remove(&to)?;
        if let Some(vertex) = self.vertices.get_mut(&to) {
            vertex.in_degree -= 1;
        }
        Some(cost)
    }
}

impl<W> Default for Digraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::directed()
    }
}

impl<W> Graph<W> for Digraph<W>
where
    W: Weight,
{
    fn mode(&self) -> Mode {
        self.mode
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexKey> + '_> {
        Box::new(self.vertices.keys().copied())
    }

    fn outgoing_edges(&self, vertex: VertexKey) -> Box<dyn Iterator<Item = (VertexKey, W)> + '_> {
        if let Some(record) = self.vertices.get(&vertex) {
            Box::new(record.edges.iter().map(|(&to, &cost)| (to, cost)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: VertexKey) -> bool {
        self.vertices.contains_key(&vertex)
    }

    fn has_edge(&self, from: VertexKey, to: VertexKey) -> bool {
        self.edge_cost(from, to).is_some()
    }

    fn edge_cost(&self, from: VertexKey, to: VertexKey) -> Option<W> {
        self.vertices.get(&from)?.edges.get(&to).copied()
    }

    fn in_degree(&self, vertex: VertexKey) -> Option<usize> {
        self.vertices.get(&vertex).map(|record| record.in_degree)
    }

    fn out_degree(&self, vertex: VertexKey) -> Option<usize> {
        self.vertices.get(&vertex).map(|record| record.edges.len())
    }
}

impl<W> MutableGraph<W> for Digraph<W>
where
    W: Weight,
{
    fn insert_vertex(&mut self, vertex: VertexKey) -> Result<()> {
        if vertex == 0 {
            return Err(Error::InvalidVertex(vertex));
        }
        if self.vertices.contains_key(&vertex) {
            return Err(Error::VertexAlreadyExists(vertex));
        }

        self.vertices.insert(vertex, Vertex::new());
        debug!("inserted vertex {}", vertex);
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: VertexKey) -> Result<()> {
        if self.vertices.is_empty() {
            return Err(Error::GraphEmpty);
        }
        let removed = self
            .vertices
            .remove(&vertex)
            .ok_or(Error::VertexNotFound(vertex))?;

        // Emergent edges
        for neighbor in removed.edges.keys() {
            if let Some(record) = self.vertices.get_mut(neighbor) {
                record.in_degree -= 1;
            }
        }

        // Incident edges
        let mut incident = 0;
        for record in self.vertices.values_mut() {
            if record.edges.remove(&vertex).is_some() {
                incident += 1;
            }
        }

        // In undirected mode every incident entry mirrors an emergent one
        let removed_edges = match self.mode {
            Mode::Directed => removed.edges.len() + incident,
            Mode::Undirected => removed.edges.len(),
        };
        self.edge_count -= removed_edges;

        debug!("removed vertex {} and {} edges", vertex, removed_edges);
        Ok(())
    }

    fn insert_edge(&mut self, from: VertexKey, to: VertexKey, cost: W) -> Result<()> {
        // Self-loops are reported like a repeated edge
        if from == to {
            return Err(Error::EdgeAlreadyExists(from, to));
        }
        if !self.has_vertex(from) {
            return Err(Error::VertexNotFound(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::VertexNotFound(to));
        }
        if self.has_edge(from, to) {
            return Err(Error::EdgeAlreadyExists(from, to));
        }

        self.link(from, to, cost);
        if self.mode == Mode::Undirected {
            self.link(to, from, cost);
        }
        self.edge_count += 1;

        debug!("inserted edge {}-{} with cost {}", from, to, cost);
        Ok(())
    }

    fn remove_edge(&mut self, from: VertexKey, to: VertexKey) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::VertexNotFound(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::VertexNotFound(to));
        }

        self.unlink(from, to)
            .ok_or(Error::EdgeNotFound(from, to))?;
        if self.mode == Mode::Undirected {
            self.unlink(to, from);
        }
        self.edge_count -= 1;

        debug!("removed edge {}-{}", from, to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recomputes degrees and counts from the adjacency maps and compares them
    /// with the bookkeeping fields.
    fn assert_consistent(graph: &Digraph) {
        let mut in_degrees: BTreeMap<VertexKey, usize> =
            graph.vertices.keys().map(|&v| (v, 0)).collect();
        let mut entries = 0;

        for (&from, record) in &graph.vertices {
            for (&to, &cost) in &record.edges {
                assert_ne!(from, to, "self-loop stored at {}", from);
                *in_degrees.get_mut(&to).expect("edge to unknown vertex") += 1;
                entries += 1;
                if graph.mode == Mode::Undirected {
                    assert_eq!(graph.edge_cost(to, from), Some(cost));
                }
            }
        }

        for (vertex, expected) in in_degrees {
            assert_eq!(graph.in_degree(vertex), Some(expected), "in-degree of {}", vertex);
        }
        let expected_edges = match graph.mode {
            Mode::Directed => entries,
            Mode::Undirected => entries / 2,
        };
        assert_eq!(graph.edge_count(), expected_edges);
    }

    fn triangle(mode: Mode) -> Digraph {
        let mut graph = Digraph::new(mode);
        for v in 1..=3 {
            graph.insert_vertex(v).unwrap();
        }
        graph.insert_edge(1, 2, 4).unwrap();
        graph.insert_edge(2, 3, 6).unwrap();
        graph.insert_edge(3, 1, 8).unwrap();
        graph
    }

    #[test]
    fn test_vertices_are_kept_sorted() {
        let mut graph: Digraph = Digraph::directed();
        for v in [5, 1, 9, 3] {
            graph.insert_vertex(v).unwrap();
        }

        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
        assert_eq!(graph.vertex_at(2), Some(5));
        assert_eq!(graph.vertex_at(4), None);
    }

    #[test]
    fn test_vertex_zero_is_invalid() {
        let mut graph: Digraph = Digraph::directed();
        assert!(matches!(graph.insert_vertex(0), Err(Error::InvalidVertex(0))));
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_adjacency_is_kept_sorted() {
        let mut graph: Digraph = Digraph::directed();
        for v in 1..=4 {
            graph.insert_vertex(v).unwrap();
        }
        graph.insert_edge(1, 4, 1).unwrap();
        graph.insert_edge(1, 2, 7).unwrap();
        graph.insert_edge(1, 3, 2).unwrap();

        let neighbors: Vec<VertexKey> = graph.outgoing_edges(1).map(|(v, _)| v).collect();
        assert_eq!(neighbors, vec![2, 3, 4]);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_vertex_directed_counts_both_directions() {
        let mut graph = triangle(Mode::Directed);
        graph.insert_edge(1, 3, 2).unwrap();
        assert_eq!(graph.edge_count(), 4);

        graph.remove_vertex(3).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(1), Some(1));
        assert_eq!(graph.in_degree(1), Some(0));
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_vertex_undirected_counts_pairs_once() {
        let mut graph = triangle(Mode::Undirected);
        assert_eq!(graph.edge_count(), 3);

        graph.remove_vertex(2).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(1, 3));
        assert!(graph.has_edge(3, 1));
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_vertex_errors() {
        let mut graph: Digraph = Digraph::undirected();
        assert!(matches!(graph.remove_vertex(1), Err(Error::GraphEmpty)));

        graph.insert_vertex(1).unwrap();
        assert!(matches!(graph.remove_vertex(2), Err(Error::VertexNotFound(2))));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_insert_edge_error_order() {
        let mut graph: Digraph = Digraph::directed();
        assert!(matches!(graph.insert_edge(4, 4, 1), Err(Error::EdgeAlreadyExists(4, 4))));
        assert!(matches!(graph.insert_edge(1, 2, 1), Err(Error::VertexNotFound(1))));

        graph.insert_vertex(1).unwrap();
        assert!(matches!(graph.insert_edge(1, 2, 1), Err(Error::VertexNotFound(2))));

        graph.insert_vertex(2).unwrap();
        graph.insert_edge(1, 2, 1).unwrap();
        assert!(matches!(graph.insert_edge(1, 2, 9), Err(Error::EdgeAlreadyExists(1, 2))));
        assert_eq!(graph.edge_cost(1, 2), Some(1));
        assert_consistent(&graph);
    }

    #[test]
    fn test_undirected_edge_insert_checks_mirror() {
        let mut graph: Digraph = Digraph::undirected();
        graph.insert_vertex(1).unwrap();
        graph.insert_vertex(2).unwrap();
        graph.insert_edge(1, 2, 3).unwrap();

        assert!(matches!(graph.insert_edge(2, 1, 3), Err(Error::EdgeAlreadyExists(2, 1))));
        assert_eq!(graph.edge_count(), 1);

        graph.remove_edge(2, 1).unwrap();
        assert!(!graph.has_edge(1, 2));
        assert_eq!(graph.edge_count(), 0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_edge_errors() {
        let mut graph = triangle(Mode::Directed);
        assert!(matches!(graph.remove_edge(2, 1), Err(Error::EdgeNotFound(2, 1))));
        assert!(matches!(graph.remove_edge(7, 1), Err(Error::VertexNotFound(7))));
        assert!(matches!(graph.remove_edge(1, 7), Err(Error::VertexNotFound(7))));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_adjacency_description_format() {
        let mut graph = triangle(Mode::Directed);
        graph.insert_edge(1, 3, 12).unwrap();

        assert_eq!(
            graph.adjacency_description(1).unwrap(),
            "Vertex  1 >  2 ( 4)  3 (12) "
        );
        assert!(matches!(
            graph.adjacency_description(8),
            Err(Error::VertexNotFound(8))
        ));
    }

    #[test]
    fn test_logical_edges_report_pairs_once() {
        let graph = triangle(Mode::Undirected);
        let edges: Vec<_> = graph.logical_edges().collect();

        assert_eq!(edges, vec![(1, 2, 4), (1, 3, 8), (2, 3, 6)]);
        assert_eq!(graph.edges().count(), 6);
    }

    #[test]
    fn test_mode_flags() {
        assert_eq!(Mode::from_flag(Mode::Directed.as_flag()), Some(Mode::Directed));
        assert_eq!(Mode::from_flag(0), Some(Mode::Undirected));
        assert_eq!(Mode::from_flag(2), None);
    }
}
