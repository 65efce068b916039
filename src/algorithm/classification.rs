use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{Digraph, Graph, MutableGraph, VertexKey, Weight};
use crate::{Error, Result};

/// Role of a vertex according to its degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    /// Both incident and emergent edges
    Normal,
    /// No incident edges
    Source,
    /// No emergent edges
    Sink,
    /// No edges at all
    Isolated,
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VertexKind::Normal => "normal",
            VertexKind::Source => "source",
            VertexKind::Sink => "sink",
            VertexKind::Isolated => "isolated",
        };
        f.write_str(name)
    }
}

/// Classifies `vertex` from its in-degree and out-degree
pub fn classify_vertex<W, G>(graph: &G, vertex: VertexKey) -> Result<VertexKind>
where
    W: Weight,
    G: Graph<W>,
{
    if graph.vertex_count() == 0 {
        return Err(Error::GraphEmpty);
    }
    let in_degree = graph.in_degree(vertex).ok_or(Error::VertexNotFound(vertex))?;
    let out_degree = graph.out_degree(vertex).ok_or(Error::VertexNotFound(vertex))?;

    Ok(match (in_degree, out_degree) {
        (0, 0) => VertexKind::Isolated,
        (0, _) => VertexKind::Source,
        (_, 0) => VertexKind::Sink,
        _ => VertexKind::Normal,
    })
}

/// Checks whether every vertex has in-degree and out-degree equal to the in-degree
/// of the first vertex
pub fn is_regular<W, G>(graph: &G) -> Result<bool>
where
    W: Weight,
    G: Graph<W>,
{
    let mut vertices = graph.vertices();
    let first = vertices.next().ok_or(Error::GraphEmpty)?;
    let degree = graph.in_degree(first).ok_or(Error::VertexNotFound(first))?;

    for vertex in std::iter::once(first).chain(vertices) {
        if graph.in_degree(vertex) != Some(degree) || graph.out_degree(vertex) != Some(degree) {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Builds the complement: same mode and vertices, with a unit-cost edge for every
/// ordered pair of distinct vertices that is not adjacent in `graph`
pub fn complement<W, G>(graph: &G) -> Result<Digraph<W>>
where
    W: Weight,
    G: Graph<W>,
{
    let mut result = Digraph::new(graph.mode());
    let vertices: Vec<VertexKey> = graph.vertices().collect();
    for &vertex in &vertices {
        result.insert_vertex(vertex)?;
    }

    for &u in &vertices {
        for &w in &vertices {
            if u == w || graph.has_edge(u, w) {
                continue;
            }
            match result.insert_edge(u, w, W::one()) {
                // Mirror created by the undirected insertion of `w - u`
                Ok(()) | Err(Error::EdgeAlreadyExists(..)) => {}
                Err(err) => return Err(err),
            }
        }
    }

    Ok(result)
}
