//! Plain-text and JSON summaries of a graph, as printed by the `digraph_report`
//! binary.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::algorithm::{
    classify_vertex, is_regular, shortest_paths, strongly_connected, VertexKind,
};
use crate::graph::{Digraph, Graph, Mode, VertexKey, Weight};
use crate::Result;

/// What a report contains
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Source for the shortest path table; the first vertex when unset
    pub source: Option<VertexKey>,
    /// Print the full vertex sequence of every shortest path
    pub show_paths: bool,
    /// Emit a [`GraphSnapshot`] as JSON instead of text
    pub json: bool,
}

impl ReportConfig {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source vertex of the shortest path table
    pub fn with_source(mut self, source: VertexKey) -> Self {
        self.source = Some(source);
        self
    }

    /// Enable or disable printing full paths
    pub fn with_paths(mut self, enabled: bool) -> Self {
        self.show_paths = enabled;
        self
    }

    /// Enable or disable JSON output
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }
}

/// A vertex with its degrees and classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: VertexKey,
    pub in_degree: usize,
    pub out_degree: usize,
    pub kind: VertexKind,
}

/// A logical edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotLink<W> {
    pub source: VertexKey,
    pub target: VertexKey,
    pub cost: W,
}

/// Serializable view of a graph and its global properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<W> {
    pub mode: Mode,
    pub nodes: Vec<SnapshotNode>,
    pub links: Vec<SnapshotLink<W>>,
    /// `None` for an empty graph
    pub strongly_connected: Option<bool>,
    /// `None` for an empty graph
    pub regular: Option<bool>,
}

/// Builds the snapshot of `graph`
pub fn snapshot<W: Weight>(graph: &Digraph<W>) -> Result<GraphSnapshot<W>> {
    let mut nodes = Vec::with_capacity(graph.vertex_count());
    for id in graph.vertices() {
        nodes.push(SnapshotNode {
            id,
            in_degree: graph.in_degree(id).unwrap_or_default(),
            out_degree: graph.out_degree(id).unwrap_or_default(),
            kind: classify_vertex(graph, id)?,
        });
    }

    let links = graph
        .logical_edges()
        .map(|(source, target, cost)| SnapshotLink {
            source,
            target,
            cost,
        })
        .collect();

    let (strongly_connected, regular) = if graph.vertex_count() == 0 {
        (None, None)
    } else {
        (Some(strongly_connected(graph)?), Some(is_regular(graph)?))
    };

    Ok(GraphSnapshot {
        mode: graph.mode(),
        nodes,
        links,
        strongly_connected,
        regular,
    })
}

/// Writes the report for `graph` to `out`
pub fn write_report<W, O>(graph: &Digraph<W>, config: &ReportConfig, out: &mut O) -> Result<()>
where
    W: Weight,
    O: Write,
{
    if config.json {
        serde_json::to_writer_pretty(&mut *out, &snapshot(graph)?)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{}: V = {} / E = {}",
        graph.mode(),
        graph.vertex_count(),
        graph.edge_count()
    )?;
    for vertex in graph.vertices() {
        writeln!(out, "{}", graph.adjacency_description(vertex)?)?;
    }

    let source = match config.source.or_else(|| graph.vertex_at(0)) {
        Some(source) => source,
        None => return Ok(()),
    };

    writeln!(out)?;
    for vertex in graph.vertices() {
        writeln!(out, "{:>4}: {}", vertex, classify_vertex(graph, vertex)?)?;
    }

    let paths = shortest_paths(graph, source)?;
    writeln!(out)?;
    writeln!(out, "Shortest paths from {}:", source)?;
    for vertex in graph.vertices().filter(|&v| v != source) {
        match (paths.cost(vertex), paths.predecessor(vertex)) {
            (Some(cost), Some(pred)) => {
                write!(out, "{:>4}: cost {} via {}", vertex, cost, pred)?;
                if config.show_paths {
                    if let Some(path) = paths.path_to(vertex) {
                        let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                        write!(out, "  [{}]", hops.join(" -> "))?;
                    }
                }
                writeln!(out)?;
            }
            _ => writeln!(out, "{:>4}: unreachable", vertex)?,
        }
    }

    let reachable: Vec<String> = paths.reachable().map(|v| v.to_string()).collect();
    writeln!(out)?;
    if reachable.is_empty() {
        writeln!(out, "Reachable from {}: none", source)?;
    } else {
        writeln!(out, "Reachable from {}: {}", source, reachable.join(" "))?;
    }

    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    writeln!(out, "Strongly connected: {}", yes_no(strongly_connected(graph)?))?;
    writeln!(out, "Regular: {}", yes_no(is_regular(graph)?))?;

    Ok(())
}
