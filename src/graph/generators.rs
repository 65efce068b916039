use rand::Rng;

use crate::graph::{Digraph, Graph, Mode, MutableGraph, VertexKey};
use crate::{Error, Result};

/// Largest vertex key of a generated graph on `n` vertices
fn last_key(n: usize) -> Result<VertexKey> {
    VertexKey::try_from(n).map_err(|_| Error::TooManyVertices(n))
}

/// Generates a graph with vertices `1..=n` and no edges
pub fn generate_edgeless(mode: Mode, n: usize) -> Result<Digraph<i32>> {
    let last = last_key(n)?;
    let mut graph = Digraph::new(mode);
    for v in 1..=last {
        graph.insert_vertex(v)?;
    }
    Ok(graph)
}

/// Generates a complete graph on vertices `1..=n` with unit costs
pub fn generate_complete(mode: Mode, n: usize) -> Result<Digraph<i32>> {
    let mut graph = generate_edgeless(mode, n)?;
    let last = last_key(n)?;

    for u in 1..=last {
        for w in 1..=last {
            // The mirror of an undirected edge is already there
            if u != w && !graph.has_edge(u, w) {
                graph.insert_edge(u, w, 1)?;
            }
        }
    }

    Ok(graph)
}

/// Generates the directed cycle `1 -> 2 -> ... -> n -> 1` with the given cost on
/// every edge
pub fn generate_cycle(n: usize, cost: i32) -> Result<Digraph<i32>> {
    let mut graph = generate_edgeless(Mode::Directed, n)?;

    if n > 1 {
        let last = last_key(n)?;
        for v in 1..=last {
            let next = v % last + 1;
            graph.insert_edge(v, next, cost)?;
        }
    }

    Ok(graph)
}

/// Generates a random graph on vertices `1..=n` with approximately
/// `edge_factor * n` edges, costs drawn uniformly from `1..=max_cost`.
///
/// Self-loops and repeated pairs are skipped, so the final edge count can be lower.
pub fn generate_random<R: Rng>(
    mode: Mode,
    n: usize,
    edge_factor: f64,
    max_cost: i32,
    rng: &mut R,
) -> Result<Digraph<i32>> {
    let mut graph = generate_edgeless(mode, n)?;
    if n < 2 {
        return Ok(graph);
    }
    let last = last_key(n)?;

    let attempts = (edge_factor * n as f64) as usize;
    for _ in 0..attempts {
        let u = rng.gen_range(1..=last);
        let w = rng.gen_range(1..=last);
        if u != w && !graph.has_edge(u, w) {
            let cost = rng.gen_range(1..=max_cost.max(1));
            graph.insert_edge(u, w, cost)?;
        }
    }

    Ok(graph)
}
