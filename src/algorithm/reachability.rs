use log::debug;

use crate::algorithm::dijkstra::shortest_paths;
use crate::graph::{Graph, MutableGraph, VertexKey, Weight};
use crate::{Error, Result};

/// Vertices reachable from `source` through at least one edge, in ascending order.
///
/// `source` itself is never part of the result, even when it lies on a cycle.
pub fn reach<W, G>(graph: &G, source: VertexKey) -> Result<Vec<VertexKey>>
where
    W: Weight,
    G: Graph<W>,
{
    let result = shortest_paths::<W, G>(graph, source)?;
    Ok(result.reachable().collect())
}

/// Checks whether every vertex reaches every other vertex
pub fn strongly_connected<W, G>(graph: &G) -> Result<bool>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if n == 0 {
        return Err(Error::GraphEmpty);
    }

    for vertex in graph.vertices() {
        let reached = reach::<W, G>(graph, vertex)?.len();
        if reached != n - 1 {
            debug!("vertex {} reaches only {} of {} vertices", vertex, reached, n - 1);
            return Ok(false);
        }
    }

    Ok(true)
}

/// Adds a unit-cost edge `u -> w` for every `w` reachable from `u`, in place.
///
/// Pairs that are already adjacent keep their edge and cost. Returns the number of
/// edges added.
pub fn transitive_closure<W, G>(graph: &mut G) -> Result<usize>
where
    W: Weight,
    G: MutableGraph<W>,
{
    if graph.vertex_count() == 0 {
        return Err(Error::GraphEmpty);
    }

    let vertices: Vec<VertexKey> = graph.vertices().collect();
    let mut added = 0;

    for u in vertices {
        for w in reach::<W, G>(&*graph, u)? {
            match graph.insert_edge(u, w, W::one()) {
                Ok(()) => added += 1,
                Err(Error::EdgeAlreadyExists(..)) => {}
                Err(err) => return Err(err),
            }
        }
    }

    debug!("transitive closure added {} edges", added);
    Ok(added)
}
