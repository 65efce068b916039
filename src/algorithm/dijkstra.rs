use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::PriorityQueue;
use crate::graph::{Graph, VertexKey, Weight};
use crate::{Error, Result};

/// Tentative distance kept in the queue. `Unreached` orders after every finite
/// cost, so reachability never depends on how large the costs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Distance<W> {
    Finite(W),
    Unreached,
}

/// Classic Dijkstra's algorithm over a decrease-key priority queue.
///
/// Costs must be non-negative for the result to be meaningful. Path costs
/// saturate at `W::max_value()`; a saturated vertex is still reported reachable.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<G>(&self, graph: &G, source: VertexKey) -> Result<ShortestPathResult<W>>
    where
        G: Graph<W>,
    {
        if graph.vertex_count() == 0 {
            return Err(Error::GraphEmpty);
        }
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }

        let vertices: Vec<VertexKey> = graph.vertices().collect();
        let position = |vertex: VertexKey| {
            vertices
                .binary_search(&vertex)
                .map_err(|_| Error::VertexNotFound(vertex))
        };

        let n = vertices.len();
        let mut costs: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<VertexKey>> = vec![None; n];
        let mut visited = vec![false; n];

        // Every vertex starts queued as unreached; the source is then lowered to zero
        let mut queue = PriorityQueue::with_capacity(n)?;
        for &vertex in &vertices {
            queue.insert(vertex, Distance::Unreached)?;
        }
        costs[position(source)?] = Some(W::zero());
        queue.decrease_key(source, Distance::Finite(W::zero()))?;

        while !queue.is_empty() {
            let (u, distance) = queue.delete_min()?;
            visited[position(u)?] = true;
            let cost_u = match distance {
                Distance::Finite(cost) => cost,
                Distance::Unreached => continue,
            };

            for (w, edge_cost) in graph.outgoing_edges(u) {
                let wi = position(w)?;
                if visited[wi] {
                    continue;
                }

                let candidate = cost_u.saturating_add(edge_cost);
                if costs[wi].map_or(true, |current| candidate < current) {
                    trace!("relaxed {}->{}: {:?} -> {}", u, w, costs[wi], candidate);
                    costs[wi] = Some(candidate);
                    predecessors[wi] = Some(u);
                    queue.decrease_key(w, Distance::Finite(candidate))?;
                }
            }
        }

        debug!(
            "dijkstra from {}: {} of {} vertices reached",
            source,
            costs.iter().filter(|c| c.is_some()).count(),
            n
        );

        Ok(ShortestPathResult {
            vertices,
            costs,
            predecessors,
            source,
        })
    }
}

/// Runs [`Dijkstra`] from `source`
pub fn shortest_paths<W, G>(graph: &G, source: VertexKey) -> Result<ShortestPathResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Digraph, MutableGraph};

    #[test]
    fn test_unreached_orders_after_every_cost() {
        assert!(Distance::Finite(i32::MAX) < Distance::Unreached);
        assert!(Distance::Finite(-3) < Distance::Finite(2));
    }

    #[test]
    fn test_saturated_path_stays_reachable() {
        let mut graph: Digraph = Digraph::directed();
        for v in 1..=3 {
            graph.insert_vertex(v).unwrap();
        }
        graph.insert_edge(1, 2, i32::MAX - 1).unwrap();
        graph.insert_edge(2, 3, 5).unwrap();

        let result = shortest_paths(&graph, 1).unwrap();
        assert_eq!(result.cost(2), Some(i32::MAX - 1));
        assert_eq!(result.cost(3), Some(i32::MAX));
        assert_eq!(result.predecessor(3), Some(2));
    }
}
