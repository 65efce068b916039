use std::collections::{BTreeSet, VecDeque};

use digraph_adt::algorithm::{
    classify_vertex, complement, is_regular, reach, strongly_connected, transitive_closure,
    VertexKind,
};
use digraph_adt::graph::generators::{
    generate_complete, generate_cycle, generate_edgeless, generate_random,
};
use digraph_adt::graph::{Digraph, Graph, Mode, MutableGraph, VertexKey};
use digraph_adt::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Breadth-first search over stored edges, source excluded unless on a cycle
fn bfs_reach(graph: &Digraph, source: VertexKey) -> BTreeSet<VertexKey> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        for (w, _) in graph.outgoing_edges(u) {
            if seen.insert(w) {
                queue.push_back(w);
            }
        }
    }

    seen.remove(&source);
    seen
}

fn small_random_graph(rng: &mut StdRng, mode: Mode) -> Digraph {
    let n = rng.gen_range(1..=6);
    let mut graph = Digraph::new(mode);
    for v in 1..=n {
        graph.insert_vertex(v).unwrap();
    }
    for u in 1..=n {
        for w in 1..=n {
            if u != w && !graph.has_edge(u, w) && rng.gen_bool(0.35) {
                graph.insert_edge(u, w, rng.gen_range(1..=9)).unwrap();
            }
        }
    }
    graph
}

#[test]
fn test_reach_excludes_source() {
    let graph = generate_cycle(4, 2).unwrap();
    assert_eq!(reach(&graph, 1).unwrap(), vec![2, 3, 4]);

    let mut chain: Digraph = Digraph::directed();
    for v in 1..=3 {
        chain.insert_vertex(v).unwrap();
    }
    chain.insert_edge(2, 3, 1).unwrap();
    assert_eq!(reach(&chain, 2).unwrap(), vec![3]);
    assert!(reach(&chain, 3).unwrap().is_empty());
    assert!(matches!(reach(&chain, 8), Err(Error::VertexNotFound(8))));
}

#[test]
fn test_strongly_connected_basic_shapes() {
    assert!(strongly_connected(&generate_cycle(5, 1).unwrap()).unwrap());
    assert!(strongly_connected(&generate_complete(Mode::Directed, 4).unwrap()).unwrap());
    assert!(strongly_connected(&generate_edgeless(Mode::Directed, 1).unwrap()).unwrap());
    assert!(!strongly_connected(&generate_edgeless(Mode::Undirected, 2).unwrap()).unwrap());

    let empty: Digraph = Digraph::directed();
    assert!(matches!(strongly_connected(&empty), Err(Error::GraphEmpty)));
}

#[test]
fn test_strongly_connected_detects_sink() {
    // A cycle 1 -> 2 -> 3 -> 1 plus a vertex that can be entered but not left
    let mut graph = generate_cycle(3, 1).unwrap();
    graph.insert_vertex(4).unwrap();
    graph.insert_edge(3, 4, 1).unwrap();

    assert!(!strongly_connected(&graph).unwrap());
    assert_eq!(classify_vertex(&graph, 4).unwrap(), VertexKind::Sink);
}

#[test]
fn test_strongly_connected_matches_bfs() {
    let mut rng = StdRng::seed_from_u64(7);

    for round in 0..200 {
        let mode = if round % 2 == 0 { Mode::Directed } else { Mode::Undirected };
        let graph = small_random_graph(&mut rng, mode);
        let n = graph.vertex_count();

        let expected = graph.vertices().all(|v| bfs_reach(&graph, v).len() == n - 1);
        assert_eq!(strongly_connected(&graph).unwrap(), expected, "{:?}", graph);
    }
}

#[test]
fn test_transitive_closure_matches_bfs() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let original = small_random_graph(&mut rng, Mode::Directed);
        let mut closure = original.clone();
        let added = transitive_closure(&mut closure).unwrap();

        assert_eq!(closure.edge_count(), original.edge_count() + added);
        for u in original.vertices() {
            let reachable = bfs_reach(&original, u);
            for w in original.vertices() {
                assert_eq!(closure.has_edge(u, w), reachable.contains(&w), "{} -> {}", u, w);
                // Existing edges keep their cost, new ones cost 1
                let expected_cost = original.edge_cost(u, w).or(reachable.contains(&w).then_some(1));
                assert_eq!(closure.edge_cost(u, w), expected_cost);
            }
        }
    }
}

#[test]
fn test_transitive_closure_of_chain() {
    let mut graph: Digraph = Digraph::directed();
    for v in 1..=4 {
        graph.insert_vertex(v).unwrap();
    }
    graph.insert_edge(1, 2, 7).unwrap();
    graph.insert_edge(2, 3, 7).unwrap();
    graph.insert_edge(3, 4, 7).unwrap();

    assert_eq!(transitive_closure(&mut graph).unwrap(), 3);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.edge_cost(1, 4), Some(1));
    assert_eq!(graph.edge_cost(1, 2), Some(7));
    assert!(!graph.has_edge(4, 1));

    // A second pass has nothing left to add
    assert_eq!(transitive_closure(&mut graph).unwrap(), 0);
}

#[test]
fn test_transitive_closure_empty_graph() {
    let mut graph: Digraph = Digraph::undirected();
    assert!(matches!(transitive_closure(&mut graph), Err(Error::GraphEmpty)));
}

#[test]
fn test_complement_counts() {
    let complete = generate_complete(Mode::Directed, 4).unwrap();
    let result = complement(&complete).unwrap();
    assert_eq!(result.vertex_count(), 4);
    assert_eq!(result.edge_count(), 0);

    let directed = complement(&generate_edgeless(Mode::Directed, 4).unwrap()).unwrap();
    assert_eq!(directed.mode(), Mode::Directed);
    assert_eq!(directed.edge_count(), 12);

    let undirected = complement(&generate_edgeless(Mode::Undirected, 4).unwrap()).unwrap();
    assert_eq!(undirected.mode(), Mode::Undirected);
    assert_eq!(undirected.edge_count(), 6);
    assert_eq!(undirected.edge_cost(4, 1), Some(1));
}

#[test]
fn test_complement_of_cycle() {
    let cycle = generate_cycle(3, 5).unwrap();
    let result = complement(&cycle).unwrap();

    let edges: Vec<_> = result.edges().collect();
    assert_eq!(edges, vec![(1, 3, 1), (2, 1, 1), (3, 2, 1)]);

    // The source graph is untouched
    assert_eq!(cycle.edge_count(), 3);
}

#[test]
fn test_complement_is_involutive_on_structure() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let graph = generate_random(Mode::Directed, 6, 1.5, 4, &mut rng).unwrap();
        let twice = complement(&complement(&graph).unwrap()).unwrap();

        for u in graph.vertices() {
            for w in graph.vertices() {
                assert_eq!(graph.has_edge(u, w), twice.has_edge(u, w));
            }
        }
    }
}

#[test]
fn test_is_regular() {
    assert!(is_regular(&generate_cycle(6, 2).unwrap()).unwrap());
    assert!(is_regular(&generate_complete(Mode::Directed, 5).unwrap()).unwrap());
    assert!(is_regular(&generate_complete(Mode::Undirected, 5).unwrap()).unwrap());
    assert!(is_regular(&generate_edgeless(Mode::Directed, 3).unwrap()).unwrap());

    // Star: the center has a different degree from the leaves
    let mut star = generate_edgeless(Mode::Undirected, 4).unwrap();
    for leaf in 2..=4 {
        star.insert_edge(1, leaf, 1).unwrap();
    }
    assert!(!is_regular(&star).unwrap());

    // Every in-degree is 1 but vertex 1 emits two edges
    let mut uneven = generate_cycle(3, 1).unwrap();
    uneven.remove_edge(2, 3).unwrap();
    uneven.insert_edge(1, 3, 1).unwrap();
    assert!(!is_regular(&uneven).unwrap());

    let empty: Digraph = Digraph::directed();
    assert!(matches!(is_regular(&empty), Err(Error::GraphEmpty)));
}

#[test]
fn test_classify_vertex() {
    let mut graph: Digraph = Digraph::directed();
    for v in 1..=4 {
        graph.insert_vertex(v).unwrap();
    }
    graph.insert_edge(1, 2, 1).unwrap();
    graph.insert_edge(2, 3, 1).unwrap();

    assert_eq!(classify_vertex(&graph, 1).unwrap(), VertexKind::Source);
    assert_eq!(classify_vertex(&graph, 2).unwrap(), VertexKind::Normal);
    assert_eq!(classify_vertex(&graph, 3).unwrap(), VertexKind::Sink);
    assert_eq!(classify_vertex(&graph, 4).unwrap(), VertexKind::Isolated);
    assert!(matches!(classify_vertex(&graph, 5), Err(Error::VertexNotFound(5))));

    let empty: Digraph = Digraph::directed();
    assert!(matches!(classify_vertex(&empty, 1), Err(Error::GraphEmpty)));

    // Undirected edges always count in both directions
    let mut pair: Digraph = Digraph::undirected();
    pair.insert_vertex(1).unwrap();
    pair.insert_vertex(2).unwrap();
    pair.insert_edge(1, 2, 1).unwrap();
    assert_eq!(classify_vertex(&pair, 1).unwrap(), VertexKind::Normal);
    assert_eq!(VertexKind::Normal.to_string(), "normal");
}

#[test]
fn test_reachability_ignores_cost_magnitude() {
    // Two-cycle where every edge carries the largest cost
    let mut cycle = generate_cycle(2, i32::MAX).unwrap();
    assert_eq!(reach(&cycle, 1).unwrap(), vec![2]);
    assert!(strongly_connected(&cycle).unwrap());
    assert_eq!(transitive_closure(&mut cycle).unwrap(), 0);

    // A path whose total cost saturates
    let mut chain: Digraph = Digraph::directed();
    for v in 1..=3 {
        chain.insert_vertex(v).unwrap();
    }
    chain.insert_edge(1, 2, i32::MAX - 1).unwrap();
    chain.insert_edge(2, 3, 5).unwrap();

    assert_eq!(reach(&chain, 1).unwrap(), vec![2, 3]);
    assert_eq!(transitive_closure(&mut chain).unwrap(), 1);
    assert_eq!(chain.edge_cost(1, 3), Some(1));
}
