use std::time::{Duration, Instant};
use digraph_adt::algorithm::{strongly_connected, transitive_closure, ShortestPathAlgorithm};
use digraph_adt::graph::generators::generate_random;
use digraph_adt::graph::{Graph, Mode};
use digraph_adt::{Digraph, Dijkstra};

// Function to benchmark Dijkstra from every tenth vertex of a graph
fn benchmark_dijkstra(graph: &Digraph) -> Result<Duration, digraph_adt::Error> {
    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    let mut reachable = 0;

    for source in graph.vertices().step_by(10) {
        let result = dijkstra.compute_shortest_paths(graph, source)?;
        reachable += result.reachable().count();
    }

    let duration = start.elapsed();
    println!("  - Dijkstra: {} reachable vertices in total, {:?}", reachable, duration);
    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![100, 250, 500, 1_000, 2_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 3.0;
    let closure_limit = 500;
    let mut rng = rand::thread_rng();

    println!("=====================================================");
    println!("Benchmark: Dijkstra, strong connectivity, closure");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random digraph with {} vertices...", size);
        let graph = generate_random(Mode::Directed, size, edge_factor, 100, &mut rng)?;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let dijkstra_time = benchmark_dijkstra(&graph)?;

        let start = Instant::now();
        let strong = strongly_connected(&graph)?;
        let strong_time = start.elapsed();
        println!("  - Strongly connected: {} in {:?}", strong, strong_time);

        // The closure tends towards V^2 edges, keep it to the small graphs
        let closure_time = if size <= closure_limit {
            let mut closure = graph.clone();
            let start = Instant::now();
            let added = transitive_closure(&mut closure)?;
            let elapsed = start.elapsed();
            println!("  - Transitive closure: {} edges added in {:?}", added, elapsed);
            Some(elapsed)
        } else {
            None
        };

        results.push((size, graph.edge_count(), dijkstra_time, strong_time, closure_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<15}",
             "Vertices", "Edges", "Dijkstra (ms)", "Strong (ms)", "Closure (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, dijkstra_time, strong_time, closure_time) in &results {
        let closure_ms = closure_time
            .map(|t| t.as_millis().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<15}",
                 size,
                 edges,
                 dijkstra_time.as_millis(),
                 strong_time.as_millis(),
                 closure_ms);
    }

    Ok(())
}
