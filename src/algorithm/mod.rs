pub mod traits;
pub mod dijkstra;
pub mod reachability;
pub mod classification;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use dijkstra::shortest_paths;
pub use reachability::{reach, strongly_connected, transitive_closure};
pub use classification::{classify_vertex, complement, is_regular, VertexKind};
