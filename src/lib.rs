//! Digraph ADT - directed and undirected graphs with Dijkstra shortest paths
//!
//! This library provides an ordered, key-addressed graph store that keeps in/out
//! degree bookkeeping for every vertex, a fixed-capacity binary min-heap with
//! decrease-key, and the classic algorithms built on top of them: Dijkstra,
//! reachability, strong connectivity, transitive closure, regularity, complement
//! and vertex classification.
//!
//! Graphs can be persisted in a flat line-oriented text format (see [`graph::io`]).

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult, VertexKind,
};
/// Re-export main types for convenient use
pub use graph::digraph::{Digraph, Mode};
pub use graph::{VertexKey, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Out of memory")]
    OutOfMemory,

    #[error("Graph has no vertices")]
    GraphEmpty,

    #[error("Invalid vertex key: {0}")]
    InvalidVertex(VertexKey),

    #[error("Vertex {0} does not exist")]
    VertexNotFound(VertexKey),

    #[error("Cannot key {0} vertices")]
    TooManyVertices(usize),

    #[error("Vertex {0} already exists")]
    VertexAlreadyExists(VertexKey),

    #[error("Edge {0}-{1} does not exist")]
    EdgeNotFound(VertexKey, VertexKey),

    #[error("Edge {0}-{1} already exists")]
    EdgeAlreadyExists(VertexKey, VertexKey),

    #[error("Cannot open file {path}: {source}")]
    FileNotFound {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Priority queue capacity must be positive")]
    ZeroCapacity,

    #[error("Priority queue is full")]
    QueueFull,

    #[error("Priority queue is empty")]
    QueueEmpty,

    #[error("Vertex {0} is not in the priority queue")]
    ElementNotFound(VertexKey),

    #[error("Vertex {0} is already in the priority queue")]
    DuplicateElement(VertexKey),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
