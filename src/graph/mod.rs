pub mod traits;
pub mod digraph;
pub mod generators;
pub mod io;

use std::fmt::{Debug, Display};
use std::num::ParseIntError;
use std::str::FromStr;

use num_traits::PrimInt;

pub use traits::{Graph, MutableGraph};
pub use digraph::{Digraph, Mode};
pub use io::{load_from_file, read_from, store_to_file, write_to};

/// Identifier of a vertex. Keys are positive; `0` is never a valid vertex.
pub type VertexKey = u32;

/// Integer edge cost usable by the graph store and the algorithms
pub trait Weight:
    PrimInt + Debug + Display + FromStr<Err = ParseIntError> + serde::Serialize
{
}

impl<T> Weight for T where
    T: PrimInt + Debug + Display + FromStr<Err = ParseIntError> + serde::Serialize
{
}
