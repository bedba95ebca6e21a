pub mod edge;
pub mod scratch;
pub mod store;
pub mod vertex;

pub use edge::{Edge, DEFAULT_WEIGHT};
pub use scratch::{Color, ColorMap};
pub use store::Graph;
pub use vertex::{Vertex, VertexId};
