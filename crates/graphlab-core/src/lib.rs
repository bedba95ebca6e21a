pub mod algorithms;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod result;

pub use config::EngineConfig;
pub use error::GraphError;
pub use graph::{Color, ColorMap, Edge, Graph, Vertex, VertexId};
pub use logging::{Loggable, VisitEntry, VisitLog};
pub use result::GraphResult;
