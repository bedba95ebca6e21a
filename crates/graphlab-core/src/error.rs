use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Graph is disconnected: spanning tree stopped after {selected} of {required} edges")]
    Disconnected { selected: usize, required: usize },

    #[error("Distance unset for vertex {0} during relaxation")]
    UnsetDistance(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
