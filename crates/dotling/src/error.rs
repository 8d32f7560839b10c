pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An attribute was read before it was ever set.
    #[error("Attribute with name \"{name}\" was not found")]
    AttributeNotFound { name: String },

    #[error("Type must be \"digraph\", \"graph\", or \"subgraph\", got \"{value}\"")]
    InvalidGraphType { value: String },

    /// The external renderer exited non-zero; carries its combined output.
    #[error("GraphViz error: {output}")]
    Render { output: String },

    /// Temp-file or subprocess-spawn failure during export.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
