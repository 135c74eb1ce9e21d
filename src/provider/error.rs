//! Errors raised while building a road network.

use thiserror::Error;

/// Errors raised by a [`GraphProvider`](super::GraphProvider).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Reading a network document failed.
    #[cfg(feature = "serde")]
    #[error("failed to read network document at {path}")]
    Io {
        /// Path of the document.
        path: std::path::PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },

    /// A network document is not valid JSON of the expected shape.
    #[cfg(feature = "serde")]
    #[error("failed to decode network document")]
    Json(#[from] serde_json::Error),

    /// The provider produced a network without nodes.
    #[error("road network has no nodes")]
    EmptyNetwork,

    /// A position refers to a node that appears nowhere in the network.
    #[error("position given for unknown node {node}")]
    DanglingPosition {
        /// The unknown node.
        node: String,
    },
}
