//! Road network sources.
//!
//! The search and sequencing code only ever borrows a [`RoadNetwork`] and
//! its [`Positions`]. Where those come from is decided once, up front, by a
//! [`GraphProvider`]:
//!
//! - [`SyntheticCity`]: a clustered random city, deterministic under a seed
//! - [`NetworkFile`]: a JSON export of a real map (feature `serde`)
//! - [`Fallback`]: a primary source with a secondary used on failure

#[cfg(feature = "serde")]
mod document;
mod error;
mod fallback;
mod synthetic;

#[cfg(feature = "serde")]
pub use document::{NetworkDocument, NetworkFile};
pub use error::ProviderError;
pub use fallback::Fallback;
pub use synthetic::SyntheticCity;

use crate::graph::{Positions, RoadNetwork};
use std::collections::BTreeSet;

/// A road network together with the coordinates of its nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProvidedGraph {
    /// Directed weighted adjacency.
    pub network: RoadNetwork<String>,
    /// Node coordinates.
    pub positions: Positions<String>,
}

impl ProvidedGraph {
    /// Checks that the network has nodes and every position names a node
    /// of the network (as a source or as an edge target).
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.network.is_empty() {
            return Err(ProviderError::EmptyNetwork);
        }

        let mut known: BTreeSet<&String> = self.network.nodes().collect();
        for node in self.network.nodes() {
            known.extend(self.network.neighbors(node).map(|(to, _)| to));
        }
        match self.positions.iter().find(|(node, _)| !known.contains(node)) {
            Some((node, _)) => Err(ProviderError::DanglingPosition { node: node.clone() }),
            None => Ok(()),
        }
    }
}

/// Supplies a road network and node positions.
///
/// # Examples
///
/// ```
/// use u_route_engine::provider::{GraphProvider, SyntheticCity};
///
/// let graph = SyntheticCity::default().with_num_nodes(12).with_seed(1).provide()?;
/// assert_eq!(graph.network.node_count(), 12);
/// assert_eq!(graph.positions.len(), 12);
/// # Ok::<(), u_route_engine::provider::ProviderError>(())
/// ```
pub trait GraphProvider {
    /// Builds the network.
    fn provide(&self) -> Result<ProvidedGraph, ProviderError>;
}
