//! Road-network graph model.
//!
//! A [`RoadNetwork`] maps each node to its outgoing edges; each edge carries
//! an [`EdgeWeight`] record of named, non-negative costs. The network is
//! directed: an edge `A -> B` says nothing about `B -> A`. Nodes that only
//! appear as edge targets are sinks.
//!
//! [`Positions`] attaches a 2-D coordinate to nodes. Only heuristic-guided
//! search needs it.
//!
//! Both structures are built once by a
//! [`GraphProvider`](crate::provider::GraphProvider) and then borrowed
//! read-only by every search.

mod network;
mod positions;
mod types;

pub use network::RoadNetwork;
pub use positions::{Coordinate, PathCoordinate, Positions};
pub use types::{EdgeWeight, Metric, NodeId};
