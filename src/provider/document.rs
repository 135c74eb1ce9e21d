//! JSON network documents.
//!
//! The document layout is the export format of a map data source:
//!
//! ```json
//! {
//!   "graph": { "a": { "b": { "distance": 0.42, "time": 1.1 } } },
//!   "positions": { "a": [28.61, 77.20], "b": [28.62, 77.21] }
//! }
//! ```

use super::{GraphProvider, ProvidedGraph, ProviderError};
use crate::graph::{Positions, RoadNetwork};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// A serialized road network with node positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkDocument {
    /// `node -> neighbor -> {metric: cost}`.
    pub graph: RoadNetwork<String>,
    /// `node -> [lat, lon]`.
    #[serde(default)]
    pub positions: Positions<String>,
}

impl NetworkDocument {
    /// Decodes a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProviderError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Decodes a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and decodes the document at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Encodes the document as JSON.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), ProviderError> {
        Ok(serde_json::to_writer(writer, self)?)
    }

    /// Validates the document and converts it into a [`ProvidedGraph`].
    pub fn into_graph(self) -> Result<ProvidedGraph, ProviderError> {
        let graph = ProvidedGraph {
            network: self.graph,
            positions: self.positions,
        };
        graph.validate()?;
        Ok(graph)
    }
}

impl From<ProvidedGraph> for NetworkDocument {
    fn from(graph: ProvidedGraph) -> Self {
        Self {
            graph: graph.network,
            positions: graph.positions,
        }
    }
}

/// Loads a [`NetworkDocument`] from disk each time it is asked to provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkFile {
    path: PathBuf,
}

impl NetworkFile {
    /// A provider reading the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphProvider for NetworkFile {
    fn provide(&self) -> Result<ProvidedGraph, ProviderError> {
        NetworkDocument::from_path(&self.path)?.into_graph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Coordinate;
    use crate::provider::SyntheticCity;
    use crate::random::create_rng;

    const SAMPLE: &str = r#"{
        "graph": {
            "a": { "b": { "distance": 0.42, "time": 1.1 } },
            "b": { "a": { "distance": 0.42, "time": 1.3 }, "c": { "distance": 1.0, "time": 2.0 } }
        },
        "positions": { "a": [28.61, 77.20], "b": [28.62, 77.21], "c": [28.63, 77.22] }
    }"#;

    #[test]
    fn test_decode_sample() {
        let graph = NetworkDocument::from_json(SAMPLE).unwrap().into_graph().unwrap();
        let (a, b, c) = ("a".to_string(), "b".to_string(), "c".to_string());
        assert_eq!(graph.network.edge(&a, &b).map(|w| w.cost("time")), Some(1.1));
        assert_eq!(graph.network.edge(&b, &c).map(|w| w.cost("distance")), Some(1.0));
        assert!(!graph.network.contains(&c));
        assert_eq!(graph.positions.get(&c), Some(Coordinate::new(28.63, 77.22)));
    }

    #[test]
    fn test_positions_optional() {
        let doc = NetworkDocument::from_json(r#"{"graph": {"x": {}}}"#).unwrap();
        assert!(doc.positions.is_empty());
        assert!(doc.into_graph().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = NetworkDocument::from_json(r#"{"graph": ["#).unwrap_err();
        assert!(matches!(err, ProviderError::Json(_)));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let doc = NetworkDocument::from_json(r#"{"graph": {}, "positions": {}}"#).unwrap();
        assert!(matches!(doc.into_graph(), Err(ProviderError::EmptyNetwork)));
    }

    #[test]
    fn test_missing_file() {
        let provider = NetworkFile::new("/nonexistent/network.json");
        match provider.provide() {
            Err(ProviderError::Io { path, .. }) => assert_eq!(path, provider.path()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_synthetic_city_survives_encoding() {
        let city = SyntheticCity::default()
            .with_num_nodes(12)
            .generate_with_rng(&mut create_rng(8))
            .unwrap();
        let mut buf = Vec::new();
        NetworkDocument::from(city.clone()).to_writer(&mut buf).unwrap();
        let decoded = NetworkDocument::from_reader(buf.as_slice()).unwrap().into_graph().unwrap();
        assert_eq!(decoded.network.node_count(), city.network.node_count());
        assert_eq!(decoded.network.edge_count(), city.network.edge_count());
        assert_eq!(decoded.positions.len(), city.positions.len());
        for from in city.network.nodes() {
            for (to, w) in city.network.neighbors(from) {
                let got = decoded.network.edge(from, to).map(|d| d.cost("time"));
                assert!(got.is_some_and(|t| (t - w.cost("time")).abs() < 1e-9));
            }
        }
    }
}
