//! Node coordinates and distance helpers.

use super::types::NodeId;
use std::collections::BTreeMap;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A `(latitude, longitude)` pair in degrees.
///
/// Serialized as a two-element array `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(f64, f64)", into = "(f64, f64)"))]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Straight-line distance treating `(lat, lon)` as Cartesian `(x, y)`.
    ///
    /// The result is in raw degree units, not kilometers. A* uses this as
    /// its heuristic unchanged.
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        (other.lat - self.lat).hypot(other.lon - self.lon)
    }

    /// Great-circle distance in kilometers (haversine formula).
    pub fn haversine_km(&self, other: &Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lon)
    }
}

/// A node of a path together with its coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCoordinate<N> {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// The node at this position.
    pub node: N,
}

/// Coordinates of network nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Positions<N: Ord> {
    coords: BTreeMap<N, Coordinate>,
}

impl<N: Ord> Default for Positions<N> {
    fn default() -> Self {
        Self {
            coords: BTreeMap::new(),
        }
    }
}

impl<N: NodeId> Positions<N> {
    /// Creates an empty position map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coordinate of `node`.
    pub fn insert(&mut self, node: N, coord: impl Into<Coordinate>) -> &mut Self {
        self.coords.insert(node, coord.into());
        self
    }

    /// The coordinate of `node`, if known.
    pub fn get(&self, node: &N) -> Option<Coordinate> {
        self.coords.get(node).copied()
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether no node has a position.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Iterates over `(node, coordinate)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, Coordinate)> {
        self.coords.iter().map(|(n, &c)| (n, c))
    }

    /// Planar distance between two nodes, `None` if either lacks a position.
    pub fn planar_distance(&self, from: &N, to: &N) -> Option<f64> {
        Some(self.get(from)?.planar_distance(&self.get(to)?))
    }

    /// Expands a path into coordinates, skipping nodes without a position.
    pub fn trace(&self, path: &[N]) -> Vec<PathCoordinate<N>> {
        path.iter()
            .filter_map(|node| {
                self.get(node).map(|c| PathCoordinate {
                    lat: c.lat,
                    lon: c.lon,
                    node: node.clone(),
                })
            })
            .collect()
    }
}

impl<N: NodeId, C: Into<Coordinate>> FromIterator<(N, C)> for Positions<N> {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().map(|(n, c)| (n, c.into())).collect(),
        }
    }
}
