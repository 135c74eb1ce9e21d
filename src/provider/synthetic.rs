//! Clustered synthetic city generator.

use super::{GraphProvider, ProvidedGraph, ProviderError};
use crate::graph::{Coordinate, EdgeWeight, Positions, RoadNetwork};
use crate::random::rng_from_seed;
use rand::Rng;

/// Side of the square (in degrees) each cluster's nodes are scattered in.
const SPREAD_DEG: f64 = 0.05;

/// A random city of four neighbouring clusters.
///
/// Nodes are named `node_0 .. node_{n-1}` and split into four consecutive
/// groups. Each group is centred on a corner of a half-spread square next
/// to `center`, and each node is jittered uniformly by up to half a spread
/// in both axes.
///
/// Every node links to a random number of its nearest neighbours
/// (`max(2, floor(n * density * U(0.5, 1.5)))`). A link is a pair of
/// directed edges with the same haversine distance in kilometers; travel
/// time assumes 30-50 km/h with a 0.9-1.3 traffic factor, and the return
/// direction varies by another ±5%. Distances and times are rounded to two
/// decimals.
///
/// # Examples
///
/// ```
/// use u_route_engine::graph::Coordinate;
/// use u_route_engine::provider::SyntheticCity;
/// use u_route_engine::random::create_rng;
///
/// let city = SyntheticCity::default()
///     .with_num_nodes(20)
///     .with_center(Coordinate::new(52.52, 13.405));
/// let a = city.generate_with_rng(&mut create_rng(3))?;
/// let b = city.generate_with_rng(&mut create_rng(3))?;
/// assert_eq!(a, b);
/// # Ok::<(), u_route_engine::provider::ProviderError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyntheticCity {
    /// Number of intersections.
    pub num_nodes: usize,

    /// Connection density in `[0, 1]`.
    pub density: f64,

    /// City centre.
    pub center: Coordinate,

    /// Random seed used by [`GraphProvider::provide`].
    pub seed: Option<u64>,
}

impl Default for SyntheticCity {
    fn default() -> Self {
        Self {
            num_nodes: 30,
            density: 0.3,
            center: Coordinate::new(28.6139, 77.2090),
            seed: None,
        }
    }
}

impl SyntheticCity {
    /// Sets the number of intersections.
    pub fn with_num_nodes(mut self, n: usize) -> Self {
        self.num_nodes = n;
        self
    }

    /// Sets the connection density (clamped to `[0, 1]`).
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density.clamp(0.0, 1.0);
        self
    }

    /// Sets the city centre.
    pub fn with_center(mut self, center: Coordinate) -> Self {
        self.center = center;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates a city drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// [`ProviderError::EmptyNetwork`] when `num_nodes` is zero.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Result<ProvidedGraph, ProviderError> {
        let n = self.num_nodes;
        if n == 0 {
            return Err(ProviderError::EmptyNetwork);
        }

        let names: Vec<String> = (0..n).map(|i| format!("node_{i}")).collect();
        let coords: Vec<Coordinate> = (0..n).map(|i| self.place(i, rng)).collect();

        let mut network = RoadNetwork::new();
        for name in &names {
            network.add_node(name.clone());
        }

        for i in 0..n {
            let mut nearest: Vec<(usize, f64)> = (0..n)
                .filter(|&j| j != i)
                .map(|j| (j, coords[i].haversine_km(&coords[j])))
                .collect();
            nearest.sort_by(|a, b| a.1.total_cmp(&b.1));

            let links = (n as f64 * self.density * rng.random_range(0.5..1.5)) as usize;
            for &(j, dist) in nearest.iter().take(links.max(2)) {
                if network.edge(&names[i], &names[j]).is_some() {
                    continue;
                }
                let speed_kmh = rng.random_range(30.0..50.0);
                let minutes = dist / speed_kmh * 60.0;
                let traffic = rng.random_range(0.9..1.3);
                network.add_edge(
                    names[i].clone(),
                    names[j].clone(),
                    EdgeWeight::new(round2(dist), round2(minutes * traffic)),
                );
                let back = rng.random_range(0.95..1.05);
                network.add_edge(
                    names[j].clone(),
                    names[i].clone(),
                    EdgeWeight::new(round2(dist), round2(minutes * back)),
                );
            }
        }

        let positions: Positions<String> = names.into_iter().zip(coords).collect();
        log::debug!(
            "synthetic city: {} nodes, {} directed edges",
            network.node_count(),
            network.edge_count()
        );
        Ok(ProvidedGraph { network, positions })
    }

    /// Jittered position of node `i` within its cluster.
    fn place<R: Rng>(&self, i: usize, rng: &mut R) -> Coordinate {
        let n = self.num_nodes;
        let cluster = if n >= 4 { i / (n / 4) } else { 0 };
        let lat_offset = (cluster % 2) as f64 * SPREAD_DEG * 0.5;
        let lon_offset = (cluster / 2) as f64 * SPREAD_DEG * 0.5;
        let half = SPREAD_DEG / 2.0;
        let lat = self.center.lat + lat_offset + rng.random_range(-half..half);
        let lon = self.center.lon + lon_offset + rng.random_range(-half..half);
        Coordinate::new(lat, lon)
    }
}

impl GraphProvider for SyntheticCity {
    fn provide(&self) -> Result<ProvidedGraph, ProviderError> {
        self.generate_with_rng(&mut rng_from_seed(self.seed))
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
