//! Node identifiers, metrics, and edge cost records.

use std::collections::BTreeMap;
use std::fmt;

/// Marker trait for node identifiers.
///
/// Identifiers must be totally ordered: the search frontier falls back to
/// node order when costs tie, which keeps results reproducible.
///
/// Blanket-implemented for every suitable type, so `String`, `&str`,
/// `u32`, `u64`, and friends all work out of the box.
pub trait NodeId: Clone + Ord + fmt::Debug + fmt::Display + Send + Sync {}

impl<T> NodeId for T where T: Clone + Ord + fmt::Debug + fmt::Display + Send + Sync {}

/// The recognized edge metrics.
///
/// Searches take the metric as a plain `&str` so that an unrecognized name
/// degrades to "no usable edges" instead of being rejected. This enum only
/// names the metrics every provider is expected to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Road length in kilometers.
    Distance,
    /// Travel time in minutes.
    Time,
}

impl Metric {
    /// All recognized metrics.
    pub const ALL: [Metric; 2] = [Metric::Distance, Metric::Time];

    /// The key under which this metric is stored in an [`EdgeWeight`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Time => "time",
        }
    }

    /// Looks up a recognized metric by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

impl AsRef<str> for Metric {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-edge costs keyed by metric name.
///
/// A metric missing from the record costs `+inf`, which makes the edge
/// unusable when routing by that metric.
///
/// # Examples
///
/// ```
/// use u_route_engine::graph::EdgeWeight;
///
/// let w = EdgeWeight::new(1.2, 3.0);
/// assert_eq!(w.cost("distance"), 1.2);
/// assert_eq!(w.cost("time"), 3.0);
/// assert!(w.cost("tolls").is_infinite());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EdgeWeight {
    costs: BTreeMap<String, f64>,
}

impl EdgeWeight {
    /// Creates a record with both standard metrics.
    pub fn new(distance: f64, time: f64) -> Self {
        Self::empty()
            .with_cost(Metric::Distance, distance)
            .with_cost(Metric::Time, time)
    }

    /// Creates a record with no costs at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the cost for one metric.
    pub fn with_cost(mut self, metric: impl AsRef<str>, cost: f64) -> Self {
        self.costs.insert(metric.as_ref().to_owned(), cost);
        self
    }

    /// Cost under `metric`, or `+inf` when the edge does not carry it.
    pub fn cost(&self, metric: &str) -> f64 {
        self.get(metric).unwrap_or(f64::INFINITY)
    }

    /// Cost under `metric`, if present.
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.costs.get(metric).copied()
    }

    /// Iterates over `(metric, cost)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.costs.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for EdgeWeight {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
