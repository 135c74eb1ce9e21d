//! Primary provider with a secondary used on failure.

use super::{GraphProvider, ProvidedGraph, ProviderError};

/// Tries `primary` once and uses `secondary` if it fails.
///
/// The failure is logged at `warn` level and otherwise swallowed; only the
/// secondary's error reaches the caller.
///
/// # Examples
///
/// ```
/// use u_route_engine::provider::{Fallback, GraphProvider, ProvidedGraph, ProviderError, SyntheticCity};
///
/// struct Offline;
///
/// impl GraphProvider for Offline {
///     fn provide(&self) -> Result<ProvidedGraph, ProviderError> {
///         Err(ProviderError::EmptyNetwork)
///     }
/// }
///
/// let city = SyntheticCity::default().with_num_nodes(8).with_seed(2);
/// let graph = Fallback::new(Offline, city).provide()?;
/// assert_eq!(graph.network.node_count(), 8);
/// # Ok::<(), ProviderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Fallback<P, S> {
    primary: P,
    secondary: S,
}

impl<P: GraphProvider, S: GraphProvider> Fallback<P, S> {
    /// Creates the fallback chain.
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: GraphProvider, S: GraphProvider> GraphProvider for Fallback<P, S> {
    fn provide(&self) -> Result<ProvidedGraph, ProviderError> {
        match self.primary.provide() {
            Ok(graph) => Ok(graph),
            Err(err) => {
                log::warn!("primary road network unavailable ({err}); using fallback");
                self.secondary.provide()
            }
        }
    }
}
