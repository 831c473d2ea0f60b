//! Route queries over a built router.

use tracing::{trace, warn};

use crate::graph::DirectedWeightedGraph;
use crate::network::NetworkSource;

use super::builder::GraphBuilder;
use super::config::RoutingSettings;
use super::essentials::RouterEssentials;
use super::index::ShortestPathIndex;
use super::{BuildError, Route, RouteError, RouteItem};

/// A built routing graph with its shortest-path index.
///
/// Nothing is mutated after construction, so a router can answer any number
/// of queries, from any number of threads, once it exists.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRouter {
    settings: RoutingSettings,
    graph: DirectedWeightedGraph,
    index: ShortestPathIndex,
    essentials: RouterEssentials,
}

impl TransportRouter {
    /// Build the graph and the full shortest-path index for a network.
    pub fn build<N: NetworkSource + ?Sized>(
        network: &N,
        settings: RoutingSettings,
    ) -> Result<Self, BuildError> {
        let (graph, essentials) = GraphBuilder::new(network, settings).build()?;
        let index = ShortestPathIndex::build(&graph);

        Ok(Self {
            settings,
            graph,
            index,
            essentials,
        })
    }

    /// Reassemble a router from parts that were built together earlier.
    pub fn from_parts(
        settings: RoutingSettings,
        graph: DirectedWeightedGraph,
        index: ShortestPathIndex,
        essentials: RouterEssentials,
    ) -> Self {
        Self {
            settings,
            graph,
            index,
            essentials,
        }
    }

    /// Find the fastest route between two stops.
    ///
    /// Identical stop names give an empty zero-time route without touching
    /// the index.
    pub fn get_route(&self, from: &str, to: &str) -> Result<Route, RouteError> {
        let unknown = |name: &str| RouteError::UnknownStop {
            name: name.to_string(),
        };
        let from_vertexes = self.essentials.vertexes(from).ok_or_else(|| unknown(from))?;
        let to_vertexes = self.essentials.vertexes(to).ok_or_else(|| unknown(to))?;

        if from == to {
            return Ok(Route::trivial());
        }

        let no_path = || RouteError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        };
        let info = self
            .index
            .query(&self.graph, from_vertexes.terminal, to_vertexes.terminal)
            .ok_or_else(no_path)?;

        let items = info
            .edges
            .iter()
            .map(|&edge| self.essentials.route_item(edge).cloned())
            .collect::<Option<Vec<RouteItem>>>()
            .ok_or_else(|| {
                warn!(from, to, "shortest path uses an edge with no route item");
                no_path()
            })?;

        trace!(from, to, steps = items.len(), total_time = info.weight, "route found");

        Ok(Route {
            items,
            total_time: info.weight,
        })
    }

    /// Returns the settings the graph was built with.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Returns the routing graph.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Returns the shortest-path index.
    pub fn index(&self) -> &ShortestPathIndex {
        &self.index
    }

    /// Returns the stop and edge lookup tables.
    pub fn essentials(&self) -> &RouterEssentials {
        &self.essentials
    }
}
