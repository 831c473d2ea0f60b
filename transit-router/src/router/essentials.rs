//! Lookup tables that turn graph ids back into stops and itinerary steps.

use std::collections::HashMap;

use crate::graph::{EdgeId, VertexId};

use super::RouteItem;

/// The two graph vertices that stand for one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertexes {
    /// Standing at the stop, not on any bus.
    pub terminal: VertexId,
    /// Boarded at the stop, about to ride.
    pub on_route: VertexId,
}

/// Stop name ↔ vertex pair mapping and edge id → route item mapping.
///
/// Stops are keyed by name rather than by any catalogue id, so a router
/// reloaded in another process only needs the names to answer queries.
/// Route items are indexed by edge id; every edge has exactly one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouterEssentials {
    stop_vertexes: Vec<(String, Vertexes)>,
    by_name: HashMap<String, Vertexes>,
    route_items: Vec<RouteItem>,
}

impl RouterEssentials {
    /// Create empty essentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the vertex pair for a stop.
    ///
    /// Returns `false` and leaves the mapping unchanged if the name is
    /// already registered.
    pub fn add_stop(&mut self, name: impl Into<String>, vertexes: Vertexes) -> bool {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return false;
        }
        self.by_name.insert(name.clone(), vertexes);
        self.stop_vertexes.push((name, vertexes));
        true
    }

    /// Append the route item for the next edge id.
    ///
    /// Items must be pushed in edge id order, starting from zero.
    pub fn push_route_item(&mut self, item: RouteItem) -> EdgeId {
        let id = EdgeId(self.route_items.len());
        self.route_items.push(item);
        id
    }

    /// Look up the vertex pair of a stop by name.
    pub fn vertexes(&self, stop_name: &str) -> Option<Vertexes> {
        self.by_name.get(stop_name).copied()
    }

    /// Look up the itinerary step an edge stands for.
    pub fn route_item(&self, edge: EdgeId) -> Option<&RouteItem> {
        self.route_items.get(edge.0)
    }

    /// All stops with their vertex pairs, in registration order.
    pub fn stop_vertexes(&self) -> &[(String, Vertexes)] {
        &self.stop_vertexes
    }

    /// All route items, indexed by edge id.
    pub fn route_items(&self) -> &[RouteItem] {
        &self.route_items
    }

    /// Returns the number of registered stops.
    pub fn stop_count(&self) -> usize {
        self.stop_vertexes.len()
    }
}
