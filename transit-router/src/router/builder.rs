//! Graph construction from a transit network.
//!
//! Every stop becomes two vertices: `terminal` (standing at the stop) and
//! `on_route` (boarded, about to ride). A wait edge leads from the first to
//! the second. For each direction a bus is ridden in, a ride edge leads from
//! `on_route` at every stop to `terminal` at every later stop, so a shortest
//! path can stay on one bus past any number of stops without paying the wait
//! again.

use tracing::{debug, info};

use crate::graph::{DirectedWeightedGraph, Edge, VertexId};
use crate::network::{NetworkSource, road_distance};

use super::config::RoutingSettings;
use super::essentials::{RouterEssentials, Vertexes};
use super::{BuildError, RouteItem};

/// Builds the routing graph and its essentials from a network.
pub struct GraphBuilder<'a, N: NetworkSource + ?Sized> {
    network: &'a N,
    settings: RoutingSettings,
    graph: DirectedWeightedGraph,
    essentials: RouterEssentials,
}

impl<'a, N: NetworkSource + ?Sized> GraphBuilder<'a, N> {
    /// Create a builder with `2 × stop count` vertices and no edges.
    pub fn new(network: &'a N, settings: RoutingSettings) -> Self {
        Self {
            network,
            settings,
            graph: DirectedWeightedGraph::new(network.stops().len() * 2),
            essentials: RouterEssentials::new(),
        }
    }

    /// Build the graph.
    ///
    /// Fails if the settings are invalid or a bus names a stop the network
    /// can't resolve. Nothing is returned from a failed build.
    pub fn build(mut self) -> Result<(DirectedWeightedGraph, RouterEssentials), BuildError> {
        self.settings.validate()?;
        self.add_stops()?;
        self.add_buses()?;

        info!(
            stops = self.essentials.stop_count(),
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "built routing graph"
        );

        Ok((self.graph, self.essentials))
    }

    /// Add the vertex pair and wait edge for every stop.
    fn add_stops(&mut self) -> Result<(), BuildError> {
        let wait = self.settings.wait_minutes();

        for (idx, stop) in self.network.stops().iter().enumerate() {
            let vertexes = Vertexes {
                terminal: VertexId(idx * 2),
                on_route: VertexId(idx * 2 + 1),
            };

            if !self.essentials.add_stop(stop.name.clone(), vertexes) {
                return Err(BuildError::DuplicateStop(stop.name.clone()));
            }

            self.add_edge(
                vertexes.terminal,
                vertexes.on_route,
                RouteItem::wait(stop.name.clone(), wait),
            );
        }

        Ok(())
    }

    /// Add ride edges for every direction of every bus.
    fn add_buses(&mut self) -> Result<(), BuildError> {
        let network = self.network;

        for bus in network.buses() {
            let edges_before = self.graph.edge_count();

            for traversal in bus.traversals() {
                let stops = self.resolve(&bus.name, &traversal)?;
                self.add_traversal(&bus.name, &stops);
            }

            debug!(
                bus = %bus.name,
                roundtrip = bus.is_roundtrip,
                ride_edges = self.graph.edge_count() - edges_before,
                "added bus"
            );
        }

        Ok(())
    }

    /// Resolve stop names to their canonical names and vertex pairs.
    fn resolve(&self, bus: &str, names: &[&str]) -> Result<Vec<(&'a str, Vertexes)>, BuildError> {
        let network = self.network;

        names
            .iter()
            .map(|name| {
                let unknown = || BuildError::UnknownStop {
                    bus: bus.to_string(),
                    stop: name.to_string(),
                };
                let stop = network.find_stop(name).ok_or_else(unknown)?;
                let vertexes = self.essentials.vertexes(&stop.name).ok_or_else(unknown)?;
                Ok((stop.name.as_str(), vertexes))
            })
            .collect()
    }

    /// Add a ride edge for every ordered pair of positions in one direction.
    fn add_traversal(&mut self, bus: &str, stops: &[(&str, Vertexes)]) {
        for (i, (_, board)) in stops.iter().enumerate() {
            let mut distance = 0.0;

            for j in (i + 1)..stops.len() {
                let (prev_name, _) = stops[j - 1];
                let (name, alight) = stops[j];
                distance += f64::from(road_distance(self.network, prev_name, name));

                let time = self.settings.ride_minutes(distance);
                self.add_edge(
                    board.on_route,
                    alight.terminal,
                    RouteItem::ride(bus, j - i, time),
                );
            }
        }
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, item: RouteItem) {
        let weight = item.time();
        let edge = self.graph.add_edge(Edge { from, to, weight });
        let item_edge = self.essentials.push_route_item(item);
        debug_assert_eq!(edge, item_edge);
    }
}
