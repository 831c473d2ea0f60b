//! JSON description of a network, as read by the `make-base` command.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{Bus, Coordinates, NetworkError};
use crate::router::RoutingSettings;

use super::TransportCatalogue;

/// A stop entry with its outgoing road distances.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDescription {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road distance in meters from this stop to each named neighbour.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// A bus entry. Stop names are resolved when the router is built.
#[derive(Debug, Clone, Deserialize)]
pub struct BusDescription {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// A complete network description with the settings to build it with.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkDescription {
    pub routing_settings: RoutingSettings,
    #[serde(default)]
    pub stops: Vec<StopDescription>,
    #[serde(default)]
    pub buses: Vec<BusDescription>,
}

impl NetworkDescription {
    /// Load the description into a catalogue.
    ///
    /// All stops are added before any distance, so a distance may name a
    /// stop that appears later in the list. Buses are added last.
    pub fn into_catalogue(self) -> Result<TransportCatalogue, NetworkError> {
        let mut catalogue = TransportCatalogue::new();

        for stop in &self.stops {
            catalogue.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude))?;
        }

        for stop in &self.stops {
            for (to, meters) in &stop.road_distances {
                catalogue.set_distance(&stop.name, to, *meters)?;
            }
        }

        for bus in self.buses {
            catalogue.add_bus(Bus::new(bus.name, bus.stops, bus.is_roundtrip))?;
        }

        Ok(catalogue)
    }
}
