//! In-memory transit network catalogue.

use std::collections::{HashMap, HashSet};

use crate::domain::{Bus, Coordinates, NetworkError, Stop, StopId};

use super::NetworkSource;

/// Arena of stops and buses with a name index and directed road distances.
///
/// Stops get dense [`StopId`]s in insertion order. Distances are keyed by
/// stop id pairs, so they are only accepted between stops already added.
/// Bus stop lists are stored as given and are not checked against the
/// stop set here; an unresolvable name is reported when a router is built.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,
    buses: Vec<Bus>,
    bus_names: HashSet<String>,
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, returning its id.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, NetworkError> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(NetworkError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(id, name, coordinates));
        Ok(id)
    }

    /// Add a bus route.
    pub fn add_bus(&mut self, bus: Bus) -> Result<(), NetworkError> {
        if self.bus_names.contains(&bus.name) {
            return Err(NetworkError::DuplicateBus(bus.name));
        }

        self.bus_names.insert(bus.name.clone());
        self.buses.push(bus);
        Ok(())
    }

    /// Record the road distance in meters from one stop to another.
    ///
    /// Setting the same pair twice keeps the last value.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), NetworkError> {
        match (self.stop_index.get(from), self.stop_index.get(to)) {
            (Some(&from_id), Some(&to_id)) => {
                self.distances.insert((from_id, to_id), meters);
                Ok(())
            }
            _ => Err(NetworkError::UnknownDistanceStop {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    /// Returns the number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns the number of buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}

impl NetworkSource for TransportCatalogue {
    fn stops(&self) -> &[Stop] {
        &self.stops
    }

    fn buses(&self) -> &[Bus] {
        &self.buses
    }

    fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|id| &self.stops[id.0])
    }

    fn distance(&self, from: &str, to: &str) -> Option<u32> {
        let from_id = self.stop_index.get(from)?;
        let to_id = self.stop_index.get(to)?;
        self.distances.get(&(*from_id, *to_id)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_get_dense_ids_in_insertion_order() {
        let mut catalogue = TransportCatalogue::new();
        let a = catalogue.add_stop("A", Coordinates::new(55.0, 37.0)).unwrap();
        let b = catalogue.add_stop("B", Coordinates::new(55.1, 37.1)).unwrap();

        assert_eq!(a, StopId(0));
        assert_eq!(b, StopId(1));
        assert_eq!(catalogue.stop_count(), 2);
        assert_eq!(catalogue.find_stop("B").map(|s| s.id), Some(b));
        assert!(catalogue.find_stop("C").is_none());
    }

    #[test]
    fn duplicate_stop_rejected() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::default()).unwrap();
        let err = catalogue.add_stop("A", Coordinates::default()).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateStop("A".into()));
    }

    #[test]
    fn duplicate_bus_rejected() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_bus(Bus::new("1", ["A"], true)).unwrap();
        let err = catalogue.add_bus(Bus::new("1", ["B"], true)).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateBus("1".into()));
        assert_eq!(catalogue.bus_count(), 1);
        assert_eq!(catalogue.buses()[0].stops, vec!["A".to_string()]);
    }

    #[test]
    fn distances_are_directed() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::default()).unwrap();
        catalogue.add_stop("B", Coordinates::default()).unwrap();
        catalogue.set_distance("A", "B", 700).unwrap();

        assert_eq!(catalogue.distance("A", "B"), Some(700));
        assert_eq!(catalogue.distance("B", "A"), None);
    }

    #[test]
    fn distance_to_unknown_stop_rejected() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::default()).unwrap();
        assert!(matches!(
            catalogue.set_distance("A", "Z", 10),
            Err(NetworkError::UnknownDistanceStop { .. })
        ));
    }

    #[test]
    fn buses_accept_unresolved_stop_names() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_bus(Bus::new("1", ["Nowhere"], false)).unwrap();
        assert_eq!(catalogue.buses().len(), 1);
    }
}
