//! Routing settings for graph construction.

use serde::{Deserialize, Serialize};

use super::BuildError;

/// Meters per kilometre.
const METERS_PER_KM: f64 = 1000.0;

/// Minutes per hour.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Parameters that turn a network into edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop before boarding any bus (minutes).
    pub bus_wait_time: u32,

    /// Bus speed along the road (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create new settings with the given wait time and velocity.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check that the settings produce finite, non-negative edge weights.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(BuildError::InvalidSettings(format!(
                "bus velocity must be a positive number of km/h, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Returns the wait time as an edge weight.
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Convert a road distance to riding time in minutes.
    pub fn ride_minutes(&self, distance_meters: f64) -> f64 {
        distance_meters / (self.bus_velocity * METERS_PER_KM / MINUTES_PER_HOUR)
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}
