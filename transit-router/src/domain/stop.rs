//! Stop types.

use std::fmt;

/// Dense index of a stop within the network it was loaded into.
///
/// Stop ids are assigned in insertion order and never reused, so they can
/// be used directly as indices into per-stop arrays.
///
/// # Examples
///
/// ```
/// use transit_router::domain::StopId;
///
/// let id = StopId(3);
/// assert_eq!(usize::from(id), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StopId> for usize {
    fn from(value: StopId) -> Self {
        value.0
    }
}

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A named stop. Names are unique within a network.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(id: StopId, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id,
            name: name.into(),
            coordinates,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
