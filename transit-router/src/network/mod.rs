//! Read-only access to a transit network.
//!
//! The router only ever reads the network through [`NetworkSource`], so it
//! can be built from any store of stops, buses and road distances. The
//! in-memory [`TransportCatalogue`] is the store the binary and the tests use.

mod catalogue;
mod input;

pub use catalogue::TransportCatalogue;
pub use input::{BusDescription, NetworkDescription, StopDescription};

use crate::domain::{Bus, Stop};

/// Trait for providing the stops, buses and road distances of a network.
///
/// This abstraction allows the router to be built from test fixtures as
/// well as from a loaded catalogue.
pub trait NetworkSource {
    /// All stops, in id order.
    fn stops(&self) -> &[Stop];

    /// All bus routes, in insertion order.
    fn buses(&self) -> &[Bus];

    /// Look up a stop by name.
    fn find_stop(&self, name: &str) -> Option<&Stop>;

    /// The road distance in meters explicitly recorded from `from` to `to`.
    ///
    /// Implementations must not fall back to the reverse direction; callers
    /// that want that use [`road_distance`].
    fn distance(&self, from: &str, to: &str) -> Option<u32>;
}

/// Road distance in meters from `from` to `to`.
///
/// Uses the recorded `from → to` value, falling back to `to → from`, and
/// treats a pair with neither as zero meters apart.
pub fn road_distance<N: NetworkSource + ?Sized>(network: &N, from: &str, to: &str) -> u32 {
    network
        .distance(from, to)
        .or_else(|| network.distance(to, from))
        .unwrap_or(0)
}
