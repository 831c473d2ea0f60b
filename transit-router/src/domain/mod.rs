//! Domain types for the transit network.
//!
//! Stops and buses are plain data: a stop is a named coordinate, a bus is
//! a named ordered list of stop names. Everything else in the crate refers
//! to stops by name or by dense [`StopId`].

mod bus;
mod error;
mod stop;

pub use bus::Bus;
pub use error::NetworkError;
pub use stop::{Coordinates, Stop, StopId};
