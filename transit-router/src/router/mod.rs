//! Fastest-route planning over a static bus network.
//!
//! Building a router turns the network into a directed graph (see
//! [`GraphBuilder`]) and runs a shortest-path search from every vertex up
//! front (see [`ShortestPathIndex`]). Queries then only walk predecessor
//! edges in the precomputed table and translate them into wait and ride
//! steps.

mod builder;
mod config;
mod error;
mod essentials;
mod index;
mod route;
mod transport_router;

#[cfg(test)]
pub(crate) mod router_tests;

pub use builder::GraphBuilder;
pub use config::RoutingSettings;
pub use error::BuildError;
pub use essentials::{RouterEssentials, Vertexes};
pub use index::{PathEntry, PathRow, RouteInfo, ShortestPathIndex};
pub use route::{Route, RouteError, RouteItem};
pub use transport_router::TransportRouter;
