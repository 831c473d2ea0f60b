//! Fastest-route planner for a static bus network.
//!
//! Answers "what is the quickest way from stop A to stop B", counting the
//! wait at each stop before boarding and the riding time along the road.
//! The router is built once, can be saved to disk and reloaded, and then
//! answers queries without searching the graph again.

pub mod domain;
pub mod graph;
pub mod network;
pub mod persist;
pub mod router;
