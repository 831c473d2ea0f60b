//! Route result types.
//!
//! A `Route` is what a query returns: the ordered wait and ride steps from
//! one stop to another and the total time they take.

use serde::Serialize;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Wait at a stop for the next bus
    Wait { stop_name: String, time: f64 },
    /// Ride one bus across `span_count` stop-to-stop segments
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    /// Creates a wait step.
    pub fn wait(stop_name: impl Into<String>, time: f64) -> Self {
        RouteItem::Wait {
            stop_name: stop_name.into(),
            time,
        }
    }

    /// Creates a ride step.
    pub fn ride(bus: impl Into<String>, span_count: usize, time: f64) -> Self {
        RouteItem::Bus {
            bus: bus.into(),
            span_count,
            time,
        }
    }

    /// Returns the time this step takes (minutes).
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }

    /// Returns the stop name for a wait, or the bus name for a ride.
    pub fn name(&self) -> &str {
        match self {
            RouteItem::Wait { stop_name, .. } => stop_name,
            RouteItem::Bus { bus, .. } => bus,
        }
    }

    /// Returns the number of segments ridden; zero for a wait.
    pub fn span_count(&self) -> usize {
        match self {
            RouteItem::Wait { .. } => 0,
            RouteItem::Bus { span_count, .. } => *span_count,
        }
    }

    /// Returns true if this is a wait step.
    pub fn is_wait(&self) -> bool {
        matches!(self, RouteItem::Wait { .. })
    }
}

/// A found route: its steps in travel order and their total time (minutes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub items: Vec<RouteItem>,
    pub total_time: f64,
}

impl Route {
    /// The route from a stop to itself: nothing to do, no time taken.
    pub fn trivial() -> Self {
        Self {
            items: Vec::new(),
            total_time: 0.0,
        }
    }
}

/// Reasons a route query has no answer.
///
/// Both variants mean "not found" to a caller; they are kept apart for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The stop name isn't part of the network
    #[error("unknown stop: {name}")]
    UnknownStop { name: String },

    /// Both stops exist but no sequence of rides connects them
    #[error("no route from {from} to {to}")]
    NoPath { from: String, to: String },
}
