//! Protobuf schema of a persisted router.
//!
//! Ids are stored as `uint64` and doubles are stored bit-exact, so a decoded
//! record describes exactly the router that was encoded.

use prost::Message;

/// A persisted router. All four blocks are required.
#[derive(Clone, PartialEq, Message)]
pub struct TransitBase {
    #[prost(message, optional, tag = "1")]
    pub settings: Option<RoutingSettingsRecord>,

    #[prost(message, optional, tag = "2")]
    pub graph: Option<GraphRecord>,

    #[prost(message, optional, tag = "3")]
    pub table: Option<TableRecord>,

    #[prost(message, optional, tag = "4")]
    pub essentials: Option<EssentialsRecord>,
}

/// Settings the graph was built with.
#[derive(Clone, PartialEq, Message)]
pub struct RoutingSettingsRecord {
    /// Minutes.
    #[prost(uint32, tag = "1")]
    pub bus_wait_time: u32,

    /// km/h.
    #[prost(double, tag = "2")]
    pub bus_velocity: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct EdgeRecord {
    #[prost(uint64, tag = "1")]
    pub from: u64,

    #[prost(uint64, tag = "2")]
    pub to: u64,

    #[prost(double, tag = "3")]
    pub weight: f64,
}

/// Outgoing edge ids of one vertex.
#[derive(Clone, PartialEq, Message)]
pub struct IncidenceListRecord {
    #[prost(uint64, repeated, tag = "1")]
    pub edge_ids: Vec<u64>,
}

/// Edges in id order and one incidence list per vertex.
#[derive(Clone, PartialEq, Message)]
pub struct GraphRecord {
    #[prost(message, repeated, tag = "1")]
    pub edges: Vec<EdgeRecord>,

    #[prost(message, repeated, tag = "2")]
    pub incidence_lists: Vec<IncidenceListRecord>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PathEntryRecord {
    #[prost(double, tag = "1")]
    pub weight: f64,

    #[prost(uint64, optional, tag = "2")]
    pub prev_edge: Option<u64>,
}

/// One (source, destination) cell. An absent entry means unreached.
#[derive(Clone, PartialEq, Message)]
pub struct TableCellRecord {
    #[prost(message, optional, tag = "1")]
    pub entry: Option<PathEntryRecord>,
}

/// Cells for every destination from one source.
#[derive(Clone, PartialEq, Message)]
pub struct TableRowRecord {
    #[prost(message, repeated, tag = "1")]
    pub cells: Vec<TableCellRecord>,
}

/// Rows for every source vertex.
#[derive(Clone, PartialEq, Message)]
pub struct TableRecord {
    #[prost(message, repeated, tag = "1")]
    pub rows: Vec<TableRowRecord>,
}

#[derive(Clone, PartialEq, Message)]
pub struct StopVertexesRecord {
    #[prost(string, tag = "1")]
    pub stop_name: String,

    #[prost(uint64, tag = "2")]
    pub terminal: u64,

    #[prost(uint64, tag = "3")]
    pub on_route: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum RouteItemKind {
    Wait = 0,
    Bus = 1,
}

/// The itinerary step one edge stands for.
#[derive(Clone, PartialEq, Message)]
pub struct RouteItemRecord {
    #[prost(uint64, tag = "1")]
    pub edge_id: u64,

    #[prost(enumeration = "RouteItemKind", tag = "2")]
    pub kind: i32,

    /// Stop name for a wait, bus name for a ride.
    #[prost(string, tag = "3")]
    pub name: String,

    #[prost(double, tag = "4")]
    pub time: f64,

    #[prost(uint64, tag = "5")]
    pub span_count: u64,
}

#[derive(Clone, PartialEq, Message)]
pub struct EssentialsRecord {
    #[prost(message, repeated, tag = "1")]
    pub stops: Vec<StopVertexesRecord>,

    #[prost(message, repeated, tag = "2")]
    pub route_items: Vec<RouteItemRecord>,
}
