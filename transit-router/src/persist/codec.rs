//! Conversion between a router and its persisted record.
//!
//! Encoding never fails. Decoding checks every id in the record against the
//! sizes it declares, and checks that each stop owns its own vertex pair
//! joined by its wait edge. A router that decodes successfully answers
//! queries the same way as one built from the network.

use prost::Message;

use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
use crate::router::{
    PathEntry, PathRow, RouteItem, RouterEssentials, RoutingSettings, ShortestPathIndex,
    TransportRouter, Vertexes,
};

use super::PersistError;
use super::schema::{
    EdgeRecord, EssentialsRecord, GraphRecord, IncidenceListRecord, PathEntryRecord,
    RouteItemKind, RouteItemRecord, RoutingSettingsRecord, StopVertexesRecord, TableCellRecord,
    TableRecord, TableRowRecord, TransitBase,
};

/// Encode a router to bytes.
pub fn encode(router: &TransportRouter) -> Vec<u8> {
    to_record(router).encode_to_vec()
}

/// Decode a router from bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<TransportRouter, PersistError> {
    let record = TransitBase::decode(bytes)?;
    from_record(record)
}

/// Build the record for a router.
pub fn to_record(router: &TransportRouter) -> TransitBase {
    TransitBase {
        settings: Some(settings_record(router.settings())),
        graph: Some(graph_record(router.graph())),
        table: Some(table_record(router.index())),
        essentials: Some(essentials_record(router.essentials())),
    }
}

/// Rebuild a router from a record, rejecting missing blocks and bad ids.
pub fn from_record(record: TransitBase) -> Result<TransportRouter, PersistError> {
    let settings = record.settings.ok_or(PersistError::MissingField("settings"))?;
    let graph = record.graph.ok_or(PersistError::MissingField("graph"))?;
    let table = record.table.ok_or(PersistError::MissingField("table"))?;
    let essentials = record.essentials.ok_or(PersistError::MissingField("essentials"))?;

    let settings = read_settings(settings)?;
    let graph = read_graph(graph)?;
    let index = read_table(table, &graph)?;
    let essentials = read_essentials(essentials, &graph)?;

    Ok(TransportRouter::from_parts(settings, graph, index, essentials))
}

fn settings_record(settings: &RoutingSettings) -> RoutingSettingsRecord {
    RoutingSettingsRecord {
        bus_wait_time: settings.bus_wait_time,
        bus_velocity: settings.bus_velocity,
    }
}

fn graph_record(graph: &DirectedWeightedGraph) -> GraphRecord {
    GraphRecord {
        edges: graph
            .edges()
            .iter()
            .map(|edge| EdgeRecord {
                from: edge.from.0 as u64,
                to: edge.to.0 as u64,
                weight: edge.weight,
            })
            .collect(),
        incidence_lists: graph
            .incidence_lists()
            .iter()
            .map(|list| IncidenceListRecord {
                edge_ids: list.iter().map(|id| id.0 as u64).collect(),
            })
            .collect(),
    }
}

fn table_record(index: &ShortestPathIndex) -> TableRecord {
    TableRecord {
        rows: index
            .rows()
            .iter()
            .map(|row| TableRowRecord {
                cells: row
                    .iter()
                    .map(|entry| TableCellRecord {
                        entry: entry.map(|entry| PathEntryRecord {
                            weight: entry.weight,
                            prev_edge: entry.prev_edge.map(|id| id.0 as u64),
                        }),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn essentials_record(essentials: &RouterEssentials) -> EssentialsRecord {
    EssentialsRecord {
        stops: essentials
            .stop_vertexes()
            .iter()
            .map(|(name, vertexes)| StopVertexesRecord {
                stop_name: name.clone(),
                terminal: vertexes.terminal.0 as u64,
                on_route: vertexes.on_route.0 as u64,
            })
            .collect(),
        route_items: essentials
            .route_items()
            .iter()
            .enumerate()
            .map(|(edge_id, item)| {
                let kind = if item.is_wait() {
                    RouteItemKind::Wait
                } else {
                    RouteItemKind::Bus
                };
                RouteItemRecord {
                    edge_id: edge_id as u64,
                    kind: kind as i32,
                    name: item.name().to_string(),
                    time: item.time(),
                    span_count: item.span_count() as u64,
                }
            })
            .collect(),
    }
}

fn read_settings(record: RoutingSettingsRecord) -> Result<RoutingSettings, PersistError> {
    let settings = RoutingSettings::new(record.bus_wait_time, record.bus_velocity);
    settings
        .validate()
        .map_err(|e| PersistError::Inconsistent(e.to_string()))?;
    Ok(settings)
}

/// Convert a stored id to an index below `bound`.
fn index_below(value: u64, bound: usize, what: &str) -> Result<usize, PersistError> {
    usize::try_from(value)
        .ok()
        .filter(|&idx| idx < bound)
        .ok_or_else(|| PersistError::Inconsistent(format!("{what} {value} out of range (< {bound})")))
}

fn read_graph(record: GraphRecord) -> Result<DirectedWeightedGraph, PersistError> {
    let vertex_count = record.incidence_lists.len();
    let edge_count = record.edges.len();

    let edges = record
        .edges
        .into_iter()
        .map(|edge| -> Result<Edge, PersistError> {
            Ok(Edge {
                from: VertexId(index_below(edge.from, vertex_count, "edge origin")?),
                to: VertexId(index_below(edge.to, vertex_count, "edge target")?),
                weight: edge.weight,
            })
        })
        .collect::<Result<Vec<_>, PersistError>>()?;

    let mut listed = vec![false; edge_count];
    let mut incidence_lists = Vec::with_capacity(vertex_count);
    for (vertex, list) in record.incidence_lists.into_iter().enumerate() {
        let mut ids = Vec::with_capacity(list.edge_ids.len());
        for raw in list.edge_ids {
            let id = index_below(raw, edge_count, "incident edge")?;
            if edges[id].from.0 != vertex || listed[id] {
                return Err(PersistError::Inconsistent(format!(
                    "edge {id} misplaced in incidence list of vertex {vertex}"
                )));
            }
            listed[id] = true;
            ids.push(EdgeId(id));
        }
        incidence_lists.push(ids);
    }

    if let Some(missing) = listed.iter().position(|&seen| !seen) {
        return Err(PersistError::Inconsistent(format!(
            "edge {missing} is in no incidence list"
        )));
    }

    Ok(DirectedWeightedGraph::from_parts(edges, incidence_lists))
}

fn read_table(
    record: TableRecord,
    graph: &DirectedWeightedGraph,
) -> Result<ShortestPathIndex, PersistError> {
    let vertex_count = graph.vertex_count();
    if record.rows.len() != vertex_count {
        return Err(PersistError::Inconsistent(format!(
            "table has {} rows for {vertex_count} vertices",
            record.rows.len()
        )));
    }

    let rows = record
        .rows
        .into_iter()
        .enumerate()
        .map(|(source, row)| {
            if row.cells.len() != vertex_count {
                return Err(PersistError::Inconsistent(format!(
                    "table row {source} has {} cells for {vertex_count} vertices",
                    row.cells.len()
                )));
            }
            row.cells
                .into_iter()
                .enumerate()
                .map(|(destination, cell)| read_cell(cell, source, destination, graph))
                .collect::<Result<PathRow, PersistError>>()
        })
        .collect::<Result<Vec<_>, PersistError>>()?;

    Ok(ShortestPathIndex::from_rows(rows))
}

fn read_cell(
    cell: TableCellRecord,
    source: usize,
    destination: usize,
    graph: &DirectedWeightedGraph,
) -> Result<Option<PathEntry>, PersistError> {
    let Some(entry) = cell.entry else {
        return Ok(None);
    };

    let prev_edge = match entry.prev_edge {
        Some(_) if source == destination => {
            return Err(PersistError::Inconsistent(format!(
                "source cell {source} has a predecessor edge"
            )));
        }
        Some(raw) => {
            let id = EdgeId(index_below(raw, graph.edge_count(), "predecessor edge")?);
            if graph.edge(id).map(|edge| edge.to.0) != Some(destination) {
                return Err(PersistError::Inconsistent(format!(
                    "predecessor edge {} does not end at vertex {destination}",
                    id.0
                )));
            }
            Some(id)
        }
        None if source != destination => {
            return Err(PersistError::Inconsistent(format!(
                "cell ({source}, {destination}) is reached with no predecessor edge"
            )));
        }
        None => None,
    };

    Ok(Some(PathEntry {
        weight: entry.weight,
        prev_edge,
    }))
}

fn read_essentials(
    record: EssentialsRecord,
    graph: &DirectedWeightedGraph,
) -> Result<RouterEssentials, PersistError> {
    let mut items: Vec<Option<RouteItem>> = vec![None; graph.edge_count()];
    for record in record.route_items {
        let edge_id = index_below(record.edge_id, items.len(), "route item edge")?;
        if items[edge_id].is_some() {
            return Err(PersistError::Inconsistent(format!(
                "edge {edge_id} has more than one route item"
            )));
        }
        items[edge_id] = Some(read_route_item(record)?);
    }

    let items = items
        .into_iter()
        .enumerate()
        .map(|(edge_id, item)| {
            item.ok_or_else(|| {
                PersistError::Inconsistent(format!("edge {edge_id} has no route item"))
            })
        })
        .collect::<Result<Vec<_>, PersistError>>()?;

    let vertex_count = graph.vertex_count();
    let mut claimed = vec![false; vertex_count];
    let mut essentials = RouterEssentials::new();

    for stop in record.stops {
        let vertexes = Vertexes {
            terminal: VertexId(index_below(stop.terminal, vertex_count, "terminal vertex")?),
            on_route: VertexId(index_below(stop.on_route, vertex_count, "on-route vertex")?),
        };

        for vertex in [vertexes.terminal, vertexes.on_route] {
            if claimed[vertex.0] {
                return Err(PersistError::Inconsistent(format!(
                    "vertex {} of stop {} belongs to another stop",
                    vertex.0, stop.stop_name
                )));
            }
            claimed[vertex.0] = true;
        }

        if !has_wait_edge(graph, &items, &stop.stop_name, vertexes) {
            return Err(PersistError::Inconsistent(format!(
                "stop {} has no wait edge between its vertices",
                stop.stop_name
            )));
        }

        if !essentials.add_stop(stop.stop_name.clone(), vertexes) {
            return Err(PersistError::Inconsistent(format!(
                "stop {} is listed more than once",
                stop.stop_name
            )));
        }
    }

    for item in items {
        essentials.push_route_item(item);
    }

    Ok(essentials)
}

/// True if a wait edge for `stop_name` leads from its terminal to its on-route vertex.
fn has_wait_edge(
    graph: &DirectedWeightedGraph,
    items: &[RouteItem],
    stop_name: &str,
    vertexes: Vertexes,
) -> bool {
    graph.incident_edges(vertexes.terminal).iter().any(|&id| {
        let ends_on_route = graph
            .edge(id)
            .is_some_and(|edge| edge.to == vertexes.on_route);
        let waits_here = items
            .get(id.0)
            .is_some_and(|item| item.is_wait() && item.name() == stop_name);
        ends_on_route && waits_here
    })
}

fn read_route_item(record: RouteItemRecord) -> Result<RouteItem, PersistError> {
    let kind = RouteItemKind::try_from(record.kind).map_err(|_| {
        PersistError::Inconsistent(format!("unknown route item kind {}", record.kind))
    })?;

    Ok(match kind {
        RouteItemKind::Wait => RouteItem::wait(record.name, record.time),
        RouteItemKind::Bus => {
            let span_count = usize::try_from(record.span_count).map_err(|_| {
                PersistError::Inconsistent(format!("span count {} too large", record.span_count))
            })?;
            RouteItem::ride(record.name, span_count, record.time)
        }
    })
}
