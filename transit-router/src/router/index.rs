//! All-sources shortest-path index.
//!
//! The index runs Dijkstra once from every vertex when it is built and keeps
//! every row, so a query is a table lookup plus a walk back along predecessor
//! edges. Memory is O(V²); the rows are exactly what gets persisted.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::info;

use crate::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// Best known path to one destination from one source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEntry {
    /// Total weight of the path (minutes).
    pub weight: f64,
    /// Last edge on the path; `None` only for the source itself.
    pub prev_edge: Option<EdgeId>,
}

/// One table row: an entry per destination vertex, `None` where unreached.
pub type PathRow = Vec<Option<PathEntry>>;

/// A resolved path: its total weight and its edges in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Precomputed shortest paths between every pair of vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShortestPathIndex {
    rows: Vec<PathRow>,
}

impl ShortestPathIndex {
    /// Compute the table for every vertex of `graph` as a source.
    ///
    /// All edge weights must be non-negative.
    pub fn build(graph: &DirectedWeightedGraph) -> Self {
        let rows: Vec<PathRow> = (0..graph.vertex_count())
            .map(|source| shortest_paths_from(graph, VertexId(source)))
            .collect();

        let reached: usize = rows
            .iter()
            .map(|row| row.iter().filter(|entry| entry.is_some()).count())
            .sum();
        info!(
            sources = rows.len(),
            reached_pairs = reached,
            "built shortest-path index"
        );

        Self { rows }
    }

    /// Reassemble an index from previously computed rows.
    pub fn from_rows(rows: Vec<PathRow>) -> Self {
        Self { rows }
    }

    /// All rows, indexed by source vertex.
    pub fn rows(&self) -> &[PathRow] {
        &self.rows
    }

    /// The table entry for a source and destination, if the destination is reached.
    pub fn entry(&self, from: VertexId, to: VertexId) -> Option<&PathEntry> {
        self.rows.get(from.0)?.get(to.0)?.as_ref()
    }

    /// Resolve the shortest path from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreached from `from`. A vertex reaches
    /// itself with zero weight and no edges. `graph` must be the graph the
    /// table was computed on.
    pub fn query(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<RouteInfo> {
        let target = self.entry(from, to)?;

        let mut edges = Vec::new();
        let mut prev_edge = target.prev_edge;
        while let Some(edge_id) = prev_edge {
            // A simple path never repeats an edge.
            if edges.len() >= graph.edge_count() {
                return None;
            }
            edges.push(edge_id);
            let edge = graph.edge(edge_id)?;
            prev_edge = self.entry(from, edge.from)?.prev_edge;
        }
        edges.reverse();

        Some(RouteInfo {
            weight: target.weight,
            edges,
        })
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the lightest first.
#[derive(Debug, Clone, Copy)]
struct State {
    weight: f64,
    vertex: VertexId,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source Dijkstra producing one table row.
fn shortest_paths_from(graph: &DirectedWeightedGraph, source: VertexId) -> PathRow {
    let mut row: PathRow = vec![None; graph.vertex_count()];
    row[source.0] = Some(PathEntry {
        weight: 0.0,
        prev_edge: None,
    });

    let mut heap = BinaryHeap::new();
    heap.push(State {
        weight: 0.0,
        vertex: source,
    });

    while let Some(State { weight, vertex }) = heap.pop() {
        if let Some(best) = row[vertex.0]
            && weight > best.weight
        {
            continue;
        }

        for &edge_id in graph.incident_edges(vertex) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };

            let candidate = weight + edge.weight;
            let improves = match row[edge.to.0] {
                Some(existing) => candidate < existing.weight,
                None => true,
            };

            if improves {
                row[edge.to.0] = Some(PathEntry {
                    weight: candidate,
                    prev_edge: Some(edge_id),
                });
                heap.push(State {
                    weight: candidate,
                    vertex: edge.to,
                });
            }
        }
    }

    row
}
