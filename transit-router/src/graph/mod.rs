//! Directed weighted graph with dense vertex and edge ids.
//!
//! Edges are stored in insertion order and identified by their position in
//! that order; each vertex keeps the ids of its outgoing edges. Ids are never
//! renumbered, so anything that refers to an edge id (shortest-path
//! predecessors, route items) stays valid for the life of the graph.

use std::fmt;

/// Dense vertex id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Dense edge id: the position of the edge in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed edge weighted in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Directed weighted graph over a fixed set of vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence_lists: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence_lists: vec![Vec::new(); vertex_count],
        }
    }

    /// Reassemble a graph from its edge list and incidence lists.
    ///
    /// The parts are taken as-is; callers that read them from an untrusted
    /// source are expected to have checked them already.
    pub fn from_parts(edges: Vec<Edge>, incidence_lists: Vec<Vec<EdgeId>>) -> Self {
        Self {
            edges,
            incidence_lists,
        }
    }

    /// Add an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `edge.from` is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.incidence_lists[edge.from.0].push(id);
        self.edges.push(edge);
        id
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.incidence_lists.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// All edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence_lists
            .get(vertex.0)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Incidence lists for every vertex, in vertex order.
    pub fn incidence_lists(&self) -> &[Vec<EdgeId>] {
        &self.incidence_lists
    }
}
