//! Weighted graph store
//!
//! Nodes and edges live in insertion-order vectors; every tie-break in the
//! algorithm engines ("first found wins") is defined in terms of that order.
//! Undirected edges are stored once and treated as bidirectional during
//! neighbor scans.

use crate::step::{EdgeId, NodeId};

/// A graph vertex
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
}

/// A graph edge.  `directed` is stamped from the owning graph at creation.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
    pub directed: bool,
}

impl Edge {
    /// Whether this edge leaves `node`, honoring undirected bidirectionality
    pub fn leaves(&self, node: NodeId) -> bool {
        self.from == node || (!self.directed && self.to == node)
    }

    /// The endpoint opposite `node`; `None` if the edge does not touch it
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}

/// The graph store
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
    directed: bool,
    next_node: NodeId,
    next_edge: EdgeId,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            directed,
            next_node: 0,
            next_edge: 0,
        }
    }

    /// Add a node with the given label, returning its id
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = self.next_node;
        self.next_node += 1;
        self.nodes.push(GraphNode {
            id,
            label: label.into(),
        });
        id
    }

    /// Add an edge between two existing nodes
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> Result<EdgeId, String> {
        if self.node(from).is_none() {
            return Err(format!("no node with id {}", from));
        }
        if self.node(to).is_none() {
            return Err(format!("no node with id {}", to));
        }
        let id = self.next_edge;
        self.next_edge += 1;
        self.edges.push(Edge {
            id,
            from,
            to,
            weight,
            directed: self.directed,
        });
        Ok(id)
    }

    /// Remove a node and every edge touching it
    pub fn remove_node(&mut self, id: NodeId) -> Option<GraphNode> {
        let pos = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(pos);
        self.edges.retain(|e| e.from != id && e.to != id);
        Some(node)
    }

    /// Drop all nodes and edges, keeping the id counters
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look a node up by its label (exact match, first in insertion order)
    pub fn node_by_label(&self, label: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Display label for a node id (engines use this in narration text)
    pub fn label(&self, id: NodeId) -> String {
        self.node(id)
            .map(|n| n.label.clone())
            .unwrap_or_else(|| format!("#{}", id))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(false)
    }
}
