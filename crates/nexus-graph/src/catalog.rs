//! Validated, immutable node/edge catalog.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Division, Edge, InteractionKind, Node, NodeId};

/// The organizational graph, validated at construction and read-only
/// afterwards. Safely shared by every downstream component.
#[derive(Debug, Clone)]
pub struct Catalog {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<NodeId, usize>,
}

impl Catalog {
    /// Build a catalog, validating node uniqueness, edge endpoints and
    /// edge weights. Edge interaction tags are derived here from the
    /// endpoint kinds, overriding whatever the input carried.
    pub fn new(nodes: Vec<Node>, mut edges: Vec<Edge>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(Error::DuplicateNode(node.id.clone()));
            }
        }

        for (i, edge) in edges.iter_mut().enumerate() {
            if !(edge.weight > 0.0 && edge.weight <= 1.0) {
                return Err(Error::InvalidWeight {
                    index: i,
                    weight: edge.weight,
                });
            }
            let source = *index.get(&edge.source).ok_or_else(|| Error::UnknownEndpoint {
                index: i,
                id: edge.source.clone(),
            })?;
            let target = *index.get(&edge.target).ok_or_else(|| Error::UnknownEndpoint {
                index: i,
                id: edge.target.clone(),
            })?;
            edge.interaction = InteractionKind::between(nodes[source].kind, nodes[target].kind);
        }

        Ok(Self {
            nodes,
            edges,
            index,
        })
    }

    /// All nodes in catalog order. This order is the tie-break for hit
    /// testing and feedback edge lookup.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in catalog order. Adjacency iteration order derives
    /// from this.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes belonging to a division, in catalog order.
    pub fn nodes_in(&self, division: Division) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.division == division)
    }

    /// First edge incident to the node, in catalog order. Used to anchor
    /// feedback flashes.
    pub fn first_edge_incident(&self, id: &NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.touches(id))
    }
}
