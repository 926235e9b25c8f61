//! Core graph types: nodes, edges and their classification enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stable string identifier for a node, fixed for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Whether a node is a human or an AI agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Person,
    Agent,
}

/// Organizational division, used for layout clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Division {
    Hq,
    Na,
    Emea,
    Apac,
}

impl Division {
    /// All divisions in a fixed, documented order. Layout cluster
    /// assignment iterates this order.
    pub const ALL: [Division; 4] = [Division::Hq, Division::Na, Division::Emea, Division::Apac];

    /// Human-readable label for on-canvas division headers.
    pub fn label(&self) -> &'static str {
        match self {
            Division::Hq => "HEADQUARTERS",
            Division::Na => "NORTH AMERICA",
            Division::Emea => "EMEA",
            Division::Apac => "APAC",
        }
    }
}

/// How much autonomy an AI agent currently has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustTier {
    Autonomous,
    Supervised,
    ReviewRequired,
}

/// Relationship kind carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Communication,
    Reporting,
    Delegation,
    Dependency,
}

/// Interaction classification derived from the endpoint kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    #[serde(rename = "human-human")]
    HumanHuman,
    #[serde(rename = "human-ai")]
    HumanAi,
    #[serde(rename = "ai-ai")]
    AiAi,
}

impl InteractionKind {
    /// Classify an interaction from the two endpoint kinds.
    pub fn between(a: NodeKind, b: NodeKind) -> Self {
        match (a, b) {
            (NodeKind::Person, NodeKind::Person) => InteractionKind::HumanHuman,
            (NodeKind::Agent, NodeKind::Agent) => InteractionKind::AiAi,
            _ => InteractionKind::HumanAi,
        }
    }
}

/// A person or AI agent in the organizational graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    pub division: Division,
    /// Role title, shown as a sub-label.
    pub role: Option<String>,
    /// Workload metric in 0..=100, modulates rendered node radius.
    pub workload: Option<u8>,
    /// Trust tier; only meaningful for agents.
    pub trust: Option<TrustTier>,
}

impl Node {
    /// Create a person node.
    pub fn person(id: &str, label: &str, division: Division) -> Self {
        Self {
            id: NodeId::from(id),
            label: label.to_owned(),
            kind: NodeKind::Person,
            division,
            role: None,
            workload: None,
            trust: None,
        }
    }

    /// Create an AI-agent node.
    pub fn agent(id: &str, label: &str, division: Division) -> Self {
        Self {
            id: NodeId::from(id),
            label: label.to_owned(),
            kind: NodeKind::Agent,
            division,
            role: None,
            workload: None,
            trust: None,
        }
    }

    /// Set the role title.
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_owned());
        self
    }

    /// Set the workload metric (clamped to 100).
    pub fn with_workload(mut self, workload: u8) -> Self {
        self.workload = Some(workload.min(100));
        self
    }

    /// Set the trust tier.
    pub fn with_trust(mut self, trust: TrustTier) -> Self {
        self.trust = Some(trust);
        self
    }

    /// Short display name: last word of the label for people, the full
    /// label for agents.
    pub fn short_label(&self) -> &str {
        match self.kind {
            NodeKind::Agent => &self.label,
            NodeKind::Person => self.label.rsplit(' ').next().unwrap_or(&self.label),
        }
    }
}

/// A weighted, typed relationship between two nodes.
///
/// Edges are directed for semantic purposes (reporting, delegation) but
/// treated as undirected for connectivity and propagation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
    /// Interaction strength in (0, 1]; stronger edges propagate faster.
    pub weight: f32,
    /// Derived from the endpoint kinds at catalog construction.
    pub interaction: InteractionKind,
}

impl Edge {
    /// Create an edge. The interaction tag is filled in by
    /// [`Catalog::new`](crate::Catalog::new) once both endpoints are known.
    pub fn new(source: &str, target: &str, kind: EdgeKind, weight: f32) -> Self {
        Self {
            source: NodeId::from(source),
            target: NodeId::from(target),
            kind,
            weight,
            interaction: InteractionKind::HumanHuman,
        }
    }

    /// Whether this edge touches the given node on either end.
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_classification() {
        assert_eq!(
            InteractionKind::between(NodeKind::Person, NodeKind::Person),
            InteractionKind::HumanHuman
        );
        assert_eq!(
            InteractionKind::between(NodeKind::Person, NodeKind::Agent),
            InteractionKind::HumanAi
        );
        assert_eq!(
            InteractionKind::between(NodeKind::Agent, NodeKind::Person),
            InteractionKind::HumanAi
        );
        assert_eq!(
            InteractionKind::between(NodeKind::Agent, NodeKind::Agent),
            InteractionKind::AiAi
        );
    }

    #[test]
    fn short_label_splits_people_only() {
        let person = Node::person("p-sarah", "Sarah Chen", Division::Na);
        assert_eq!(person.short_label(), "Chen");

        let agent = Node::agent("a-nova", "Nova-Sales", Division::Na);
        assert_eq!(agent.short_label(), "Nova-Sales");
    }

    #[test]
    fn node_id_serializes_transparently() {
        let id = NodeId::from("p-alex");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-alex\"");
    }

    #[test]
    fn workload_clamps() {
        let node = Node::person("p-x", "X Y", Division::Hq).with_workload(250);
        assert_eq!(node.workload, Some(100));
    }
}
