//! Information-spread planner.
//!
//! Plans how an announcement propagates through the organization: a
//! breadth-first traversal from a source node where each hop adds a delay
//! inversely proportional to the edge weight. Strong ties relay almost
//! immediately, weak ties lag. The planner is pure: it produces a
//! schedule of `(node, delay)` pairs and never touches a clock.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use nexus_graph::{Catalog, NodeId};

/// Numerator of the per-hop delay: `delay = round(200 / weight)` ms.
/// A weight-1.0 edge relays in 200ms, a weight-0.2 edge in a full second.
pub const HOP_DELAY_SCALE: f64 = 200.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpreadError {
    #[error("spread source `{0}` is not in the catalog")]
    UnknownSource(NodeId),
}

pub type Result<T> = std::result::Result<T, SpreadError>;

/// Undirected adjacency built from the catalog's edge list.
///
/// Neighbor lists preserve edge-list order: for each edge in catalog
/// order, `source -> target` is appended before `target -> source`. This
/// makes the breadth-first visit order, and therefore every downstream
/// animation schedule, fully deterministic.
#[derive(Debug, Clone)]
pub struct Adjacency {
    neighbors: HashMap<NodeId, Vec<(NodeId, f32)>>,
}

impl Adjacency {
    /// Build adjacency lists for every node in the catalog, including
    /// isolated nodes (empty list).
    pub fn build(catalog: &Catalog) -> Self {
        let mut neighbors: HashMap<NodeId, Vec<(NodeId, f32)>> =
            HashMap::with_capacity(catalog.node_count());
        for node in catalog.nodes() {
            neighbors.insert(node.id.clone(), Vec::new());
        }
        for edge in catalog.edges() {
            if let Some(list) = neighbors.get_mut(&edge.source) {
                list.push((edge.target.clone(), edge.weight));
            }
            if let Some(list) = neighbors.get_mut(&edge.target) {
                list.push((edge.source.clone(), edge.weight));
            }
        }
        Self { neighbors }
    }

    /// Neighbors of a node in deterministic order.
    pub fn neighbors(&self, id: &NodeId) -> &[(NodeId, f32)] {
        self.neighbors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// One node's place in the spread schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reached {
    pub node: NodeId,
    /// Milliseconds after the spread starts at which this node learns.
    pub delay_ms: u64,
}

/// The full propagation schedule for one spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadPlan {
    /// Reached nodes in breadth-first discovery order. The source is
    /// always first, at delay 0.
    pub reached: Vec<Reached>,
    /// Nodes never reached (excluded, or only reachable through excluded
    /// nodes), in catalog order.
    pub unreached: Vec<NodeId>,
}

impl SpreadPlan {
    /// Delay at which a node learns, if it is reached at all.
    pub fn delay_of(&self, id: &NodeId) -> Option<u64> {
        self.reached
            .iter()
            .find(|r| &r.node == id)
            .map(|r| r.delay_ms)
    }

    /// Largest delay in the schedule; 0 for a source-only plan.
    pub fn horizon_ms(&self) -> u64 {
        self.reached.iter().map(|r| r.delay_ms).max().unwrap_or(0)
    }
}

/// Plan a spread from `source`, never traversing into `excluded` nodes.
///
/// Each node is assigned a delay on first discovery:
/// `delay(child) = delay(parent) + round(HOP_DELAY_SCALE / weight)`.
/// Excluded nodes are neither informed nor used as relays, so anything
/// behind them stays unreached. The source itself is always informed,
/// even if listed in `excluded`.
pub fn compute_spread(
    catalog: &Catalog,
    source: &NodeId,
    excluded: &HashSet<NodeId>,
) -> Result<SpreadPlan> {
    if !catalog.contains(source) {
        return Err(SpreadError::UnknownSource(source.clone()));
    }

    let adjacency = Adjacency::build(catalog);
    let mut delay: HashMap<NodeId, u64> = HashMap::new();
    let mut reached = Vec::with_capacity(catalog.node_count());
    let mut queue = VecDeque::new();

    delay.insert(source.clone(), 0);
    reached.push(Reached {
        node: source.clone(),
        delay_ms: 0,
    });
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        let at = delay[&current];
        for (neighbor, weight) in adjacency.neighbors(&current) {
            if delay.contains_key(neighbor) || excluded.contains(neighbor) {
                continue;
            }
            let hop = (HOP_DELAY_SCALE / f64::from(*weight)).round() as u64;
            let informed_at = at + hop;
            delay.insert(neighbor.clone(), informed_at);
            reached.push(Reached {
                node: neighbor.clone(),
                delay_ms: informed_at,
            });
            queue.push_back(neighbor.clone());
        }
    }

    let unreached = catalog
        .nodes()
        .iter()
        .filter(|n| !delay.contains_key(&n.id))
        .map(|n| n.id.clone())
        .collect();

    Ok(SpreadPlan { reached, unreached })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_graph::{Division, Edge, EdgeKind, Node};

    fn chain() -> Catalog {
        // a -0.8- b -0.9- c -0.3- d
        let nodes = vec![
            Node::person("a", "A One", Division::Hq),
            Node::person("b", "B Two", Division::Na),
            Node::person("c", "C Three", Division::Na),
            Node::person("d", "D Four", Division::Emea),
        ];
        let edges = vec![
            Edge::new("a", "b", EdgeKind::Reporting, 0.8),
            Edge::new("b", "c", EdgeKind::Reporting, 0.9),
            Edge::new("c", "d", EdgeKind::Communication, 0.3),
        ];
        Catalog::new(nodes, edges).unwrap()
    }

    #[test]
    fn delays_accumulate_along_the_chain() {
        let catalog = chain();
        let plan = compute_spread(&catalog, &NodeId::from("a"), &HashSet::new()).unwrap();

        assert_eq!(plan.delay_of(&NodeId::from("a")), Some(0));
        assert_eq!(plan.delay_of(&NodeId::from("b")), Some(250));
        assert_eq!(plan.delay_of(&NodeId::from("c")), Some(472));
        assert_eq!(plan.delay_of(&NodeId::from("d")), Some(1139));
        assert!(plan.unreached.is_empty());
        assert_eq!(plan.horizon_ms(), 1139);
    }

    #[test]
    fn excluded_nodes_block_everything_behind_them() {
        let catalog = chain();
        let excluded: HashSet<_> = [NodeId::from("c")].into();
        let plan = compute_spread(&catalog, &NodeId::from("a"), &excluded).unwrap();

        assert_eq!(plan.delay_of(&NodeId::from("b")), Some(250));
        assert_eq!(plan.delay_of(&NodeId::from("c")), None);
        assert_eq!(plan.delay_of(&NodeId::from("d")), None);
        assert_eq!(
            plan.unreached,
            vec![NodeId::from("c"), NodeId::from("d")]
        );
    }

    #[test]
    fn source_is_informed_even_when_excluded() {
        let catalog = chain();
        let excluded: HashSet<_> = [NodeId::from("a")].into();
        let plan = compute_spread(&catalog, &NodeId::from("a"), &excluded).unwrap();
        assert_eq!(plan.reached[0].node, NodeId::from("a"));
        assert_eq!(plan.reached[0].delay_ms, 0);
    }

    #[test]
    fn isolated_node_is_unreached() {
        let nodes = vec![
            Node::person("a", "A One", Division::Hq),
            Node::person("b", "B Two", Division::Hq),
            Node::person("c", "C Three", Division::Hq),
            Node::person("d", "D Four", Division::Hq),
        ];
        let edges = vec![
            Edge::new("a", "b", EdgeKind::Communication, 1.0),
            Edge::new("b", "c", EdgeKind::Communication, 0.5),
        ];
        let catalog = Catalog::new(nodes, edges).unwrap();
        let plan = compute_spread(&catalog, &NodeId::from("a"), &HashSet::new()).unwrap();

        assert_eq!(plan.delay_of(&NodeId::from("b")), Some(200));
        assert_eq!(plan.delay_of(&NodeId::from("c")), Some(600));
        assert_eq!(plan.unreached, vec![NodeId::from("d")]);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let catalog = chain();
        let err = compute_spread(&catalog, &NodeId::from("ghost"), &HashSet::new()).unwrap_err();
        assert_eq!(err, SpreadError::UnknownSource(NodeId::from("ghost")));
    }

    #[test]
    fn discovery_order_follows_edge_list_order() {
        // Star: hub connects to x, y, z in that edge order. All three are
        // one hop out, so discovery order is decided by the edge list.
        let nodes = vec![
            Node::person("hub", "Hub Node", Division::Hq),
            Node::person("x", "X One", Division::Na),
            Node::person("y", "Y Two", Division::Na),
            Node::person("z", "Z Three", Division::Na),
        ];
        let edges = vec![
            Edge::new("hub", "x", EdgeKind::Communication, 0.5),
            Edge::new("hub", "y", EdgeKind::Communication, 0.9),
            Edge::new("hub", "z", EdgeKind::Communication, 0.7),
        ];
        let catalog = Catalog::new(nodes, edges).unwrap();
        let plan = compute_spread(&catalog, &NodeId::from("hub"), &HashSet::new()).unwrap();
        let order: Vec<_> = plan.reached.iter().map(|r| r.node.as_str()).collect();
        assert_eq!(order, vec!["hub", "x", "y", "z"]);
    }

    #[test]
    fn meridian_full_spread_reaches_everyone() {
        let catalog = Catalog::meridian();
        let plan = compute_spread(&catalog, &NodeId::from("p-alex"), &HashSet::new()).unwrap();
        assert_eq!(plan.reached.len(), catalog.node_count());
        assert!(plan.unreached.is_empty());
    }

    #[test]
    fn meridian_scripted_exclusions_leave_gaps() {
        let catalog = Catalog::meridian();
        let excluded: HashSet<_> = [
            NodeId::from("p-sophie"),
            NodeId::from("p-omar"),
            NodeId::from("p-wei"),
        ]
        .into();
        let plan = compute_spread(&catalog, &NodeId::from("p-alex"), &excluded).unwrap();
        for id in &excluded {
            assert!(plan.unreached.contains(id), "{id} should be unreached");
        }
        // Everyone else has an alternate route in Meridian.
        assert_eq!(plan.unreached.len(), 3);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn delays_never_decrease_along_discovery(seed_weight in 0.1f32..=1.0) {
                let nodes = vec![
                    Node::person("a", "A One", Division::Hq),
                    Node::person("b", "B Two", Division::Hq),
                    Node::person("c", "C Three", Division::Hq),
                ];
                let edges = vec![
                    Edge::new("a", "b", EdgeKind::Communication, seed_weight),
                    Edge::new("b", "c", EdgeKind::Communication, seed_weight),
                ];
                let catalog = Catalog::new(nodes, edges).unwrap();
                let plan =
                    compute_spread(&catalog, &NodeId::from("a"), &HashSet::new()).unwrap();
                for pair in plan.reached.windows(2) {
                    prop_assert!(pair[0].delay_ms <= pair[1].delay_ms);
                }
            }
        }
    }
}
