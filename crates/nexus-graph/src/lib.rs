//! Nexus Organizational Graph
//!
//! Immutable catalog of an organization's people, AI agents and the weighted
//! communication pathways between them. The catalog is fixed at load time:
//! nodes are never created or deleted during a session. Scenario effects such
//! as a "departed" executive are visual states layered on top by downstream
//! crates, never mutations of this data.
//!
//! # Validation
//!
//! [`Catalog::new`] rejects malformed input up front:
//! - an edge referencing a node id not in the catalog
//! - duplicate node ids
//! - edge weights outside `(0, 1]`
//!
//! Silently skipping a bad edge at render time would leave the drawn graph
//! inconsistent with its declared edge count, so the failure happens here.

mod catalog;
mod error;
mod meridian;
mod model;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{
    Division, Edge, EdgeKind, InteractionKind, Node, NodeId, NodeKind, TrustTier,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meridian_catalog_is_valid() {
        let catalog = Catalog::meridian();
        assert_eq!(catalog.node_count(), 23);
        assert_eq!(catalog.edge_count(), 27);
    }

    #[test]
    fn meridian_has_four_agents() {
        let catalog = Catalog::meridian();
        let agents = catalog
            .nodes()
            .iter()
            .filter(|n| n.kind == NodeKind::Agent)
            .count();
        assert_eq!(agents, 4);
    }
}
