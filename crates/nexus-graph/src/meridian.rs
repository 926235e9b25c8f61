//! Built-in demo organization: Meridian Technologies.
//!
//! 23 nodes across four divisions (19 people, 4 AI agents) and 27 weighted
//! pathways. This is the dataset every scripted scenario is written against.

use crate::catalog::Catalog;
use crate::model::{Division, Edge, EdgeKind, Node, TrustTier};

impl Catalog {
    /// The fixed Meridian Technologies demo organization.
    pub fn meridian() -> Catalog {
        use Division::*;
        use EdgeKind::*;

        let nodes = vec![
            // HQ
            Node::person("p-alex", "Alex Reeves", Hq)
                .with_role("CEO")
                .with_workload(72),
            Node::person("p-catherine", "Catherine Moore", Hq)
                .with_role("CSO")
                .with_workload(88),
            Node::person("p-robert", "Robert Daniels", Hq)
                .with_role("CFO")
                .with_workload(55),
            Node::person("p-nina", "Nina Volkov", Hq)
                .with_role("General Counsel")
                .with_workload(42),
            Node::agent("a-iris", "Iris-Research", Hq)
                .with_role("Research Agent")
                .with_trust(TrustTier::Autonomous),
            Node::agent("a-sentinel", "Sentinel-Compliance", Hq)
                .with_role("Compliance Agent")
                .with_trust(TrustTier::Supervised),
            // NA
            Node::person("p-marcus", "Marcus Rivera", Na)
                .with_role("VP Engineering")
                .with_workload(75),
            Node::person("p-priya", "Priya Sharma", Na)
                .with_role("Sr. Backend Eng")
                .with_workload(60),
            Node::person("p-james", "James Liu", Na)
                .with_role("Staff Engineer")
                .with_workload(50),
            Node::person("p-anika", "Anika Patel", Na)
                .with_role("Eng Manager")
                .with_workload(65),
            Node::person("p-david", "David Kim", Na)
                .with_role("Head of Product")
                .with_workload(70),
            Node::person("p-sarah", "Sarah Chen", Na)
                .with_role("VP Sales")
                .with_workload(78),
            Node::person("p-tom", "Tom Bradley", Na)
                .with_role("Account Exec")
                .with_workload(45),
            Node::person("p-maria", "Maria Santos", Na)
                .with_role("VP Customer Success")
                .with_workload(62),
            Node::agent("a-atlas", "Atlas-Code", Na)
                .with_role("Coding Agent")
                .with_trust(TrustTier::Supervised),
            Node::agent("a-nova", "Nova-Sales", Na)
                .with_role("Sales Agent")
                .with_trust(TrustTier::ReviewRequired),
            // EMEA
            Node::person("p-henrik", "Henrik Johansson", Emea)
                .with_role("EMEA Eng Lead")
                .with_workload(55),
            Node::person("p-elena", "Elena Kowalski", Emea)
                .with_role("Sr. Engineer")
                .with_workload(48),
            Node::person("p-omar", "Omar Hassan", Emea)
                .with_role("Backend Dev")
                .with_workload(40),
            Node::person("p-sophie", "Sophie Dubois", Emea)
                .with_role("EMEA Ops Mgr")
                .with_workload(52),
            Node::person("p-lars", "Lars Mueller", Emea)
                .with_role("EMEA Sales Dir")
                .with_workload(60),
            // APAC
            Node::person("p-yuki", "Yuki Tanaka", Apac)
                .with_role("APAC Eng Lead")
                .with_workload(58),
            Node::person("p-wei", "Wei Zhang", Apac)
                .with_role("Growth Lead")
                .with_workload(50),
        ];

        let edges = vec![
            // HQ internal
            Edge::new("p-alex", "p-catherine", Reporting, 0.9),
            Edge::new("p-alex", "p-robert", Reporting, 0.8),
            Edge::new("p-alex", "p-nina", Reporting, 0.6),
            Edge::new("p-catherine", "a-iris", Delegation, 0.7),
            Edge::new("p-nina", "a-sentinel", Delegation, 0.8),
            // NA internal
            Edge::new("p-alex", "p-marcus", Reporting, 0.8),
            Edge::new("p-marcus", "p-priya", Reporting, 0.9),
            Edge::new("p-marcus", "p-james", Reporting, 0.7),
            Edge::new("p-marcus", "p-anika", Reporting, 0.85),
            Edge::new("p-marcus", "a-atlas", Delegation, 0.9),
            Edge::new("p-alex", "p-david", Reporting, 0.7),
            Edge::new("p-alex", "p-sarah", Reporting, 0.85),
            Edge::new("p-sarah", "p-tom", Reporting, 0.8),
            Edge::new("p-sarah", "a-nova", Delegation, 0.7),
            Edge::new("p-alex", "p-maria", Reporting, 0.6),
            // Cross-division
            Edge::new("p-marcus", "p-henrik", Communication, 0.5),
            Edge::new("p-priya", "p-elena", Communication, 0.3),
            Edge::new("p-david", "p-yuki", Communication, 0.4),
            Edge::new("p-sarah", "p-lars", Communication, 0.6),
            Edge::new("p-catherine", "p-wei", Communication, 0.3),
            // EMEA internal
            Edge::new("p-henrik", "p-elena", Reporting, 0.8),
            Edge::new("p-henrik", "p-omar", Reporting, 0.7),
            Edge::new("p-sophie", "p-lars", Communication, 0.5),
            // APAC
            Edge::new("p-yuki", "p-wei", Communication, 0.6),
            // AI-AI
            Edge::new("a-atlas", "a-iris", Dependency, 0.4),
            Edge::new("a-nova", "a-sentinel", Dependency, 0.3),
            // Customer-success loop
            Edge::new("p-maria", "p-tom", Communication, 0.5),
        ];

        Catalog::new(nodes, edges).expect("meridian catalog is statically valid")
    }
}
