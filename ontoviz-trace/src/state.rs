//! Accumulated traversal state

use crate::links::post_process;
use crate::model::{EntityGraph, GraphLink, GraphNode};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counters for one traversal depth
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DepthStats {
    /// Nodes materialized at this depth
    pub nodes: usize,
    /// Links added while expanding nodes at this depth
    pub links: usize,
    /// Candidate edges examined while expanding nodes at this depth
    pub candidates: usize,
}

/// What a traversal did, for callers that want to inspect it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TraceDiagnostics {
    pub depths: BTreeMap<usize, DepthStats>,
    /// Referenced ids with no entity in the graph, first-seen order
    pub missing: Vec<String>,
    #[serde(skip)]
    missing_set: FxHashSet<String>,
}

impl TraceDiagnostics {
    pub(crate) fn touch(&mut self, depth: usize) -> &mut DepthStats {
        self.depths.entry(depth).or_default()
    }

    /// Returns true the first time `id` is reported
    pub(crate) fn record_missing(&mut self, id: &str) -> bool {
        if !self.missing_set.insert(id.to_string()) {
            return false;
        }
        self.missing.push(id.to_string());
        true
    }

    pub fn total_nodes(&self) -> usize {
        self.depths.values().map(|d| d.nodes).sum()
    }

    pub fn total_links(&self) -> usize {
        self.depths.values().map(|d| d.links).sum()
    }

    pub fn total_candidates(&self) -> usize {
        self.depths.values().map(|d| d.candidates).sum()
    }
}

/// Nodes, links and the seen set shared by every root of one trace
///
/// A state belongs to a single trace; concurrent traces each need their own.
#[derive(Debug, Default)]
pub struct TraversalState {
    nodes: Vec<GraphNode>,
    node_index: FxHashMap<String, usize>,
    links: Vec<GraphLink>,
    link_set: FxHashSet<GraphLink>,
    seen: FxHashSet<String>,
    diagnostics: TraceDiagnostics,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub(crate) fn mark_seen(&mut self, id: &str) {
        self.seen.insert(id.to_string());
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Add a node unless one with the same id exists; returns true if added
    pub fn add_node(&mut self, node: GraphNode) -> bool {
        if self.node_index.contains_key(&node.id) {
            return false;
        }
        self.node_index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// Add a link unless an equivalent one exists; returns true if added
    pub fn add_link(&mut self, link: GraphLink) -> bool {
        if !self.link_set.insert(link.clone()) {
            return false;
        }
        self.links.push(link);
        true
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[GraphLink] {
        &self.links
    }

    pub fn diagnostics(&self) -> &TraceDiagnostics {
        &self.diagnostics
    }

    pub(crate) fn diagnostics_mut(&mut self) -> &mut TraceDiagnostics {
        &mut self.diagnostics
    }

    /// Final graph: nodes in materialization order, links deduplicated and
    /// restricted to materialized nodes
    pub fn into_entity_graph(self) -> EntityGraph {
        self.finish().0
    }

    /// Like [`into_entity_graph`](Self::into_entity_graph), also returning
    /// the diagnostics
    pub fn finish(self) -> (EntityGraph, TraceDiagnostics) {
        let links = post_process(self.links, &self.nodes);
        (
            EntityGraph {
                nodes: self.nodes,
                links,
            },
            self.diagnostics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> GraphNode {
        GraphNode {
            id: id.into(),
            name: id.into(),
            types: vec![],
            properties: vec![],
        }
    }

    #[test]
    fn test_add_once() {
        let mut state = TraversalState::new();
        assert!(state.add_node(node("a")));
        assert!(!state.add_node(node("a")));
        assert!(state.add_link(GraphLink::new("a", "b", "r")));
        assert!(!state.add_link(GraphLink::new("a", "b", "r")));
        assert_eq!(state.nodes().len(), 1);
        assert_eq!(state.links().len(), 1);
    }

    #[test]
    fn test_into_entity_graph_drops_dangling_links() {
        let mut state = TraversalState::new();
        state.add_node(node("a"));
        state.add_node(node("b"));
        state.add_link(GraphLink::new("a", "b", "r"));
        state.add_link(GraphLink::new("a", "missing", "r"));

        let graph = state.into_entity_graph();
        assert_eq!(graph.links, vec![GraphLink::new("a", "b", "r")]);
        assert_eq!(graph.nodes.len(), 2);
    }

    #[test]
    fn test_missing_reported_once() {
        let mut diag = TraceDiagnostics::default();
        assert!(diag.record_missing("x"));
        assert!(!diag.record_missing("x"));
        diag.touch(0).candidates += 2;
        diag.touch(1).links += 1;
        assert_eq!(diag.total_candidates(), 2);
        assert_eq!(diag.total_links(), 1);
        assert_eq!(diag.missing, vec!["x"]);
    }

    #[test]
    fn test_many_missing_ids_keep_first_seen_order() {
        let mut diag = TraceDiagnostics::default();
        for round in 0..3 {
            for i in (0..5_000).rev() {
                assert_eq!(diag.record_missing(&format!("ex:m{}", i)), round == 0);
            }
        }
        assert_eq!(diag.missing.len(), 5_000);
        assert_eq!(diag.missing.first().map(String::as_str), Some("ex:m4999"));
        assert_eq!(diag.missing.last().map(String::as_str), Some("ex:m0"));
    }
}
