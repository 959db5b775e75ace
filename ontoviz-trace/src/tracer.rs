//! Depth-first entity graph traversal
//!
//! From each visited entity the tracer examines its outbound references and
//! then every inbound reference to it. A candidate edge that is not already a
//! link becomes one, and its far endpoint is visited one level deeper.
//! Traversal runs on an explicit stack of frames, each holding the candidate
//! list of one entity and a cursor into it, so the visiting order matches a
//! recursive walk without using the call stack.

use crate::attributes::graph_node;
use crate::error::{Result, TraceError};
use crate::index::ReferenceIndex;
use crate::model::{EntityGraph, GraphLink};
use crate::options::TraceOptions;
use crate::state::{TraceDiagnostics, TraversalState};
use ontoviz_json_ld::{JsonLdNode, LabelResolver, NodeGraph};
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, debug_span, trace, warn};

/// One candidate edge, and the endpoint to visit if it becomes a link
#[derive(Clone, Copy, Debug)]
struct Candidate<'g> {
    source: &'g str,
    target: &'g str,
    predicate: &'g str,
    far: &'g str,
}

struct Frame<'g> {
    depth: usize,
    candidates: Vec<Candidate<'g>>,
    next: usize,
}

/// Traces entity graphs out of one [`NodeGraph`]
pub struct EntityGraphTracer<'g> {
    graph: &'g NodeGraph,
    labels: LabelResolver<'g>,
    index: ReferenceIndex<'g>,
    options: TraceOptions,
    link_labels: FxHashMap<String, String>,
}

impl<'g> EntityGraphTracer<'g> {
    pub fn new(graph: &'g NodeGraph, options: TraceOptions) -> Self {
        Self {
            graph,
            labels: LabelResolver::new(graph),
            index: ReferenceIndex::build(graph),
            options,
            link_labels: FxHashMap::default(),
        }
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    /// Trace from `start`, or over the whole graph when `start` is `None`
    ///
    /// An unknown start id yields an empty graph and a blank one is
    /// `InvalidStartId`. In whole-graph mode every entity is a root in input
    /// order, all roots share one state, and entities never reached are added
    /// afterwards without links. In both modes a failure while traversing
    /// from a root comes back as `Traversal` naming that root.
    pub fn trace(&mut self, start: Option<&str>) -> Result<EntityGraph> {
        self.trace_with_diagnostics(start).map(|(graph, _)| graph)
    }

    /// [`trace`](Self::trace), also returning what the traversal did
    pub fn trace_with_diagnostics(
        &mut self,
        start: Option<&str>,
    ) -> Result<(EntityGraph, TraceDiagnostics)> {
        self.options
            .validate()
            .map_err(|message| TraceError::InvalidOptions { message })?;

        let span = debug_span!("trace_entity_graph", start = ?start, nodes = self.graph.len());
        let _guard = span.enter();

        let mut state = TraversalState::new();
        match start {
            Some(id) => {
                if id.trim().is_empty() {
                    return Err(TraceError::InvalidStartId { id: id.to_string() });
                }
                if !self.graph.contains(id) {
                    warn!(start = id, "start node not found");
                    return Ok((EntityGraph::default(), state.diagnostics().clone()));
                }
                self.trace_root(&mut state, id)?;
            }
            None => {
                let graph = self.graph;
                for root in graph.ids() {
                    self.trace_root(&mut state, root)?;
                }
                for node in graph.iter() {
                    if !state.has_node(&node.id) {
                        self.materialize(&mut state, node, None);
                    }
                }
            }
        }

        let (graph, diagnostics) = state.finish();
        debug!(
            nodes = graph.nodes.len(),
            links = graph.links.len(),
            missing = diagnostics.missing.len(),
            "traced entity graph"
        );
        Ok((graph, diagnostics))
    }

    fn trace_root(&mut self, state: &mut TraversalState, root: &str) -> Result<()> {
        self.trace_into(state, root)
            .map_err(|e| TraceError::Traversal {
                root: root.to_string(),
                source: Box::new(e),
            })
    }

    /// Traverse from `root` at depth 0 into an existing state
    pub fn trace_into(&mut self, state: &mut TraversalState, root: &str) -> Result<()> {
        if root.trim().is_empty() {
            return Err(TraceError::InvalidStartId {
                id: root.to_string(),
            });
        }

        let mut stack: Vec<Frame<'g>> = Vec::new();
        if let Some(frame) = self.enter(state, root, 0) {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(&candidate) = frame.candidates.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let depth = frame.depth;

            state.diagnostics_mut().touch(depth).candidates += 1;
            let label = self.link_label(candidate.predicate);
            let link = GraphLink::new(candidate.source, candidate.target, label);
            if !state.add_link(link) {
                continue;
            }
            state.diagnostics_mut().touch(depth).links += 1;

            if let Some(next) = self.enter(state, candidate.far, depth + 1) {
                stack.push(next);
            }
        }
        Ok(())
    }

    /// Visit `id` at `depth`, returning the frame to expand if it should be
    fn enter(&self, state: &mut TraversalState, id: &str, depth: usize) -> Option<Frame<'g>> {
        state.diagnostics_mut().touch(depth);
        if !self.options.max_depth.allows(depth) || state.is_seen(id) {
            return None;
        }
        let graph = self.graph;
        let Some(node) = graph.get(id) else {
            if state.diagnostics_mut().record_missing(id) {
                warn!(id, "no entity found for referenced id");
            }
            return None;
        };

        state.mark_seen(id);
        if !state.has_node(id) {
            self.materialize(state, node, Some(depth));
        }
        trace!(id, depth, "visiting");

        let id: &'g str = &node.id;
        let outbound = node.references().map(|(predicate, target)| Candidate {
            source: id,
            target,
            predicate,
            far: target,
        });
        let inbound = self.index.inbound(id).iter().map(|r| Candidate {
            source: r.source,
            target: id,
            predicate: r.predicate,
            far: r.source,
        });
        Some(Frame {
            depth,
            candidates: outbound.chain(inbound).collect(),
            next: 0,
        })
    }

    fn materialize(&self, state: &mut TraversalState, node: &JsonLdNode, depth: Option<usize>) {
        let language = self.options.language.as_deref();
        match graph_node(&self.labels, node, self.options.naming, language) {
            Ok(graph_node) => {
                state.add_node(graph_node);
                if let Some(depth) = depth {
                    state.diagnostics_mut().touch(depth).nodes += 1;
                }
            }
            Err(e) => warn!(id = %node.id, error = %e, "skipped node"),
        }
    }

    /// Label for links along `predicate`, cached per predicate
    fn link_label(&mut self, predicate: &str) -> String {
        if let Some(label) = self.link_labels.get(predicate) {
            return label.clone();
        }
        let label = self
            .options
            .naming
            .label(&self.labels, predicate, self.options.language.as_deref())
            .unwrap_or_else(|_| predicate.to_string());
        self.link_labels
            .insert(predicate.to_string(), label.clone());
        label
    }
}

/// Parse `input` and trace it in one call
pub fn generate_entity_graph(
    input: &Value,
    start: Option<&str>,
    options: &TraceOptions,
) -> Result<EntityGraph> {
    let graph = NodeGraph::from_json(input)?;
    EntityGraphTracer::new(&graph, options.clone()).trace(start)
}
