//! Inbound reference index

use ontoviz_json_ld::NodeGraph;
use rustc_hash::FxHashMap;

/// A reference pointing at some target: `source --predicate--> target`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InboundRef<'g> {
    pub source: &'g str,
    pub predicate: &'g str,
}

/// Every reference in a graph, grouped by target id
///
/// Built once per tracer. Entries for a target are in graph order, then
/// predicate order, then value order, which is the order a full scan of the
/// graph would find them in.
#[derive(Debug, Default)]
pub struct ReferenceIndex<'g> {
    inbound: FxHashMap<&'g str, Vec<InboundRef<'g>>>,
}

impl<'g> ReferenceIndex<'g> {
    pub fn build(graph: &'g NodeGraph) -> Self {
        let mut inbound: FxHashMap<&'g str, Vec<InboundRef<'g>>> = FxHashMap::default();
        for node in graph.iter() {
            for (predicate, target) in node.references() {
                inbound.entry(target).or_default().push(InboundRef {
                    source: &node.id,
                    predicate,
                });
            }
        }
        Self { inbound }
    }

    /// References whose target is `id`
    pub fn inbound(&self, id: &str) -> &[InboundRef<'g>] {
        self.inbound.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct referenced ids
    pub fn len(&self) -> usize {
        self.inbound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbound.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inbound_in_graph_order() {
        let graph = NodeGraph::from_json(&json!([
            {"@id": "ex:a", "ex:likes": {"@id": "ex:c"}, "ex:knows": [{"@id": "ex:b"}, {"@id": "ex:c"}]},
            {"@id": "ex:b", "ex:knows": {"@id": "ex:c"}},
            {"@id": "ex:c", "ex:name": "C"}
        ]))
        .unwrap();
        let index = ReferenceIndex::build(&graph);

        assert_eq!(
            index.inbound("ex:c"),
            &[
                InboundRef { source: "ex:a", predicate: "ex:knows" },
                InboundRef { source: "ex:a", predicate: "ex:likes" },
                InboundRef { source: "ex:b", predicate: "ex:knows" },
            ]
        );
        assert!(index.inbound("ex:a").is_empty());
        assert_eq!(index.len(), 2);
    }
}
