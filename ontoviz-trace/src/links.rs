//! Link post-processing
//!
//! Both filters are idempotent and keep the relative order of the links
//! they retain. [`post_process`] applies them in the required order:
//! deduplicate first, then drop dangling links.

use crate::model::{GraphLink, GraphNode};
use rustc_hash::FxHashSet;

/// Same source, target and label
pub fn links_equivalent(a: &GraphLink, b: &GraphLink) -> bool {
    a.source == b.source && a.target == b.target && a.label == b.label
}

/// Remove equivalent links, keeping the first occurrence
pub fn eliminate_redundant_links(links: Vec<GraphLink>) -> Vec<GraphLink> {
    let mut seen: FxHashSet<GraphLink> = FxHashSet::default();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

/// Keep links whose source and target are both in `node_ids`
pub fn restrict_links_to_nodes(links: Vec<GraphLink>, node_ids: &FxHashSet<&str>) -> Vec<GraphLink> {
    links
        .into_iter()
        .filter(|link| {
            node_ids.contains(link.source.as_str()) && node_ids.contains(link.target.as_str())
        })
        .collect()
}

/// Deduplicate, then restrict to `nodes`
pub fn post_process(links: Vec<GraphLink>, nodes: &[GraphNode]) -> Vec<GraphLink> {
    let node_ids: FxHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    restrict_links_to_nodes(eliminate_redundant_links(links), &node_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link(s: &str, t: &str, l: &str) -> GraphLink {
        GraphLink::new(s, t, l)
    }

    #[test]
    fn test_equivalence() {
        assert!(links_equivalent(&link("A", "B", "r"), &link("A", "B", "r")));
        assert!(!links_equivalent(&link("A", "B", "r"), &link("B", "A", "r")));
        assert!(!links_equivalent(&link("A", "B", "r"), &link("A", "B", "s")));
    }

    #[test]
    fn test_eliminate_redundant_links() {
        let links = vec![link("A", "B", "r"), link("A", "B", "r"), link("B", "C", "l")];
        let once = eliminate_redundant_links(links);
        assert_eq!(once, vec![link("A", "B", "r"), link("B", "C", "l")]);
        assert_eq!(eliminate_redundant_links(once.clone()), once);
    }

    #[test]
    fn test_restrict_links_to_nodes() {
        let links = vec![
            link("ex:Pizza", "ex:Food", "subClassOf"),
            link("ex:Pizza", "ex:Topping", "hasTopping"),
            link("ex:Food", "ex:Pizza", "related"),
        ];
        let ids: FxHashSet<&str> = ["ex:Pizza", "ex:Food"].into_iter().collect();

        let kept = restrict_links_to_nodes(links, &ids);
        assert_eq!(
            kept,
            vec![link("ex:Pizza", "ex:Food", "subClassOf"), link("ex:Food", "ex:Pizza", "related")]
        );
        assert_eq!(restrict_links_to_nodes(kept.clone(), &ids), kept);
    }

    #[test]
    fn test_post_process_dedupes_before_filtering() {
        let nodes = vec![GraphNode {
            id: "A".into(),
            name: "A".into(),
            types: vec![],
            properties: vec![],
        }];
        let links = vec![link("A", "A", "self"), link("A", "B", "r"), link("A", "A", "self")];
        assert_eq!(post_process(links, &nodes), vec![link("A", "A", "self")]);
    }
}
