//! Entity graph tracing for ontoviz
//!
//! Turns a JSON-LD node array into renderer-ready `{nodes, links}`:
//! - [`EntityGraphTracer`]: depth-first traversal over outbound and inbound
//!   references, from one start entity or over the whole graph
//! - [`links`]: link deduplication and dangling-link filtering
//! - [`derive_attributes`]: per-entity display attributes
//!
//! # Example
//!
//! ```
//! use ontoviz_trace::{generate_entity_graph, TraceOptions};
//! use serde_json::json;
//!
//! let graph = generate_entity_graph(
//!     &json!([
//!         {"@id": "ex:JohnDoe", "ex:knows": {"@id": "ex:JaneSmith"}},
//!         {"@id": "ex:JaneSmith"}
//!     ]),
//!     Some("ex:JohnDoe"),
//!     &TraceOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(graph.nodes.len(), 2);
//! assert_eq!(graph.links[0].label, "knows");
//! ```

pub mod attributes;
pub mod error;
pub mod index;
pub mod links;
pub mod model;
pub mod options;
pub mod state;
pub mod tracer;

pub use attributes::{derive_attributes, graph_node};
pub use error::{Result, TraceError};
pub use index::{InboundRef, ReferenceIndex};
pub use links::{eliminate_redundant_links, links_equivalent, post_process, restrict_links_to_nodes};
pub use model::{EntityGraph, GraphLink, GraphNode, NodeProperty};
pub use options::{MaxDepth, NodeNaming, TraceOptions};
pub use state::{DepthStats, TraceDiagnostics, TraversalState};
pub use tracer::{generate_entity_graph, EntityGraphTracer};
