//! Dotform: In-Memory Graphviz Graph Descriptions
//!
//! A builder for the structural model behind a DOT document: nodes, links,
//! nested subgraphs, and key/value attributes. The model carries no
//! rendering logic; a downstream serializer walks the finished value and
//! emits text.
//!
//! # Core Concepts
//!
//! - **Graph**: the central builder holding flags, identity, attributes,
//!   member nodes, nested subgraphs, and an ordered link sequence
//! - **Node**: a node declaration with its own attributes and links
//! - **Link**: a connection between two endpoints, re-anchored to whatever
//!   entity stores it
//!
//! # Example
//!
//! ```
//! use dotform::{Graph, Link, Node};
//!
//! let a = Node::named("a").attr("shape", "box");
//! let b = Node::named("b");
//! let graph = Graph::named("deps")
//!     .as_directed()
//!     .attr("rankdir", "LR")
//!     .with_nodes([a.clone(), b.clone()])
//!     .link(Link::between(&a, &b));
//!
//! assert!(graph.directed());
//! assert_eq!(graph.links().len(), 1);
//! ```

mod model;
pub mod walk;

pub use model::{
    from_alternating, AttrError, AttrMap, AttrValue, Endpoint, Graph, Link, LinkSource,
    LinkTarget, Name, Node,
};
pub use walk::Walk;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
