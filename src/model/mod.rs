//! Core graph description model

mod attr;
mod graph;
mod link;
mod name;
mod node;


pub use attr::{from_alternating, AttrError, AttrMap, AttrValue};
pub use graph::Graph;
pub use link::{Endpoint, Link, LinkSource, LinkTarget};
pub use name::Name;
pub use node::Node;
