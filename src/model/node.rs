//! Node declarations in a graph description

use super::attr::{AttrMap, AttrValue};
use super::link::{Endpoint, Link, LinkSource, LinkTarget};
use super::name::Name;
use serde::{Deserialize, Serialize};

/// A node declaration: an identity plus its attributes and outgoing links
///
/// Two nodes are the same set member only when identity, attributes, and
/// links all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    name: Name,
    attributes: AttrMap,
    links: Vec<Link>,
}

impl Node {
    /// Create a node with the given identity and no attributes or links
    pub fn named(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            attributes: AttrMap::new(),
            links: Vec::new(),
        }
    }

    /// Set a single attribute, overwriting any previous value
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Merge a whole attribute map, overwriting existing keys
    pub fn attrs(mut self, attrs: AttrMap) -> Self {
        self.attributes.extend(attrs);
        self
    }

    /// Append a link from this node to the given target
    pub fn link_to(mut self, target: &impl LinkTarget) -> Self {
        let link = Link::between(&self, target);
        self.links.push(link);
        self
    }

    /// Append a link, re-anchoring its source to this node
    pub fn link(mut self, link: Link) -> Self {
        let anchored = link.anchored_to(&self);
        self.links.push(anchored);
        self
    }

    /// The node's identity
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Attributes declared on this node
    pub fn attributes(&self) -> &AttrMap {
        &self.attributes
    }

    /// Links whose source is this node, in declaration order
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl LinkSource for Node {
    fn endpoint(&self) -> Endpoint {
        Endpoint::node(self.name.clone())
    }
}

impl LinkTarget for Node {
    fn name(&self) -> &Name {
        &self.name
    }

    fn links(&self) -> &[Link] {
        &self.links
    }
}
