//! Links between graph entities and the capability contracts they rely on

use super::attr::{AttrMap, AttrValue};
use super::name::Name;
use serde::{Deserialize, Serialize};

/// The recorded identity of one end of a link
///
/// Endpoints reference entities by kind and name rather than owning them,
/// so a graph can link to itself or to entities declared elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Endpoint {
    Node { name: Name },
    Graph { name: Name },
}

impl Endpoint {
    /// Endpoint referencing a node by name
    pub fn node(name: impl Into<Name>) -> Self {
        Endpoint::Node { name: name.into() }
    }

    /// Endpoint referencing a graph by name
    pub fn graph(name: impl Into<Name>) -> Self {
        Endpoint::Graph { name: name.into() }
    }

    /// The identity this endpoint refers to
    pub fn name(&self) -> &Name {
        match self {
            Endpoint::Node { name } | Endpoint::Graph { name } => name,
        }
    }

    /// Whether this endpoint refers to a graph
    pub fn is_graph(&self) -> bool {
        matches!(self, Endpoint::Graph { .. })
    }
}

/// Capability to serve as the origin of a link
pub trait LinkSource {
    /// The identity endpoint recorded for this entity inside a link
    fn endpoint(&self) -> Endpoint;
}

/// Capability to serve as a link destination
///
/// Targets report their identity and the ordered sequence of links whose
/// source is the target itself.
pub trait LinkTarget: LinkSource {
    fn name(&self) -> &Name;
    fn links(&self) -> &[Link];
}

impl LinkSource for Endpoint {
    fn endpoint(&self) -> Endpoint {
        self.clone()
    }
}

/// A connection between two endpoints, carrying its own attributes
///
/// Whether the link is drawn directed is decided by the graph that stores
/// it, not by the link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    from: Endpoint,
    to: Endpoint,
    attributes: AttrMap,
}

impl Link {
    /// Create a link from a source to a target, with no attributes
    pub fn between(from: &impl LinkSource, to: &impl LinkTarget) -> Self {
        Self {
            from: from.endpoint(),
            to: to.endpoint(),
            attributes: AttrMap::new(),
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

    /// Rebind the source endpoint to the given entity, keeping target and
    /// attributes
    ///
    /// Attachment uses this so a stored link's source always names the
    /// entity that stores it.
    pub fn anchored_to(self, source: &impl LinkSource) -> Self {
        Self {
            from: source.endpoint(),
            ..self
        }
    }

    /// The source endpoint
    pub fn from(&self) -> &Endpoint {
        &self.from
    }

    /// The target endpoint
    pub fn to(&self) -> &Endpoint {
        &self.to
    }

    /// Attributes carried by this link
    pub fn attributes(&self) -> &AttrMap {
        &self.attributes
    }
}
