//! Graph: the central builder for a graph description

use super::attr::{from_alternating, AttrError, AttrMap, AttrValue};
use super::link::{Endpoint, Link, LinkSource, LinkTarget};
use super::name::Name;
use super::node::Node;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::warn;

/// A mutable graph description: flags, identity, attributes, member nodes,
/// nested subgraphs, and an ordered link sequence
///
/// Content mutators update the receiver in place and chain. The two
/// reconfiguring operations ([`Graph::as_strict`], [`Graph::as_directed`])
/// instead produce a replacement value that keeps only the flags and the
/// identity; configure flags before attaching content.
///
/// Member nodes and subgraphs form insertion-ordered sets keyed by full
/// structural equality; links form a plain sequence in which duplicates
/// accumulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    strict: bool,
    directed: bool,
    name: Name,
    attributes: AttrMap,
    nodes: IndexSet<Node>,
    subgraphs: IndexSet<Graph>,
    links: Vec<Link>,
}

impl Graph {
    /// Create a non-strict, undirected graph with the given identity
    pub fn named(name: impl Into<Name>) -> Self {
        Self {
            strict: false,
            directed: false,
            name: name.into(),
            attributes: AttrMap::new(),
            nodes: IndexSet::new(),
            subgraphs: IndexSet::new(),
            links: Vec::new(),
        }
    }

    /// Create an anonymous graph (empty identity)
    pub fn nameless() -> Self {
        Self::named(Name::empty())
    }

    /// Replacement graph with `strict` set, keeping `directed` and the
    /// identity
    ///
    /// Accumulated attributes, nodes, subgraphs, and links are discarded;
    /// the receiver is left untouched.
    pub fn as_strict(&self) -> Graph {
        self.reconfigure(true, self.directed)
    }

    /// Replacement graph with `directed` set, keeping `strict` and the
    /// identity
    ///
    /// Same discard rule as [`Graph::as_strict`].
    pub fn as_directed(&self) -> Graph {
        self.reconfigure(self.strict, true)
    }

    fn reconfigure(&self, strict: bool, directed: bool) -> Graph {
        if self.has_content() {
            warn!(
                graph = %self.name,
                nodes = self.nodes.len(),
                subgraphs = self.subgraphs.len(),
                links = self.links.len(),
                "reconfiguring a non-empty graph discards its accumulated content"
            );
        }
        Graph {
            strict,
            directed,
            name: self.name.clone(),
            attributes: AttrMap::new(),
            nodes: IndexSet::new(),
            subgraphs: IndexSet::new(),
            links: Vec::new(),
        }
    }

    fn has_content(&self) -> bool {
        !(self.attributes.is_empty()
            && self.nodes.is_empty()
            && self.subgraphs.is_empty()
            && self.links.is_empty())
    }

    /// Insert or overwrite a single attribute
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Merge a whole attribute map, overwriting existing keys
    pub fn set_attrs(&mut self, attrs: AttrMap) -> &mut Self {
        self.attributes.extend(attrs);
        self
    }

    /// Merge attributes given as a flat alternating key/value sequence
    ///
    /// The sequence is parsed completely before any mutation, so on error
    /// the graph's attributes are unchanged.
    pub fn set_attrs_alternating(
        &mut self,
        values: impl IntoIterator<Item = AttrValue>,
    ) -> Result<&mut Self, AttrError> {
        let parsed = from_alternating(values)?;
        self.attributes.extend(parsed);
        Ok(self)
    }

    /// Add a member node; a structurally equal node is a no-op
    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.nodes.insert(node);
        self
    }

    /// Add a nested subgraph; a structurally equal subgraph is a no-op
    ///
    /// Attachment is by value, so a graph added to itself is stored as a
    /// snapshot. No cycle detection is performed.
    pub fn add_subgraph(&mut self, subgraph: Graph) -> &mut Self {
        self.subgraphs.insert(subgraph);
        self
    }

    /// Append a link, re-anchoring its source to this graph
    ///
    /// The stored link keeps the supplied target and attributes. Links are
    /// a sequence: appending a structurally identical link twice yields
    /// two entries.
    pub fn add_link(&mut self, link: Link) -> &mut Self {
        let anchored = link.anchored_to(self);
        self.links.push(anchored);
        self
    }

    /// Consuming form of [`Graph::set_attr`] for construction chains
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Consuming form of [`Graph::set_attrs`]
    pub fn attrs(mut self, attrs: AttrMap) -> Self {
        self.set_attrs(attrs);
        self
    }

    /// Consuming form of [`Graph::add_node`]
    pub fn with_node(mut self, node: Node) -> Self {
        self.add_node(node);
        self
    }

    /// Add several member nodes in order
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        for node in nodes {
            self.add_node(node);
        }
        self
    }

    /// Consuming form of [`Graph::add_subgraph`]
    pub fn with_subgraph(mut self, subgraph: Graph) -> Self {
        self.add_subgraph(subgraph);
        self
    }

    /// Add several nested subgraphs in order
    pub fn with_subgraphs(mut self, subgraphs: impl IntoIterator<Item = Graph>) -> Self {
        for subgraph in subgraphs {
            self.add_subgraph(subgraph);
        }
        self
    }

    /// Consuming form of [`Graph::add_link`]
    pub fn link(mut self, link: Link) -> Self {
        self.add_link(link);
        self
    }

    /// Append several links in order, each re-anchored to this graph
    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        for link in links {
            self.add_link(link);
        }
        self
    }

    /// Whether duplicate edges collapse when serialized downstream
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Whether links are interpreted as directed
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// The graph's identity
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Graph-level attributes
    pub fn attributes(&self) -> &AttrMap {
        &self.attributes
    }

    /// Member nodes in insertion order
    pub fn nodes(&self) -> &IndexSet<Node> {
        &self.nodes
    }

    /// Nested subgraphs in insertion order
    pub fn subgraphs(&self) -> &IndexSet<Graph> {
        &self.subgraphs
    }

    /// Links declared on this graph, in declaration order
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::nameless()
    }
}

impl LinkSource for Graph {
    fn endpoint(&self) -> Endpoint {
        Endpoint::graph(self.name.clone())
    }
}

impl LinkTarget for Graph {
    fn name(&self) -> &Name {
        &self.name
    }

    fn links(&self) -> &[Link] {
        &self.links
    }
}

// Equality and hashing treat member order as significant: insertion order
// is part of the deterministic serialization contract, and hashing must
// agree with equality for set membership.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.strict == other.strict
            && self.directed == other.directed
            && self.name == other.name
            && self.attributes == other.attributes
            && self.nodes.iter().eq(other.nodes.iter())
            && self.subgraphs.iter().eq(other.subgraphs.iter())
            && self.links == other.links
    }
}

impl Eq for Graph {}

impl Hash for Graph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.strict.hash(state);
        self.directed.hash(state);
        self.name.hash(state);
        self.attributes.hash(state);
        for node in &self.nodes {
            node.hash(state);
        }
        for subgraph in &self.subgraphs {
            subgraph.hash(state);
        }
        self.links.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_starts_empty() {
        let g = Graph::named("G");
        assert!(!g.strict());
        assert!(!g.directed());
        assert_eq!(g.name(), &Name::of("G"));
        assert!(g.attributes().is_empty());
        assert!(g.nodes().is_empty());
        assert!(g.subgraphs().is_empty());
        assert!(g.links().is_empty());
    }

    #[test]
    fn test_nameless_is_anonymous() {
        let g = Graph::nameless();
        assert!(g.name().is_empty());
        assert_eq!(g, Graph::default());
    }

    #[test]
    fn test_as_strict_preserves_directed_and_name() {
        let g = Graph::named("G").as_directed();
        let strict = g.as_strict();

        assert!(strict.strict());
        assert_eq!(strict.directed(), g.directed());
        assert_eq!(strict.name(), &Name::of("G"));
    }

    #[test]
    fn test_as_directed_preserves_strict_and_name() {
        let g = Graph::named("G").as_strict();
        let directed = g.as_directed();

        assert!(directed.directed());
        assert_eq!(directed.strict(), g.strict());
        assert_eq!(directed.name(), &Name::of("G"));
    }

    #[test]
    fn test_reconfiguring_discards_content() {
        let mut g = Graph::named("G");
        g.set_attr("color", "red")
            .add_node(Node::named("a"))
            .add_subgraph(Graph::named("inner"))
            .add_link(Link::between(&Node::named("a"), &Node::named("b")));

        for reconfigured in [g.as_strict(), g.as_directed()] {
            assert!(reconfigured.attributes().is_empty());
            assert!(reconfigured.nodes().is_empty());
            assert!(reconfigured.subgraphs().is_empty());
            assert!(reconfigured.links().is_empty());
            assert_eq!(reconfigured.name(), &Name::of("G"));
        }
    }

    #[test]
    fn test_attr_then_directed_resets_attributes() {
        let g = Graph::named("G").attr("color", "red").as_directed();

        assert!(g.directed());
        assert!(g.attributes().is_empty());
        assert_eq!(g.name(), &Name::of("G"));
    }

    #[test]
    fn test_set_attr_overwrites() {
        let mut g = Graph::named("G");
        g.set_attr("color", "red").set_attr("color", "blue");

        assert_eq!(g.attributes().len(), 1);
        assert_eq!(g.attributes().get("color").unwrap().as_str(), Some("blue"));
    }

    #[test]
    fn test_set_attrs_merges() {
        let mut g = Graph::named("G");
        g.set_attr("color", "red");

        let mut incoming = AttrMap::new();
        incoming.insert("color".to_string(), "blue".into());
        incoming.insert("rankdir".to_string(), "LR".into());
        g.set_attrs(incoming);

        assert_eq!(g.attributes().len(), 2);
        assert_eq!(g.attributes().get("color").unwrap().as_str(), Some("blue"));
    }

    #[test]
    fn test_set_attrs_alternating() {
        let mut g = Graph::named("G");
        g.set_attrs_alternating(["color".into(), "red".into()]).unwrap();

        assert_eq!(g.attributes().get("color").unwrap().as_str(), Some("red"));
    }

    #[test]
    fn test_set_attrs_alternating_odd_length_leaves_attributes_unchanged() {
        let mut g = Graph::named("G");
        g.set_attr("color", "red");

        let err = g
            .set_attrs_alternating(["rankdir".into(), "LR".into(), "dangling".into()])
            .unwrap_err();

        assert_eq!(err, AttrError::OddLength(3));
        assert_eq!(g.attributes().len(), 1);
        assert_eq!(g.attributes().get("color").unwrap().as_str(), Some("red"));
    }

    #[test]
    fn test_add_node_is_idempotent_on_duplicates() {
        let mut g = Graph::named("G");
        g.add_node(Node::named("a")).add_node(Node::named("a"));

        assert_eq!(g.nodes().len(), 1);
    }

    #[test]
    fn test_nodes_with_different_attributes_are_distinct_members() {
        let mut g = Graph::named("G");
        g.add_node(Node::named("a"))
            .add_node(Node::named("a").attr("shape", "box"));

        assert_eq!(g.nodes().len(), 2);
    }

    #[test]
    fn test_nodes_preserve_insertion_order() {
        let g = Graph::named("G").with_nodes([
            Node::named("c"),
            Node::named("a"),
            Node::named("b"),
        ]);

        let order: Vec<&str> = g.nodes().iter().map(|n| n.name().as_str()).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn test_add_subgraph_is_idempotent_on_duplicates() {
        let mut g = Graph::named("G");
        g.add_subgraph(Graph::named("inner"))
            .add_subgraph(Graph::named("inner"));

        assert_eq!(g.subgraphs().len(), 1);
    }

    #[test]
    fn test_graph_can_contain_its_own_snapshot() {
        let mut g = Graph::named("G");
        let snapshot = g.clone();
        g.add_subgraph(snapshot.clone());

        assert_eq!(g.subgraphs().len(), 1);
        assert_eq!(g.subgraphs().get_index(0), Some(&snapshot));
    }

    #[test]
    fn test_add_link_anchors_source_to_this_graph() {
        let a = Node::named("a");
        let b = Node::named("b");
        let mut g = Graph::named("G");
        g.add_node(a.clone())
            .add_node(b.clone())
            .add_link(Link::between(&a, &b));

        assert_eq!(g.nodes().len(), 2);
        assert_eq!(g.links().len(), 1);
        assert_eq!(g.links()[0].from(), &Endpoint::graph("G"));
        assert_eq!(g.links()[0].from().name(), g.name());
        assert_eq!(g.links()[0].to(), &Endpoint::node("b"));
    }

    #[test]
    fn test_add_link_copies_target_and_attributes() {
        let link = Link::between(&Node::named("a"), &Node::named("b")).attr("weight", 2i64);
        let mut g = Graph::named("G");
        g.add_link(link);

        assert_eq!(g.links()[0].to(), &Endpoint::node("b"));
        assert_eq!(g.links()[0].attributes().get("weight").unwrap().as_int(), Some(2));
    }

    #[test]
    fn test_links_are_a_sequence_not_a_set() {
        let a = Node::named("a");
        let b = Node::named("b");
        let mut g = Graph::named("G");
        g.add_link(Link::between(&a, &b)).add_link(Link::between(&a, &b));

        assert_eq!(g.links().len(), 2);
        assert_eq!(g.links()[0], g.links()[1]);
    }

    #[test]
    fn test_graph_can_link_to_itself() {
        let mut g = Graph::named("G");
        let self_link = Link::between(&g.endpoint(), &g.clone());
        g.add_link(self_link);

        assert_eq!(g.links()[0].from(), &Endpoint::graph("G"));
        assert_eq!(g.links()[0].to(), &Endpoint::graph("G"));
    }

    #[test]
    fn test_anonymous_graphs_compare_structurally() {
        assert_eq!(Graph::nameless(), Graph::nameless());
        assert_ne!(
            Graph::nameless(),
            Graph::nameless().with_node(Node::named("a"))
        );
    }

    #[test]
    fn test_member_order_is_part_of_identity() {
        let ab = Graph::named("G").with_nodes([Node::named("a"), Node::named("b")]);
        let ba = Graph::named("G").with_nodes([Node::named("b"), Node::named("a")]);

        assert_ne!(ab, ba);
    }

    #[test]
    fn test_flag_combinations_compose() {
        let g = Graph::named("G").as_strict().as_directed();
        assert!(g.strict());
        assert!(g.directed());
    }
}
