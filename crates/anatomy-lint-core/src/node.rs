//! Document tree model.
//!
//! A host document is a tree of named nodes. Only containers carry children;
//! leaves (text, vectors, shapes) never do. Nodes are addressed by a
//! [`NodePath`] of child indices from the linted root.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural node types. Only these may match an anatomy part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerKind {
    /// A layout frame.
    Frame,
    /// A plain group.
    Group,
    /// A main component.
    Component,
    /// An instance of a component.
    Instance,
    /// A set of component variants.
    ComponentSet,
    /// A canvas section.
    Section,
}

impl ContainerKind {
    /// Parses a host type tag (e.g. `"COMPONENT_SET"`).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "FRAME" => Some(Self::Frame),
            "GROUP" => Some(Self::Group),
            "COMPONENT" => Some(Self::Component),
            "INSTANCE" => Some(Self::Instance),
            "COMPONENT_SET" => Some(Self::ComponentSet),
            "SECTION" => Some(Self::Section),
            _ => None,
        }
    }

    /// Returns the host type tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Component => "COMPONENT",
            Self::Instance => "INSTANCE",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Section => "SECTION",
        }
    }

    /// Components and instances.
    #[must_use]
    pub fn is_component_like(self) -> bool {
        matches!(self, Self::Component | Self::Instance)
    }
}

/// A container node: structural, may hold children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Host identifier, if the document provides one.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Structural type.
    pub kind: ContainerKind,
    /// Ordered children.
    pub children: Vec<Node>,
}

/// A leaf node: never a match target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// Host identifier, if the document provides one.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Host type tag as found in the document (e.g. `"TEXT"`).
    pub tag: String,
}

/// A document tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Structural container.
    Container(Container),
    /// Non-structural leaf.
    Leaf(Leaf),
}

impl Node {
    /// Creates a container node without an id.
    #[must_use]
    pub fn container(kind: ContainerKind, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Container(Container {
            id: None,
            name: name.into(),
            kind,
            children,
        })
    }

    /// Shorthand for a `FRAME` container.
    #[must_use]
    pub fn frame(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::container(ContainerKind::Frame, name, children)
    }

    /// Shorthand for a `TEXT` leaf.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::leaf("TEXT", name)
    }

    /// Creates a leaf node with the given host type tag.
    #[must_use]
    pub fn leaf(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Leaf(Leaf {
            id: None,
            name: name.into(),
            tag: tag.into(),
        })
    }

    /// Sets the host id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        match &mut self {
            Self::Container(c) => c.id = Some(id.into()),
            Self::Leaf(l) => l.id = Some(id.into()),
        }
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Container(c) => &c.name,
            Self::Leaf(l) => &l.name,
        }
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Self::Container(c) => c.name = name.into(),
            Self::Leaf(l) => l.name = name.into(),
        }
    }

    /// Returns the host id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Container(c) => c.id.as_deref(),
            Self::Leaf(l) => l.id.as_deref(),
        }
    }

    /// Returns the host type tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Container(c) => c.kind.tag(),
            Self::Leaf(l) => &l.tag,
        }
    }

    /// Returns the container kind, or `None` for leaves.
    #[must_use]
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Self::Container(c) => Some(c.kind),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the children (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Container(c) => &c.children,
            Self::Leaf(_) => &[],
        }
    }

    /// Returns `true` for a component set.
    #[must_use]
    pub fn is_component_set(&self) -> bool {
        self.container_kind() == Some(ContainerKind::ComponentSet)
    }

    /// Resolves a path relative to this node.
    #[must_use]
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        path.indices()
            .iter()
            .try_fold(self, |node, &i| node.children().get(i))
    }

    /// Resolves a path relative to this node, mutably.
    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let mut node = self;
        for &i in path.indices() {
            node = match node {
                Self::Container(c) => c.children.get_mut(i)?,
                Self::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    /// Finds the first node (pre-order) whose id or display name equals `selector`.
    #[must_use]
    pub fn find(&self, selector: &str) -> Option<(NodePath, &Node)> {
        fn visit<'a>(node: &'a Node, path: NodePath, selector: &str) -> Option<(NodePath, &'a Node)> {
            if node.id() == Some(selector) || node.name() == selector {
                return Some((path, node));
            }
            node.children()
                .iter()
                .enumerate()
                .find_map(|(i, child)| visit(child, path.child(i), selector))
        }
        visit(self, NodePath::root(), selector)
    }
}

/// Address of a node as child indices from the linted root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The root itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from indices.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Returns the path of the `index`-th child of this path.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Returns this path re-rooted under `prefix`.
    #[must_use]
    pub fn under(&self, prefix: &NodePath) -> Self {
        let mut indices = prefix.0.clone();
        indices.extend_from_slice(&self.0);
        Self(indices)
    }

    /// Returns the raw indices.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "$");
        }
        write!(f, "$")?;
        for i in &self.0 {
            write!(f, "/{i}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::frame(
            "Root",
            vec![
                Node::text("Label"),
                Node::frame("Trigger", vec![Node::frame("Icon", vec![])]).with_id("1:4"),
            ],
        )
    }

    #[test]
    fn get_follows_child_indices() {
        let root = sample();
        let icon = root.get(&NodePath::new(vec![1, 0])).unwrap();
        assert_eq!(icon.name(), "Icon");
        assert!(root.get(&NodePath::new(vec![0, 0])).is_none());
        assert!(root.get(&NodePath::new(vec![5])).is_none());
    }

    #[test]
    fn get_mut_allows_rename() {
        let mut root = sample();
        root.get_mut(&NodePath::new(vec![1])).unwrap().set_name("Header");
        assert_eq!(root.children()[1].name(), "Header");
    }

    #[test]
    fn find_matches_id_then_name() {
        let root = sample();
        let (path, node) = root.find("1:4").unwrap();
        assert_eq!(path, NodePath::new(vec![1]));
        assert_eq!(node.name(), "Trigger");
        let (path, _) = root.find("Icon").unwrap();
        assert_eq!(path.to_string(), "$/1/0");
        assert!(root.find("Panel").is_none());
    }

    #[test]
    fn leaves_have_no_children() {
        let leaf = Node::text("Label");
        assert!(leaf.children().is_empty());
        assert_eq!(leaf.tag(), "TEXT");
        assert!(leaf.container_kind().is_none());
    }

    #[test]
    fn container_kind_tags_roundtrip() {
        for tag in ["FRAME", "GROUP", "COMPONENT", "INSTANCE", "COMPONENT_SET", "SECTION"] {
            assert_eq!(ContainerKind::from_tag(tag).unwrap().tag(), tag);
        }
        assert!(ContainerKind::from_tag("TEXT").is_none());
    }
}
