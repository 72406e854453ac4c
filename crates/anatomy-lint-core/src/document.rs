//! Host document codec.
//!
//! Documents are JSON node trees in the plugin-API shape:
//!
//! ```json
//! { "id": "1:2", "name": "Accordion", "type": "COMPONENT_SET", "children": [ ... ] }
//! ```
//!
//! A REST-style file wrapping the tree in a top-level `"document"` key is
//! accepted too. The raw JSON is kept alongside the decoded [`Node`] tree so
//! renames can be written back without losing unrelated fields.

use crate::fix::Rename;
use crate::node::{Container, ContainerKind, Leaf, Node, NodePath};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Errors reading or decoding a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// IO error reading or writing the document.
    #[error("Failed to access document {path}: {source}")]
    Io {
        /// Document path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid JSON or not a node tree.
    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct NodeDto {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    children: Vec<NodeDto>,
}

impl From<NodeDto> for Node {
    fn from(dto: NodeDto) -> Self {
        match ContainerKind::from_tag(&dto.kind) {
            Some(kind) => Self::Container(Container {
                id: dto.id,
                name: dto.name,
                kind,
                children: dto.children.into_iter().map(Node::from).collect(),
            }),
            None => Self::Leaf(Leaf {
                id: dto.id,
                name: dto.name,
                tag: dto.kind,
            }),
        }
    }
}

/// A decoded host document.
#[derive(Debug, Clone)]
pub struct Document {
    raw: Value,
    wrapped: bool,
    root: Node,
}

impl Document {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or not a node tree.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        let raw: Value = serde_json::from_str(content)?;
        let wrapped = raw.get("document").is_some_and(Value::is_object) && raw.get("type").is_none();
        let tree = if wrapped { &raw["document"] } else { &raw };
        let root = Node::from(NodeDto::deserialize(tree)?);
        Ok(Self { raw, wrapped, root })
    }

    /// Reads and parses a document file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Parsing document: {}", path.display());
        Self::parse(&content)
    }

    /// Returns the decoded tree.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the decoded tree mutably.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Selects a node by id or display name; `None` selects the root.
    ///
    /// Returns `None` when the selector matches nothing.
    #[must_use]
    pub fn select(&self, selector: Option<&str>) -> Option<(NodePath, &Node)> {
        match selector {
            Some(s) => self.root.find(s),
            None => Some((NodePath::root(), &self.root)),
        }
    }

    /// Applies renames relative to the node at `base`, in both the decoded
    /// tree and the raw JSON. Returns the number of nodes renamed.
    pub fn apply_renames(&mut self, base: &NodePath, renames: &[Rename]) -> usize {
        let mut count = 0;
        for rename in renames {
            let path = rename.path.under(base);
            let Some(node) = self.root.get_mut(&path) else {
                warn!("Node to rename no longer exists: {path}");
                continue;
            };
            node.set_name(rename.to.clone());
            if let Some(raw) = self.raw_node_mut(&path) {
                raw["name"] = Value::String(rename.to.clone());
            }
            count += 1;
        }
        count
    }

    /// Serializes the raw JSON, including any applied renames.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.raw)?)
    }

    /// Writes the raw JSON back to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to(&self, path: &Path) -> Result<(), DocumentError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json + "\n").map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn raw_node_mut(&mut self, path: &NodePath) -> Option<&mut Value> {
        let mut value = if self.wrapped {
            self.raw.get_mut("document")?
        } else {
            &mut self.raw
        };
        for &i in path.indices() {
            value = value.get_mut("children")?.get_mut(i)?;
        }
        Some(value)
    }
}
