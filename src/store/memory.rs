//! In-memory configuration store.

use super::{ConfigStore, StoreError, StoreNode, StoreValue, PATH_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in a [`MemoryStore`] tree.
///
/// Names are matched case-insensitively, as registry key and value names
/// are. Children are kept sorted, so enumeration order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryNode {
    /// Leaf values of this node.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, StoreValue>,

    /// Child nodes by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, MemoryNode>,

    /// When set, opening this node fails with `PermissionDenied`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub denied: bool,
}

impl MemoryNode {
    fn child(&self, name: &str) -> Option<&MemoryNode> {
        self.children
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, node)| node)
    }

    fn child_or_insert(&mut self, name: &str) -> &mut MemoryNode {
        let key = self
            .children
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| name.to_string());
        self.children.entry(key).or_default()
    }

    fn set_value(&mut self, name: &str, value: StoreValue) {
        let key = self
            .values
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| name.to_string());
        self.values.insert(key, value);
    }
}

/// A configuration store held entirely in memory.
///
/// Useful for tests and for replaying a captured registry snapshot. The
/// store serializes as its root node, so a fixture can be written as JSON:
///
/// ```rust
/// use netfx_discovery::MemoryStore;
///
/// let store: MemoryStore = serde_json::from_str(r#"{
///     "children": {
///         "SOFTWARE": { "children": { "Example": {
///             "values": { "Version": "1.0.0.0", "Install": 1 }
///         } } }
///     }
/// }"#).unwrap();
/// # let _ = store;
/// ```
///
/// Or built in code:
///
/// ```rust
/// use netfx_discovery::MemoryStore;
///
/// let store = MemoryStore::new()
///     .with_value(r"SOFTWARE\Example", "Version", "1.0.0.0")
///     .with_value(r"SOFTWARE\Example", "Install", 1u32);
/// # let _ = store;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    root: MemoryNode,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing tree.
    pub fn from_root(root: MemoryNode) -> Self {
        Self { root }
    }

    /// The root node of the tree.
    pub fn root(&self) -> &MemoryNode {
        &self.root
    }

    /// Ensure a node exists at `path`, creating intermediate nodes.
    pub fn with_node(mut self, path: &str) -> Self {
        self.node_mut(path);
        self
    }

    /// Set a value on the node at `path`, creating the node if needed.
    pub fn with_value(mut self, path: &str, name: &str, value: impl Into<StoreValue>) -> Self {
        self.node_mut(path).set_value(name, value.into());
        self
    }

    /// Make the node at `path` refuse to open.
    pub fn deny_access(mut self, path: &str) -> Self {
        self.node_mut(path).denied = true;
        self
    }

    /// Mutable access to the node at `path`, creating it if needed.
    pub fn node_mut(&mut self, path: &str) -> &mut MemoryNode {
        segments(path).fold(&mut self.root, |node, segment| node.child_or_insert(segment))
    }

    fn find(&self, path: &str) -> Option<&MemoryNode> {
        segments(path).try_fold(&self.root, |node, segment| node.child(segment))
    }
}

impl ConfigStore for MemoryStore {
    fn open_node(&self, path: &str) -> Result<Option<Box<dyn StoreNode + '_>>, StoreError> {
        match self.find(path) {
            None => Ok(None),
            Some(node) if node.denied => Err(StoreError::PermissionDenied {
                path: path.to_string(),
            }),
            Some(node) => Ok(Some(Box::new(MemoryHandle { node }))),
        }
    }
}

/// Borrowed handle to an open [`MemoryNode`].
struct MemoryHandle<'a> {
    node: &'a MemoryNode,
}

impl StoreNode for MemoryHandle<'_> {
    fn value(&self, name: &str) -> Result<Option<StoreValue>, StoreError> {
        Ok(self
            .node
            .values
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone()))
    }

    fn child_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.node.children.keys().cloned().collect())
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR).filter(|segment| !segment.is_empty())
}
