//! Read-only access to the hierarchical configuration store.
//!
//! Detection never talks to the registry directly. It goes through the
//! [`ConfigStore`] and [`StoreNode`] traits so the same algorithm runs
//! against the live machine hive ([`RegistryStore`], Windows only) or an
//! in-memory tree ([`MemoryStore`]).
//!
//! Node handles are released when dropped. Keep each handle scoped to the
//! block that reads it.

mod memory;
#[cfg(windows)]
mod windows;

pub use memory::{MemoryNode, MemoryStore};
#[cfg(windows)]
pub use windows::RegistryStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between path segments, as in registry key paths.
pub const PATH_SEPARATOR: char = '\\';

/// A leaf value read from a store node.
///
/// Registry DWORD and QWORD values map to `Integer`, SZ and EXPAND_SZ
/// values map to `String`. In JSON fixtures, numbers become `Integer` and
/// strings become `String`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    /// Numeric value.
    Integer(u64),
    /// Textual value.
    String(String),
}

impl StoreValue {
    /// Render the value as text. Integers are written in decimal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use netfx_discovery::StoreValue;
    ///
    /// assert_eq!(StoreValue::Integer(1).as_text(), "1");
    /// assert_eq!(StoreValue::from("SP2").as_text(), "SP2");
    /// ```
    pub fn as_text(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Read the value as an integer, parsing textual values.
    ///
    /// Returns `None` for text that is not a non-negative integer.
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::String(s) => s.trim().parse().ok(),
        }
    }
}

impl From<u64> for StoreValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for StoreValue {
    fn from(value: u32) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Errors raised by a store while opening or reading a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The caller may not read the node.
    #[error("permission denied reading {path}")]
    PermissionDenied {
        /// Path of the node that was refused.
        path: String,
    },

    /// Any other read failure.
    #[error("failed to read {path}: {message}")]
    Io {
        /// Path of the node being read.
        path: String,
        /// Underlying failure description.
        message: String,
    },
}

impl StoreError {
    /// Path of the node the failure relates to.
    pub fn path(&self) -> &str {
        match self {
            Self::PermissionDenied { path } | Self::Io { path, .. } => path,
        }
    }
}

/// An open node in the configuration store.
pub trait StoreNode {
    /// Read a named value. `Ok(None)` when the value does not exist.
    fn value(&self, name: &str) -> Result<Option<StoreValue>, StoreError>;

    /// Names of the direct children of this node.
    fn child_names(&self) -> Result<Vec<String>, StoreError>;

    /// Read a named value as text, with an absent value reading as `""`.
    fn text_value(&self, name: &str) -> Result<String, StoreError> {
        Ok(self
            .value(name)?
            .map(|value| value.as_text())
            .unwrap_or_default())
    }
}

/// A hierarchical, read-only key/value tree addressed by path.
pub trait ConfigStore {
    /// Open the node at `path`.
    ///
    /// Returns `Ok(None)` when no node exists at that path, and an error when
    /// the node exists but cannot be opened.
    fn open_node(&self, path: &str) -> Result<Option<Box<dyn StoreNode + '_>>, StoreError>;
}

/// Join a parent path and a child name with the store separator.
pub fn join_path(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches(PATH_SEPARATOR);
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}{PATH_SEPARATOR}{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(StoreValue::Integer(378389).as_text(), "378389");
        assert_eq!(StoreValue::from("2.0.50727.4927").as_text(), "2.0.50727.4927");
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(StoreValue::Integer(7).as_integer(), Some(7));
        assert_eq!(StoreValue::from(" 379893 ").as_integer(), Some(379893));
        assert_eq!(StoreValue::from("four").as_integer(), None);
        assert_eq!(StoreValue::from("-1").as_integer(), None);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(r"SOFTWARE\NDP", "v4"), r"SOFTWARE\NDP\v4");
        assert_eq!(join_path(r"SOFTWARE\NDP\", "v4"), r"SOFTWARE\NDP\v4");
        assert_eq!(join_path("", "v4"), "v4");
    }

    #[test]
    fn test_store_error_path() {
        let err = StoreError::PermissionDenied {
            path: r"SOFTWARE\NDP".to_string(),
        };
        assert_eq!(err.path(), r"SOFTWARE\NDP");
        assert_eq!(err.to_string(), r"permission denied reading SOFTWARE\NDP");
    }

    #[test]
    fn test_store_value_deserialize_untagged() {
        let values: Vec<StoreValue> = serde_json::from_str(r#"[1, "1", "SP1"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                StoreValue::Integer(1),
                StoreValue::from("1"),
                StoreValue::from("SP1"),
            ]
        );
    }
}
