//! Configuration store backed by the Windows registry.

use super::{ConfigStore, StoreError, StoreNode, StoreValue};
use std::io;
use winreg::enums::{RegType, HKEY_LOCAL_MACHINE, KEY_READ};
use winreg::RegKey;

/// Read-only view of `HKEY_LOCAL_MACHINE`.
///
/// Each opened node owns its `RegKey`, which closes the underlying handle
/// when dropped.
#[derive(Debug)]
pub struct RegistryStore {
    hive: RegKey,
}

impl RegistryStore {
    /// Open the local machine hive.
    pub fn local_machine() -> Self {
        Self {
            hive: RegKey::predef(HKEY_LOCAL_MACHINE),
        }
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::local_machine()
    }
}

impl ConfigStore for RegistryStore {
    fn open_node(&self, path: &str) -> Result<Option<Box<dyn StoreNode + '_>>, StoreError> {
        match self.hive.open_subkey_with_flags(path, KEY_READ) {
            Ok(key) => Ok(Some(Box::new(RegistryNode {
                key,
                path: path.to_string(),
            }))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e)),
        }
    }
}

struct RegistryNode {
    key: RegKey,
    path: String,
}

impl StoreNode for RegistryNode {
    fn value(&self, name: &str) -> Result<Option<StoreValue>, StoreError> {
        let raw = match self.key.get_raw_value(name) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io_error(&self.path, e)),
        };

        let value = match raw.vtype {
            RegType::REG_DWORD => self
                .key
                .get_value::<u32, _>(name)
                .map(|n| Some(StoreValue::Integer(u64::from(n)))),
            RegType::REG_QWORD => self
                .key
                .get_value::<u64, _>(name)
                .map(|n| Some(StoreValue::Integer(n))),
            RegType::REG_SZ | RegType::REG_EXPAND_SZ => self
                .key
                .get_value::<String, _>(name)
                .map(|s| Some(StoreValue::String(s))),
            _ => {
                tracing::trace!(path = %self.path, name, "ignoring unsupported value type");
                Ok(None)
            }
        };

        value.map_err(|e| map_io_error(&self.path, e))
    }

    fn child_names(&self) -> Result<Vec<String>, StoreError> {
        self.key
            .enum_keys()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| map_io_error(&self.path, e))
    }
}

fn map_io_error(path: &str, e: io::Error) -> StoreError {
    if e.kind() == io::ErrorKind::PermissionDenied {
        StoreError::PermissionDenied {
            path: path.to_string(),
        }
    } else {
        StoreError::Io {
            path: path.to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_key() {
        let store = RegistryStore::local_machine();
        let node = store
            .open_node(r"SOFTWARE\definitely_not_a_real_key_12345")
            .unwrap();
        assert!(node.is_none());
    }

    #[test]
    fn test_open_software_key() {
        let store = RegistryStore::local_machine();
        let node = store.open_node("SOFTWARE").unwrap().unwrap();
        assert!(!node.child_names().unwrap().is_empty());
    }

    #[test]
    fn test_map_io_error() {
        let err = map_io_error("SOFTWARE", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, StoreError::PermissionDenied { .. }));

        let err = map_io_error("SOFTWARE", io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
