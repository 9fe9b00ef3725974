//! Fast-path probe of the `Release` indicator.

use crate::store::ConfigStore;
use crate::{DetectionError, FrameworkRelease};

/// Name of the indicator value on the `v4\Full` node.
const RELEASE_VALUE: &str = "Release";

/// Read the release indicator at `path` and map it to a known release.
///
/// Returns `Ok(None)` when the node or value is missing, the value is not
/// numeric, or the indicator is below every known threshold. Only a failure
/// to open or read an existing node is an error.
pub(crate) fn probe_release<S>(
    store: &S,
    path: &str,
) -> Result<Option<(u64, FrameworkRelease)>, DetectionError>
where
    S: ConfigStore + ?Sized,
{
    let release_key = {
        let Some(node) = store.open_node(path)? else {
            tracing::debug!(path, "release node not present");
            return Ok(None);
        };
        node.value(RELEASE_VALUE)?
    };

    let Some(release_key) = release_key.and_then(|value| value.as_integer()) else {
        tracing::debug!(path, "no numeric release indicator");
        return Ok(None);
    };

    let release = FrameworkRelease::from_release_key(release_key);
    match release {
        Some(release) => {
            tracing::debug!(release_key, version = release.version(), "release indicator matched");
        }
        None => {
            tracing::debug!(release_key, "release indicator below known thresholds");
        }
    }

    Ok(release.map(|release| (release_key, release)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const FULL: &str = r"NDP\v4\Full";

    fn store_with_release(value: impl Into<crate::StoreValue>) -> MemoryStore {
        MemoryStore::new().with_value(FULL, RELEASE_VALUE, value)
    }

    fn probed_version(store: &MemoryStore) -> Option<&'static str> {
        probe_release(store, FULL)
            .unwrap()
            .map(|(_, release)| release.version())
    }

    #[test]
    fn test_probe_known_indicators() {
        assert_eq!(probed_version(&store_with_release(379893u32)), Some("4.5.2"));
        assert_eq!(probed_version(&store_with_release(379675u32)), Some("4.5.1"));
        assert_eq!(probed_version(&store_with_release(378389u32)), Some("4.5"));
    }

    #[test]
    fn test_probe_returns_raw_indicator() {
        let store = store_with_release(528049u32);
        let result = probe_release(&store, FULL).unwrap();
        assert_eq!(result, Some((528049, FrameworkRelease::Net48)));
    }

    #[test]
    fn test_probe_low_indicator_not_found() {
        assert_eq!(probed_version(&store_with_release(100u32)), None);
    }

    #[test]
    fn test_probe_missing_node_not_found() {
        let store = MemoryStore::new().with_node("NDP");
        assert_eq!(probed_version(&store), None);
    }

    #[test]
    fn test_probe_missing_value_not_found() {
        let store = MemoryStore::new().with_value(FULL, "Version", "4.5.51209");
        assert_eq!(probed_version(&store), None);
    }

    #[test]
    fn test_probe_textual_indicator() {
        assert_eq!(probed_version(&store_with_release("379675")), Some("4.5.1"));
        assert_eq!(probed_version(&store_with_release("not a number")), None);
    }

    #[test]
    fn test_probe_denied_node_is_fatal() {
        let store = store_with_release(379893u32).deny_access(FULL);
        let result = probe_release(&store, FULL);
        assert!(matches!(result, Err(DetectionError::StoreUnavailable { .. })));
    }
}
