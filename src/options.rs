//! Detection options configuration.
//!
//! This module provides the [`DetectOptions`] struct for configuring where
//! detection looks and which legacy entries it considers.

use crate::text::parse_bool;

/// Legacy root holding one child node per installed framework version.
pub const DEFAULT_NDP_ROOT: &str = r"SOFTWARE\Microsoft\NET Framework Setup\NDP";

/// Wildcard that legacy version node names must match.
pub const DEFAULT_KEY_FILTER: &str = "v*";

const ENV_KEY_FILTER: &str = "NETFX_DISCOVERY_KEY_FILTER";
const ENV_INCLUDE_PROFILES: &str = "NETFX_DISCOVERY_INCLUDE_PROFILES";
const ENV_SKIP_RELEASE_PROBE: &str = "NETFX_DISCOVERY_SKIP_RELEASE_PROBE";

/// Configuration options for framework detection.
///
/// # Default Behavior
///
/// Detection reads the standard `NDP` root, scans children whose names
/// start with `v`, and ignores nested profile nodes (`v4\Client`,
/// `v4\Full`) during the legacy scan.
///
/// # Example
///
/// ```rust
/// use netfx_discovery::DetectOptions;
///
/// // Standard detection
/// let opts = DetectOptions::default();
///
/// // Also fold nested profile versions
/// let opts = DetectOptions {
///     include_profiles: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Path of the legacy root node.
    ///
    /// The release indicator is read from `<ndp_root>\v4\Full`.
    ///
    /// Default: [`DEFAULT_NDP_ROOT`]
    pub ndp_root: String,

    /// Wildcard that a child of the root must match to be scanned.
    ///
    /// Default: `v*`
    pub key_filter: String,

    /// Fold versions found in nested profile nodes.
    ///
    /// When a legacy version node has no `Version` value of its own, its
    /// children are read. These candidates are logged but only folded into
    /// the result when this is set.
    ///
    /// Default: `false`
    pub include_profiles: bool,

    /// Skip the release indicator and always run the legacy scan.
    ///
    /// Default: `false`
    pub skip_release_probe: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            ndp_root: DEFAULT_NDP_ROOT.to_string(),
            key_filter: DEFAULT_KEY_FILTER.to_string(),
            include_profiles: false,
            skip_release_probe: false,
        }
    }
}

impl DetectOptions {
    /// Default options with overrides from the environment.
    ///
    /// - `NETFX_DISCOVERY_KEY_FILTER`: replaces `key_filter`
    /// - `NETFX_DISCOVERY_INCLUDE_PROFILES`: `true`/`false`
    /// - `NETFX_DISCOVERY_SKIP_RELEASE_PROBE`: `true`/`false`
    ///
    /// Unparseable booleans keep their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();

        if let Some(filter) = lookup(ENV_KEY_FILTER) {
            opts.key_filter = filter;
        }
        if let Some(flag) = bool_var(&lookup, ENV_INCLUDE_PROFILES) {
            opts.include_profiles = flag;
        }
        if let Some(flag) = bool_var(&lookup, ENV_SKIP_RELEASE_PROBE) {
            opts.skip_release_probe = flag;
        }

        opts
    }
}

fn bool_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<bool> {
    let raw = lookup(name)?;
    let parsed = parse_bool(&raw);
    if parsed.is_none() {
        tracing::warn!(variable = name, value = %raw, "ignoring non-boolean setting");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let opts = DetectOptions::default();
        assert_eq!(opts.ndp_root, DEFAULT_NDP_ROOT);
        assert_eq!(opts.key_filter, "v*");
        assert!(!opts.include_profiles);
        assert!(!opts.skip_release_probe);
    }

    #[test]
    fn test_struct_update() {
        let opts = DetectOptions {
            include_profiles: true,
            ..Default::default()
        };
        assert!(opts.include_profiles);
        assert_eq!(opts.key_filter, DEFAULT_KEY_FILTER);
    }

    #[test]
    fn test_lookup_overrides() {
        let opts = DetectOptions::from_lookup(lookup_from(&[
            (ENV_KEY_FILTER, "v?.*"),
            (ENV_INCLUDE_PROFILES, "TRUE"),
            (ENV_SKIP_RELEASE_PROBE, "false"),
        ]));
        assert_eq!(opts.key_filter, "v?.*");
        assert!(opts.include_profiles);
        assert!(!opts.skip_release_probe);
    }

    #[test]
    fn test_lookup_bad_boolean_keeps_default() {
        let opts = DetectOptions::from_lookup(lookup_from(&[(ENV_INCLUDE_PROFILES, "yes")]));
        assert!(!opts.include_profiles);
    }

    #[test]
    fn test_lookup_empty() {
        let opts = DetectOptions::from_lookup(lookup_from(&[]));
        assert_eq!(opts, DetectOptions::default());
    }
}
