//! Legacy scan over per-version nodes under the NDP root.

use crate::store::{join_path, ConfigStore, StoreError, StoreNode};
use crate::text::wildcard_pattern;
use crate::DetectionError;
use regex::Regex;

/// The value marking an entry as installed.
const INSTALLED: &str = "1";

/// Compiled wildcard filter for legacy node names.
#[derive(Debug, Clone)]
pub(crate) struct KeyFilter {
    regex: Regex,
}

impl KeyFilter {
    /// Compile a wildcard such as `v*`.
    pub(crate) fn new(pattern: &str) -> Result<Self, DetectionError> {
        let regex =
            Regex::new(&wildcard_pattern(pattern)).map_err(|e| DetectionError::InvalidFilter {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { regex })
    }

    pub(crate) fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// The `Version`, `SP` and `Install` values of one node.
///
/// Absent values read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CandidateEntry {
    pub(crate) version: String,
    pub(crate) service_pack: String,
    pub(crate) install: String,
}

impl CandidateEntry {
    fn read(node: &dyn StoreNode) -> Result<Self, StoreError> {
        Ok(Self {
            version: node.text_value("Version")?,
            service_pack: node.text_value("SP")?,
            install: node.text_value("Install")?,
        })
    }

    /// Whether this entry contributes its version to the fold.
    ///
    /// An entry needs a version, and either no install marker at all or a
    /// service pack together with `Install = 1`.
    pub(crate) fn is_included(&self) -> bool {
        !self.version.is_empty()
            && (self.install.is_empty()
                || (!self.service_pack.is_empty() && self.install == INSTALLED))
    }
}

/// Settings for one scan.
pub(crate) struct ScanConfig<'a> {
    pub(crate) root: &'a str,
    pub(crate) filter: &'a KeyFilter,
    pub(crate) include_profiles: bool,
}

/// Collect candidate version strings from the legacy layout.
///
/// A matching child with its own `Version` yields at most one candidate and
/// its children are not visited. A child without one is treated as a
/// multi-profile node: its children are read, and their candidates are
/// collected only when `include_profiles` is set.
///
/// # Errors
///
/// `StoreUnavailable` if the root is missing, or if any node fails to open
/// or read.
pub(crate) fn scan_candidates<S>(
    store: &S,
    config: &ScanConfig<'_>,
) -> Result<Vec<String>, DetectionError>
where
    S: ConfigStore + ?Sized,
{
    let names = open_required(store, config.root)?.child_names()?;
    let mut candidates = Vec::new();

    for name in names.iter().filter(|name| config.filter.matches(name)) {
        let path = join_path(config.root, name);
        let (entry, profiles) = {
            let node = open_required(store, &path)?;
            let entry = CandidateEntry::read(node.as_ref())?;
            let profiles = if entry.version.is_empty() {
                node.child_names()?
            } else {
                Vec::new()
            };
            (entry, profiles)
        };

        if !entry.version.is_empty() {
            collect(&mut candidates, &path, entry, true);
            continue;
        }

        for profile in profiles {
            let profile_path = join_path(&path, &profile);
            let entry = {
                let node = open_required(store, &profile_path)?;
                CandidateEntry::read(node.as_ref())?
            };
            if entry.version.is_empty() {
                continue;
            }
            collect(&mut candidates, &profile_path, entry, config.include_profiles);
        }
    }

    tracing::debug!(root = config.root, count = candidates.len(), "legacy scan finished");
    Ok(candidates)
}

fn collect(candidates: &mut Vec<String>, path: &str, entry: CandidateEntry, fold: bool) {
    if !entry.is_included() {
        tracing::debug!(path, version = %entry.version, install = %entry.install, "candidate excluded");
    } else if !fold {
        tracing::debug!(path, version = %entry.version, "profile candidate not folded");
    } else {
        tracing::debug!(path, version = %entry.version, "candidate included");
        candidates.push(entry.version);
    }
}

fn open_required<'s, S>(store: &'s S, path: &str) -> Result<Box<dyn StoreNode + 's>, DetectionError>
where
    S: ConfigStore + ?Sized,
{
    store
        .open_node(path)?
        .ok_or_else(|| DetectionError::StoreUnavailable {
            path: path.to_string(),
            reason: "node not found".to_string(),
        })
}
