//! Framework detection functions.

use crate::detection::{highest_version, probe_release, scan_candidates, KeyFilter, ScanConfig};
use crate::store::{join_path, ConfigStore};
use crate::{DetectOptions, DetectionError, DetectionSource, FrameworkStatus, InstalledFramework};

/// Node holding the 4.5+ release indicator, relative to the NDP root.
const RELEASE_NODE: &str = r"v4\Full";

/// Detect the highest installed framework version with default options.
///
/// # Detection Process
///
/// 1. Read the `Release` indicator under `NDP\v4\Full` and map it to a
///    4.5+ release. If it matches, return that version without scanning.
/// 2. Otherwise enumerate the `v*` children of `NDP`, collect their
///    `Version` values under the inclusion rule, and return the greatest.
/// 3. If nothing was collected, return `NotInstalled`.
///
/// # Errors
///
/// - `StoreUnavailable` if the NDP root is missing or any node cannot be
///   opened or read. A missing `v4\Full` node is not an error.
/// - `MalformedVersion` if a scanned version is not four integers.
///
/// # Example
///
/// ```rust
/// use netfx_discovery::{detect_highest_version, MemoryStore};
///
/// let store = MemoryStore::new()
///     .with_value(r"SOFTWARE\Microsoft\NET Framework Setup\NDP\v4\Full", "Release", 379893u32);
///
/// let status = detect_highest_version(&store).unwrap();
/// assert_eq!(status.version(), Some("4.5.2"));
/// ```
pub fn detect_highest_version<S>(store: &S) -> Result<FrameworkStatus, DetectionError>
where
    S: ConfigStore + ?Sized,
{
    detect_with_options(store, &DetectOptions::default())
}

/// Detect the highest installed framework version with custom options.
///
/// See [`detect_highest_version`] for the process and errors. The key
/// filter is compiled before any store access, so `InvalidFilter` is
/// reported without touching the store.
pub fn detect_with_options<S>(
    store: &S,
    options: &DetectOptions,
) -> Result<FrameworkStatus, DetectionError>
where
    S: ConfigStore + ?Sized,
{
    let filter = KeyFilter::new(&options.key_filter)?;

    if !options.skip_release_probe {
        let release_path = join_path(&options.ndp_root, RELEASE_NODE);
        if let Some((release_key, release)) = probe_release(store, &release_path)? {
            return Ok(FrameworkStatus::Installed(InstalledFramework {
                version: release.version().to_string(),
                source: DetectionSource::ReleaseKey { release_key },
                release: Some(release),
            }));
        }
    }

    tracing::debug!(root = %options.ndp_root, "falling back to legacy scan");
    let candidates = scan_candidates(
        store,
        &ScanConfig {
            root: &options.ndp_root,
            filter: &filter,
            include_profiles: options.include_profiles,
        },
    )?;
    let count = candidates.len();

    let status = match highest_version(candidates)? {
        Some(version) => FrameworkStatus::Installed(InstalledFramework {
            version,
            source: DetectionSource::LegacyScan { candidates: count },
            release: None,
        }),
        None => FrameworkStatus::NotInstalled,
    };

    tracing::debug!(version = ?status.version(), "detection finished");
    Ok(status)
}

/// Detect the highest framework version installed on this machine.
///
/// Reads `HKEY_LOCAL_MACHINE` with options from
/// [`DetectOptions::from_env`].
///
/// # Example
///
/// ```rust,no_run
/// use netfx_discovery::detect;
///
/// match detect() {
///     Ok(status) => println!("{:?}", status.version()),
///     Err(e) => eprintln!("detection failed: {e}"),
/// }
/// ```
#[cfg(windows)]
pub fn detect() -> Result<FrameworkStatus, DetectionError> {
    let store = crate::store::RegistryStore::local_machine();
    detect_with_options(&store, &DetectOptions::from_env())
}
