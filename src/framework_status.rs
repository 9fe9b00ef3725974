//! Detection results and errors.

use crate::store::StoreError;
use crate::FrameworkRelease;
use thiserror::Error;

/// Which detection path produced a result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DetectionSource {
    /// Found by the `v4\Full` `Release` indicator.
    ReleaseKey {
        /// The raw indicator value that was read.
        release_key: u64,
    },

    /// Found by scanning legacy version nodes.
    LegacyScan {
        /// Number of candidates folded to reach the result.
        candidates: usize,
    },
}

/// An installed framework version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFramework {
    /// Highest version found, as reported by the store.
    ///
    /// Versions from the release indicator are short forms such as `"4.5.2"`.
    /// Versions from the legacy scan are the raw `Version` values.
    pub version: String,

    /// How the version was found.
    pub source: DetectionSource,

    /// The 4.5+ release, when found by the release indicator.
    pub release: Option<FrameworkRelease>,
}

/// Errors that abort a detection call.
///
/// No partial result accompanies an error. The caller may retry the whole
/// detection.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error types
/// in future versions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DetectionError {
    /// A required store node is missing or could not be read.
    #[error("configuration store unavailable at {path}: {reason}")]
    StoreUnavailable {
        /// Path of the node that failed.
        path: String,
        /// What went wrong.
        reason: String,
    },

    /// A version string did not have exactly four integer components.
    #[error("malformed version '{version}': expected four dot-separated integers")]
    MalformedVersion {
        /// The offending string.
        version: String,
    },

    /// The configured legacy key filter could not be compiled.
    #[error("invalid key filter '{pattern}': {reason}")]
    InvalidFilter {
        /// The wildcard pattern as configured.
        pattern: String,
        /// Compiler error text.
        reason: String,
    },
}

impl DetectionError {
    /// Human-readable description of the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use netfx_discovery::DetectionError;
    ///
    /// let error = DetectionError::MalformedVersion { version: "1.2".to_string() };
    /// assert_eq!(error.description(), "Malformed version string");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::StoreUnavailable { .. } => "Configuration store unavailable",
            Self::MalformedVersion { .. } => "Malformed version string",
            Self::InvalidFilter { .. } => "Invalid key filter",
        }
    }
}

impl From<StoreError> for DetectionError {
    fn from(err: StoreError) -> Self {
        Self::StoreUnavailable {
            path: err.path().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result of a detection call.
///
/// # Example
///
/// ```rust
/// use netfx_discovery::FrameworkStatus;
///
/// fn report(status: &FrameworkStatus) {
///     match status.version() {
///         Some(version) => println!(".NET Framework {version}"),
///         None => println!(".NET Framework not installed"),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameworkStatus {
    /// A framework version was found.
    Installed(InstalledFramework),

    /// No matching installation was found.
    NotInstalled,
}

impl FrameworkStatus {
    /// Check if any framework version was found.
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed(_))
    }

    /// The highest installed version, if any.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Installed(found) => Some(&found.version),
            Self::NotInstalled => None,
        }
    }

    /// The detection source, if a version was found.
    pub fn source(&self) -> Option<&DetectionSource> {
        match self {
            Self::Installed(found) => Some(&found.source),
            Self::NotInstalled => None,
        }
    }
}
