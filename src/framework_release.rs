//! .NET Framework 4.5+ releases identified by the `Release` indicator.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A .NET Framework release in the 4.5+ family.
///
/// Releases of this family share the `NDP\v4\Full` node and are told apart
/// by its `Release` DWORD. Each variant carries the lowest indicator value
/// at which that release is considered installed.
///
/// Variants are declared newest first, so [`FrameworkRelease::all`] yields
/// the threshold table in descending order.
///
/// This enum is marked `#[non_exhaustive]`: newer releases will be added as
/// they ship.
///
/// # Example
///
/// ```rust
/// use netfx_discovery::FrameworkRelease;
///
/// for release in FrameworkRelease::all() {
///     println!("{} >= {}", release.version(), release.min_release_key());
/// }
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[non_exhaustive]
pub enum FrameworkRelease {
    /// .NET Framework 4.8.1
    Net481,
    /// .NET Framework 4.8
    Net48,
    /// .NET Framework 4.7.2
    Net472,
    /// .NET Framework 4.7.1
    Net471,
    /// .NET Framework 4.7
    Net47,
    /// .NET Framework 4.6.2
    Net462,
    /// .NET Framework 4.6.1
    Net461,
    /// .NET Framework 4.6
    Net46,
    /// .NET Framework 4.5.2
    Net452,
    /// .NET Framework 4.5.1
    Net451,
    /// .NET Framework 4.5
    Net45,
}

impl FrameworkRelease {
    /// Lowest `Release` value that identifies this release.
    ///
    /// # Example
    ///
    /// ```rust
    /// use netfx_discovery::FrameworkRelease;
    ///
    /// assert_eq!(FrameworkRelease::Net45.min_release_key(), 378389);
    /// ```
    pub fn min_release_key(&self) -> u64 {
        match self {
            Self::Net481 => 533320,
            Self::Net48 => 528040,
            Self::Net472 => 461808,
            Self::Net471 => 461308,
            Self::Net47 => 460798,
            Self::Net462 => 394802,
            Self::Net461 => 394254,
            Self::Net46 => 393295,
            Self::Net452 => 379893,
            Self::Net451 => 379675,
            Self::Net45 => 378389,
        }
    }

    /// The version string reported for this release.
    ///
    /// # Example
    ///
    /// ```rust
    /// use netfx_discovery::FrameworkRelease;
    ///
    /// assert_eq!(FrameworkRelease::Net452.version(), "4.5.2");
    /// assert_eq!(FrameworkRelease::Net45.version(), "4.5");
    /// ```
    pub fn version(&self) -> &'static str {
        match self {
            Self::Net481 => "4.8.1",
            Self::Net48 => "4.8",
            Self::Net472 => "4.7.2",
            Self::Net471 => "4.7.1",
            Self::Net47 => "4.7",
            Self::Net462 => "4.6.2",
            Self::Net461 => "4.6.1",
            Self::Net46 => "4.6",
            Self::Net452 => "4.5.2",
            Self::Net451 => "4.5.1",
            Self::Net45 => "4.5",
        }
    }

    /// Iterator over all known releases, newest first.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Map a `Release` indicator to the newest release it satisfies.
    ///
    /// Returns `None` when the indicator is below every known threshold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use netfx_discovery::FrameworkRelease;
    ///
    /// assert_eq!(FrameworkRelease::from_release_key(379675), Some(FrameworkRelease::Net451));
    /// assert_eq!(FrameworkRelease::from_release_key(100), None);
    /// ```
    pub fn from_release_key(release_key: u64) -> Option<Self> {
        Self::all().find(|release| release_key >= release.min_release_key())
    }
}
