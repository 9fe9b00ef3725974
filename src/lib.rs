//! # netfx-discovery
//!
//! Highest installed .NET Framework version detection.
//!
//! This crate reads the machine-wide configuration store (the Windows
//! registry under `SOFTWARE\Microsoft\NET Framework Setup\NDP`) and reports
//! the highest installed framework version. Detection runs in two steps:
//!
//! 1. A fast probe of the `v4\Full` `Release` indicator for 4.5 and later.
//! 2. If that finds nothing, a scan of the legacy `v*` version nodes whose
//!    `Version` values are compared as four-component numbers.
//!
//! The store is reached through the [`ConfigStore`] trait, so detection
//! runs the same against the live registry ([`RegistryStore`], Windows only)
//! or an in-memory [`MemoryStore`].
//!
//! ## Example
//!
//! ```rust
//! use netfx_discovery::{detect_highest_version, FrameworkStatus, MemoryStore};
//!
//! let store = MemoryStore::new().with_value(
//!     r"SOFTWARE\Microsoft\NET Framework Setup\NDP\v2.0.50727",
//!     "Version",
//!     "2.0.50727.4927",
//! );
//!
//! match detect_highest_version(&store).unwrap() {
//!     FrameworkStatus::Installed(found) => println!("highest: {}", found.version),
//!     FrameworkStatus::NotInstalled => println!("not installed"),
//!     _ => {}
//! }
//! ```

mod detect;
mod detection;
mod framework_release;
mod framework_status;
mod options;
pub mod store;
mod text;

#[cfg(windows)]
pub use detect::detect;
pub use detect::{detect_highest_version, detect_with_options};
pub use detection::{greater, highest_version, Version};
pub use framework_release::FrameworkRelease;
pub use framework_status::{DetectionError, DetectionSource, FrameworkStatus, InstalledFramework};
pub use options::{DetectOptions, DEFAULT_KEY_FILTER, DEFAULT_NDP_ROOT};
#[cfg(windows)]
pub use store::RegistryStore;
pub use store::{ConfigStore, MemoryNode, MemoryStore, StoreError, StoreNode, StoreValue};
pub use text::{parse_bool, wildcard_pattern};
