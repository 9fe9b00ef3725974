//! Detection implementation submodule.
//!
//! This module contains the building blocks of framework detection:
//!
//! - `version`: four-component version parsing, `greater` and the fold
//! - `release`: fast-path probe of the `v4\Full` release indicator
//! - `scan`: legacy enumeration of per-version nodes

mod release;
mod scan;
mod version;

pub(crate) use release::probe_release;
pub(crate) use scan::{scan_candidates, KeyFilter, ScanConfig};
pub use version::{greater, highest_version, Version};
