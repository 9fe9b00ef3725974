//! Four-component version parsing and comparison.

use crate::DetectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `major.minor.build.revision` version.
///
/// Ordering compares components left to right, most significant first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version {
    /// Major component.
    pub major: u32,
    /// Minor component.
    pub minor: u32,
    /// Build component.
    pub build: u32,
    /// Revision component.
    pub revision: u32,
}

impl Version {
    /// Create a version from its four components.
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl FromStr for Version {
    type Err = DetectionError;

    /// Parse exactly four dot-separated non-negative integers.
    ///
    /// Any other shape is `MalformedVersion`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DetectionError::MalformedVersion {
            version: s.to_string(),
        };

        let parts = s
            .split('.')
            .map(str::parse::<u32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        match parts.as_slice() {
            &[major, minor, build, revision] => Ok(Self::new(major, minor, build, revision)),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Return the greater of two four-component version strings.
///
/// The first differing component decides. When both versions are equal the
/// left operand is returned, so a running maximum is kept against an equal
/// newcomer.
///
/// # Errors
///
/// `MalformedVersion` if either string is not exactly four dot-separated
/// integers.
///
/// # Example
///
/// ```rust
/// use netfx_discovery::greater;
///
/// assert_eq!(greater("2.0.0.0", "1.9.9.9").unwrap(), "2.0.0.0");
/// assert!(greater("1.2.3", "1.2.3.4").is_err());
/// ```
pub fn greater<'a>(a: &'a str, b: &'a str) -> Result<&'a str, DetectionError> {
    let left: Version = a.parse()?;
    let right: Version = b.parse()?;

    Ok(if right > left { b } else { a })
}

/// Fold version strings down to the highest one.
///
/// The first version is adopted as-is. Every later version is compared with
/// [`greater`], so from the second candidate on all versions must have four
/// components. Returns `None` for an empty input.
///
/// # Errors
///
/// `MalformedVersion` from the first comparison that sees a malformed string.
pub fn highest_version<I>(versions: I) -> Result<Option<String>, DetectionError>
where
    I: IntoIterator<Item = String>,
{
    let mut highest: Option<String> = None;

    for candidate in versions {
        highest = Some(match highest {
            None => candidate,
            Some(current) => greater(&current, &candidate)?.to_string(),
        });
    }

    Ok(highest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_version() {
        let v: Version = "2.0.50727.4927".parse().unwrap();
        assert_eq!(v, Version::new(2, 0, 50727, 4927));
        assert_eq!(v.to_string(), "2.0.50727.4927");
    }

    #[test]
    fn test_parse_leading_zeros() {
        let v: Version = "01.002.0003.4".parse().unwrap();
        assert_eq!(v, Version::new(1, 2, 3, 4));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        for input in ["", "1", "1.2", "4.0.30319", "1.2.3.4.5"] {
            let result = input.parse::<Version>();
            assert_eq!(
                result,
                Err(DetectionError::MalformedVersion {
                    version: input.to_string()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_bad_components() {
        for input in ["1.2.3.x", "1..3.4", "1.2.3.-4", " 1.2.3.4", "1.2.3.99999999999"] {
            assert!(input.parse::<Version>().is_err(), "input {input:?}");
        }
    }

    #[test]
    fn test_greater_returns_left_on_tie() {
        assert_eq!(greater("3.5.30729.4926", "3.5.30729.4926").unwrap(), "3.5.30729.4926");

        // Numerically equal but textually different: the left string wins.
        let left = "1.02.3.4";
        let right = "1.2.3.4";
        assert!(std::ptr::eq(greater(left, right).unwrap(), left));
    }

    #[test]
    fn test_greater_last_component() {
        assert_eq!(greater("1.2.3.4", "1.2.3.5").unwrap(), "1.2.3.5");
        assert_eq!(greater("1.2.3.5", "1.2.3.4").unwrap(), "1.2.3.5");
    }

    #[test]
    fn test_greater_most_significant_dominates() {
        assert_eq!(greater("2.0.0.0", "1.9.9.9").unwrap(), "2.0.0.0");
        assert_eq!(greater("1.9.9.9", "2.0.0.0").unwrap(), "2.0.0.0");
        assert_eq!(greater("3.0.30729.4926", "2.0.50727.4927").unwrap(), "3.0.30729.4926");
    }

    #[test]
    fn test_greater_compares_numerically() {
        assert_eq!(greater("1.10.0.0", "1.9.0.0").unwrap(), "1.10.0.0");
    }

    #[test]
    fn test_greater_malformed_left() {
        let result = greater("1.2.3", "1.2.3.4");
        assert_eq!(
            result,
            Err(DetectionError::MalformedVersion {
                version: "1.2.3".to_string()
            })
        );
    }

    #[test]
    fn test_greater_malformed_right() {
        let result = greater("1.2.3.4", "one.2.3.4");
        assert!(matches!(result, Err(DetectionError::MalformedVersion { version }) if version == "one.2.3.4"));
    }

    #[test]
    fn test_highest_version_empty() {
        assert_eq!(highest_version(Vec::new()).unwrap(), None);
    }

    #[test]
    fn test_highest_version_single_is_adopted() {
        // Adoption does not compare, so a short form is accepted on its own.
        let result = highest_version(versions(&["2.0.50727"])).unwrap();
        assert_eq!(result.as_deref(), Some("2.0.50727"));
    }

    #[test]
    fn test_highest_version_finds_maximum() {
        let result = highest_version(versions(&[
            "2.0.50727.4927",
            "3.5.30729.4926",
            "3.0.30729.4926",
        ]))
        .unwrap();
        assert_eq!(result.as_deref(), Some("3.5.30729.4926"));
    }

    #[test]
    fn test_highest_version_malformed_is_fatal() {
        let result = highest_version(versions(&["2.0.50727.4927", "4.0.30319"]));
        assert!(matches!(result, Err(DetectionError::MalformedVersion { .. })));
    }
}
