//! Version canonicalization and ordering for user-agent inspection.
//!
//! Raw version fragments pulled out of identification strings (browser
//! builds, OS versions, short-code expansions) are heterogeneous and
//! human-authored. This crate normalizes them into a canonical
//! dot-delimited form and orders them with two deliberately distinct
//! strategies, so that "is version X at least Y" rule checks evaluate
//! the same way everywhere:
//!
//! - [`compare_canonicalized`] works over the canonical form and ranks
//!   pre-release tokens through a closed [`PriorityClass`] table
//!   (`dev < alpha < beta < rc < number < patch`).
//! - [`compare`] works over a bounded major/minor/patch[-tag]
//!   projection of the raw string ([`to_semver`]).
//!
//! Every function is total: malformed fragments degrade to zeros
//! instead of failing, and empty input stays empty.

use serde::{Deserialize, Serialize};

mod canonical;
mod compare;
mod sanitize;
mod semver;

pub use canonical::{canonicalize, major};
pub use compare::{compare, compare_canonicalized, PriorityClass};
pub use sanitize::sanitize;
pub use self::semver::{parse_semver, to_semver, to_semver_parts, Semver};

/// Borrowed version fragment ordered by the canonicalized strategy.
#[derive(Debug, Clone, Copy)]
pub struct VersionRef<'a> {
    v: &'a str,
}

impl<'a> VersionRef<'a> {
    pub fn new(v: &'a str) -> Self {
        Self { v }
    }

    pub fn as_str(&self) -> &str {
        self.v
    }
}

impl PartialEq for VersionRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            compare_canonicalized(self.v, other.v),
            std::cmp::Ordering::Equal
        )
    }
}

impl Eq for VersionRef<'_> {}

impl PartialOrd for VersionRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionRef<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare_canonicalized(self.v, other.v)
    }
}

impl std::fmt::Display for VersionRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.v)
    }
}

/// Owned version fragment ordered by the canonicalized strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionString(pub String);

impl VersionString {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the raw fragment is already a strict semver version.
    pub fn is_semver(&self) -> bool {
        ::semver::Version::parse(&self.0).is_ok()
    }

    pub fn major(&self) -> u32 {
        major(&self.0)
    }
}

impl PartialEq for VersionString {
    fn eq(&self, other: &VersionString) -> bool {
        VersionRef::new(&self.0).eq(&VersionRef::new(&other.0))
    }
}

impl Eq for VersionString {}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionString {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        VersionRef::new(&self.0).cmp(&VersionRef::new(&other.0))
    }
}

impl From<String> for VersionString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::ops::Deref for VersionString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wrapper_ordering() {
        let mut versions: Vec<VersionString> = ["1.0", "0.9", "1.0rc1", "1.0.1", "1.0beta"]
            .into_iter()
            .map(VersionString::from)
            .collect();
        versions.sort();
        let sorted: Vec<&str> = versions.iter().map(|v| v.as_str()).collect();
        assert_eq!(sorted, ["0.9", "1.0beta", "1.0rc1", "1.0", "1.0.1"]);
    }

    #[test]
    fn wrapper_dedup() {
        // canonically equal fragments dedup even when spelled apart
        let mut versions: Vec<VersionString> = ["1.0", "1.00", "1_0", "1.0.1"]
            .into_iter()
            .map(VersionString::from)
            .collect();
        versions.sort();
        versions.dedup();
        assert_eq!(versions.len(), 2);
    }

    #[test]
    fn semver_probe() {
        assert!(VersionString::from("1.2.3").is_semver());
        assert!(!VersionString::from("1.2").is_semver());
        assert!(!VersionString::from("7.0.4 build 2").is_semver());
    }

    #[test]
    fn ref_and_owned_agree() {
        let a = VersionRef::new("7.0.4");
        let b = VersionRef::new("7.0");
        assert!(a > b);
        assert!(VersionString::from("7.0.4") > VersionString::from("7.0"));
    }

    #[test]
    fn differs_from_version_compare_crate() {
        // the version-compare crate pads missing components, this
        // engine ranks the longer side by its remaining token class
        assert!(
            version_compare::Version::from("1").unwrap()
                == version_compare::Version::from("1.0").unwrap()
        );
        assert!(VersionRef::new("1") < VersionRef::new("1.0"));
    }
}
