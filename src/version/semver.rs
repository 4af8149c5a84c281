//! Lenient dotted-triple version parsing and ordering
//!
//! Release directories on the python.org mirror are named `MAJOR.MINOR.PATCH`.
//! Parsing never fails: a component that cannot be scanned is left at zero,
//! together with every component after it.

use std::cmp::Ordering;
use std::fmt;

use semver::Version;

/// A `major.minor.patch` triple ordered lexicographically by component
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion(Version);

impl ReleaseVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Key of the release line this version belongs to, e.g. `"3.9"`
    pub fn release_line(&self) -> String {
        format!("{}.{}", self.0.major, self.0.minor)
    }

    /// Strict ordering on (major, minor, patch)
    pub fn less_than(&self, other: &ReleaseVersion) -> bool {
        self < other
    }
}

impl Default for ReleaseVersion {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0.major, self.0.minor, self.0.patch)
    }
}

/// Parse a version string the way `sscanf("%d.%d.%d")` would.
///
/// Examples:
/// - "3.9.1" -> (3, 9, 1)
/// - "3.10" -> (3, 10, 0)
/// - "3.x.1" -> (3, 0, 0)
/// - "latest" -> (0, 0, 0)
pub fn parse_version(version: &str) -> ReleaseVersion {
    let mut components = [0u64; 3];
    let mut rest = version;

    for (index, slot) in components.iter_mut().enumerate() {
        if index > 0 {
            match rest.strip_prefix('.') {
                Some(stripped) => rest = stripped,
                None => break,
            }
        }
        match scan_integer(rest) {
            Some((value, remaining)) => {
                *slot = value;
                rest = remaining;
            }
            None => break,
        }
    }

    let [major, minor, patch] = components;
    ReleaseVersion::new(major, minor, patch)
}

/// Scan one non-negative integer token, skipping leading whitespace.
/// Returns the value and the unconsumed input, or None on no digits or a
/// value outside the signed 64-bit range.
fn scan_integer(input: &str) -> Option<(u64, &str)> {
    let trimmed = input.trim_start_matches(|c: char| c.is_ascii_whitespace() && c != '\n');
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    if digits_end == 0 {
        return None;
    }

    let value = unsigned[..digits_end].parse::<i64>().ok()?;
    Some((u64::try_from(value).ok()?, &unsigned[digits_end..]))
}

/// Compare two version strings after lenient parsing
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    parse_version(a).cmp(&parse_version(b))
}

/// Sort versions in ascending order
pub fn sort_versions(versions: &mut [ReleaseVersion]) {
    versions.sort();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3.9.1", (3, 9, 1))]
    #[case("3.10.0", (3, 10, 0))]
    #[case("2.7.18", (2, 7, 18))]
    #[case("3.10", (3, 10, 0))] // missing patch
    #[case("3", (3, 0, 0))] // missing minor and patch
    #[case("3.x.1", (3, 0, 0))] // scanning stops at the first bad component
    #[case("3.9.1rc1", (3, 9, 1))] // trailing text ignored
    #[case(" 3. 9. 1", (3, 9, 1))] // whitespace before integers is skipped
    #[case("+3.9.1", (3, 9, 1))]
    #[case("-3.9.1", (0, 0, 0))]
    #[case("latest", (0, 0, 0))]
    #[case("", (0, 0, 0))]
    #[case("3.99999999999999999999.1", (3, 0, 0))] // overflow
    #[case("3.9223372036854775807.1", (3, 9223372036854775807, 1))] // i64::MAX
    #[case("3.9223372036854775808.1", (3, 0, 0))] // past i64::MAX
    fn test_parse_version(#[case] input: &str, #[case] expected: (u64, u64, u64)) {
        let version = parse_version(input);
        assert_eq!(
            (version.major(), version.minor(), version.patch()),
            expected
        );
    }

    #[rstest]
    #[case("3.9.1", "3.9.1")]
    #[case("3.10", "3.10.0")]
    #[case("03.009.1", "3.9.1")] // no zero padding on render
    #[case("garbage", "0.0.0")]
    fn test_display(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_version(input).to_string(), expected);
    }

    #[test]
    fn release_line_uses_major_and_minor() {
        assert_eq!(parse_version("3.12.4").release_line(), "3.12");
    }

    #[rstest]
    #[case("3.9.0", "3.9.1", true)]
    #[case("3.9.1", "3.9.0", false)]
    #[case("3.9.9", "3.10.0", true)] // numeric, not lexical
    #[case("2.7.18", "3.0.0", true)]
    #[case("3.9.1", "3.9.1", false)]
    fn test_less_than(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(parse_version(a).less_than(&parse_version(b)), expected);
    }

    #[test]
    fn less_than_is_a_strict_total_order() {
        let versions: Vec<ReleaseVersion> = ["0.0.0", "2.7.18", "3.9.0", "3.9.1", "3.10.0", "3.10.0"]
            .iter()
            .map(|v| parse_version(v))
            .collect();

        for a in &versions {
            assert!(!a.less_than(a));
            for b in &versions {
                assert!(!(a.less_than(b) && b.less_than(a)));
                // exactly one of <, >, == holds
                let holds = [a.less_than(b), b.less_than(a), a == b];
                assert_eq!(holds.iter().filter(|h| **h).count(), 1);
                for c in &versions {
                    if a.less_than(b) && b.less_than(c) {
                        assert!(a.less_than(c));
                    }
                }
            }
        }
    }

    #[test]
    fn compare_versions_parses_both_sides() {
        assert_eq!(compare_versions("3.10.0", "3.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("3.9.1", "3.9.1"), Ordering::Equal);
        assert_eq!(compare_versions("bogus", "0.0.1"), Ordering::Less);
    }

    #[test]
    fn sort_versions_orders_ascending() {
        let mut versions = vec![
            ReleaseVersion::new(3, 10, 0),
            ReleaseVersion::new(2, 7, 18),
            ReleaseVersion::new(3, 9, 1),
        ];
        sort_versions(&mut versions);

        let rendered: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["2.7.18", "3.9.1", "3.10.0"]);
    }
}
