// Best-effort projection of a raw version fragment into a bounded
// major/minor/patch structure with an optional pre-release tag.
//
// The split happens on the raw string, not the canonical form: rule
// data declares constraints like "1.2.3.4" and expects the fourth
// segment to survive verbatim as a tag.

/// Bounded numeric projection of a version string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Semver {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
}

impl std::fmt::Display for Semver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{pre}")?;
        }
        Ok(())
    }
}

// leading-integer parse, atoi style: "3" -> 3, "3.4" -> 3, "-2" -> -2,
// "x3" -> None
fn leading_int(segment: &str) -> Option<i64> {
    let (neg, digits) = match segment.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, segment),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let n: i64 = digits[..end].parse().ok()?;
    Some(if neg { -n } else { n })
}

/// Project a raw version string into at most `parts` segments
/// (clamped to 1..=4). Returns `None` only for empty input.
///
/// The first segment that fails to parse as a non-negative integer
/// forces itself and every later numeric segment to 0; segments
/// already resolved are kept. With `parts` of 4 the fourth segment
/// becomes the pre-release tag, dots and all.
pub fn parse_semver(version: &str, parts: usize) -> Option<Semver> {
    if version.is_empty() {
        return None;
    }

    let parts = parts.clamp(1, 4);
    let mut segments = version.splitn(parts, '.');

    let mut numbers = [0u64; 3];
    let mut failed = false;
    for slot in numbers.iter_mut().take(parts.min(3)) {
        let Some(segment) = segments.next() else {
            break;
        };
        if failed {
            continue;
        }
        match leading_int(segment) {
            Some(n) if n >= 0 => *slot = n as u64,
            _ => failed = true,
        }
    }

    let pre = if parts >= 4 {
        segments.next().map(str::to_string)
    } else {
        None
    };

    Some(Semver {
        major: numbers[0],
        minor: numbers[1],
        patch: numbers[2],
        pre,
    })
}

/// `"x.y" -> "x.y.0"` style projection. Empty input stays empty, a
/// marker for "no version supplied" as opposed to "unparseable".
pub fn to_semver(version: &str) -> String {
    to_semver_parts(version, 3)
}

/// Like [`to_semver`], with an explicit segment count. Four segments
/// render the fourth as a `-tag` suffix.
pub fn to_semver_parts(version: &str, parts: usize) -> String {
    match parse_semver(version, parts) {
        Some(semver) => semver.to_string(),
        None => String::new(),
    }
}

/// Four-segment projection with a guaranteed pre-release slot: when no
/// tag was extracted a synthetic `0` is supplied, so every non-empty
/// projection is comparable on all four fields.
pub(crate) fn parse_semver_padded(version: &str) -> Semver {
    let mut semver = parse_semver(version, 4).unwrap_or_default();
    if semver.pre.is_none() {
        semver.pre = Some("0".to_string());
    }
    semver
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn projection() {
        assert_eq!(to_semver("15"), "15.0.0");
        assert_eq!(to_semver("1.2"), "1.2.0");
        assert_eq!(to_semver("1.2.3"), "1.2.3");
        assert_eq!(to_semver("1.2.3.4"), "1.2.3");
        assert_eq!(to_semver(""), "");
        assert_eq!(to_semver("invalid"), "0.0.0");
    }

    #[test]
    fn pre_release_slot() {
        assert_eq!(to_semver_parts("1.2.3.4", 4), "1.2.3-4");
        assert_eq!(to_semver_parts("1.2.3.4.5", 4), "1.2.3-4.5");
        assert_eq!(to_semver_parts("1.2.3", 4), "1.2.3");
        assert_eq!(to_semver_parts("", 4), "");
    }

    #[test]
    fn failed_segments_collapse() {
        assert_eq!(to_semver("1.-2.3.4"), "1.0.0");
        assert_eq!(to_semver("1.x.3"), "1.0.0");
        assert_eq!(to_semver("-1.2.3"), "0.0.0");
        // the tag still survives a numeric collapse
        assert_eq!(to_semver_parts("1.-2.3.4", 4), "1.0.0-4");
    }

    #[test]
    fn leading_int_segments() {
        // a segment parses by numeric prefix, trailing text ignored
        assert_eq!(to_semver("3.4b"), "3.4.0");
        assert_eq!(to_semver("1.2.3rc1"), "1.2.3");
    }

    #[test]
    fn padded() {
        assert_eq!(parse_semver_padded("1.0.0").to_string(), "1.0.0-0");
        assert_eq!(parse_semver_padded("1.0.0.4").to_string(), "1.0.0-4");
        assert_eq!(parse_semver_padded("").to_string(), "0.0.0-0");
    }

    #[test]
    fn parts_clamped() {
        assert_eq!(to_semver_parts("1.2.3.4", 0), "1.0.0");
        assert_eq!(to_semver_parts("1.2.3.4", 9), "1.2.3-4");
    }
}
