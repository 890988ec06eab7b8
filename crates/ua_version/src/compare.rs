use std::cmp::Ordering;

use tracing::trace;

use crate::canonical::canonicalize;
use crate::semver::parse_semver_padded;

/// Rank of a canonical token for cross-class comparison.
///
/// Declaration order is the comparison order: anything unrecognized
/// sorts below every named class, a bare number sits between `rc` and
/// `patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityClass {
    Other,
    Dev,
    Alpha,
    Beta,
    Rc,
    Numeric,
    Patch,
}

impl PriorityClass {
    /// Classify a canonical token by its leading characters,
    /// ASCII case-insensitive.
    pub fn of(token: &str) -> PriorityClass {
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            return PriorityClass::Numeric;
        }
        let head: String = token.chars().take(3).map(|c| c.to_ascii_lowercase()).collect();
        if head.starts_with("dev") {
            PriorityClass::Dev
        } else if head.starts_with("rc") {
            PriorityClass::Rc
        } else if head.starts_with('a') {
            PriorityClass::Alpha
        } else if head.starts_with('b') {
            PriorityClass::Beta
        } else if head.starts_with('p') {
            PriorityClass::Patch
        } else {
            PriorityClass::Other
        }
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

// digit-string magnitude compare; canonical tokens carry no redundant
// leading zeros, but strip them anyway so the function stands alone
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// a missing token loses to numeric/patch remainders and wins over
// pre-release remainders: "1" < "1.0" and "1" < "1patch", but "1beta" < "1"
fn exhausted_cmp(remaining: &str) -> Ordering {
    if PriorityClass::of(remaining) >= PriorityClass::Numeric {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Compare two raw version strings through their canonical forms.
///
/// Tokens are compared pairwise: numeric pairs by magnitude, mixed
/// pairs by [`PriorityClass`] rank. A fully consumed side defers to
/// the class of the other side's next token.
pub fn compare_canonicalized(a: &str, b: &str) -> Ordering {
    let canon_a = canonicalize(a);
    let canon_b = canonicalize(b);

    let mut tokens_a = canon_a.split('.').filter(|t| !t.is_empty());
    let mut tokens_b = canon_b.split('.').filter(|t| !t.is_empty());

    let ord = loop {
        match (tokens_a.next(), tokens_b.next()) {
            (None, None) => break Ordering::Equal,
            (None, Some(token)) => break exhausted_cmp(token),
            (Some(token), None) => break exhausted_cmp(token).reverse(),
            (Some(ta), Some(tb)) => {
                let ord = if is_numeric(ta) && is_numeric(tb) {
                    numeric_cmp(ta, tb)
                } else {
                    PriorityClass::of(ta).cmp(&PriorityClass::of(tb))
                };
                if ord != Ordering::Equal {
                    break ord;
                }
            }
        }
    };

    trace!("compare_canonicalized {a:?} {b:?} -> {ord:?}");
    ord
}

/// Compare two raw version strings by their padded semver projection:
/// major, minor, patch numerically, then the pre-release tag as an
/// opaque string. A missing tag compares as the synthetic `"0"`.
pub fn compare(a: &str, b: &str) -> Ordering {
    let sa = parse_semver_padded(a);
    let sb = parse_semver_padded(b);

    sa.major
        .cmp(&sb.major)
        .then_with(|| sa.minor.cmp(&sb.minor))
        .then_with(|| sa.patch.cmp(&sb.patch))
        .then_with(|| sa.pre.cmp(&sb.pre))
}
