// Canonical form: a dot-delimited token sequence where digit runs,
// letter runs, and single punctuation characters are all dot-isolated,
// and numeric tokens carry no redundant leading zeros.
//
// The passes run whole-string, in a fixed order. The order matters:
// later passes clean up the extra dots the boundary passes introduce,
// and the zero passes rely on dots already being in place.

use tracing::trace;

fn is_dash_class(c: char) -> bool {
    matches!(c, '-' | '_' | '+')
}

// "digit class" for the boundary passes: a digit or an existing dot
fn is_digit_class(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Pass 1: each run of `-`, `_`, `+` becomes a single `.`
pub(crate) fn replace_dash_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if is_dash_class(c) {
            if !in_run {
                out.push('.');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn insert_dot_between(s: &str, split_here: impl Fn(char, char) -> bool) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if let Some(p) = prev {
            if split_here(p, c) {
                out.push('.');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Pass 2: dot before a digit-class char that follows a non-digit-class char
pub(crate) fn split_before_digits(s: &str) -> String {
    insert_dot_between(s, |p, c| !is_digit_class(p) && is_digit_class(c))
}

/// Pass 3: dot after a digit-class char followed by a non-digit-class char
pub(crate) fn split_after_digits(s: &str) -> String {
    insert_dot_between(s, |p, c| is_digit_class(p) && !is_digit_class(c))
}

/// Pass 4: dot between an alphanumeric char and a following non-alphanumeric char
pub(crate) fn split_after_alnum(s: &str) -> String {
    insert_dot_between(s, |p, c| p.is_alphanumeric() && !c.is_alphanumeric())
}

/// Pass 5: dot between a non-alphanumeric char and a following alphanumeric char
pub(crate) fn split_before_alnum(s: &str) -> String {
    insert_dot_between(s, |p, c| !p.is_alphanumeric() && c.is_alphanumeric())
}

/// Pass 6: a run of zeros anchored at the string start or right after a
/// dot collapses to a single `0`
pub(crate) fn collapse_zero_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let mut at_anchor = true;
    while let Some(c) = chars.next() {
        if at_anchor && c == '0' {
            out.push('0');
            while chars.peek() == Some(&'0') {
                chars.next();
            }
            at_anchor = false;
        } else {
            out.push(c);
            at_anchor = c == '.';
        }
    }
    out
}

/// Pass 7: an anchored zero followed by another digit is dropped; a
/// lone `0` stays
pub(crate) fn strip_leading_zeros(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut at_anchor = true;
    for (i, &c) in chars.iter().enumerate() {
        if at_anchor && c == '0' && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()) {
            continue;
        }
        out.push(c);
        at_anchor = c == '.';
    }
    out
}

/// Pass 8: runs of dots collapse to a single dot
pub(crate) fn collapse_dot_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_dot = false;
    for c in s.chars() {
        if c == '.' {
            if !prev_dot {
                out.push(c);
            }
            prev_dot = true;
        } else {
            out.push(c);
            prev_dot = false;
        }
    }
    out
}

/// Normalize a raw version fragment into canonical dot-delimited form.
pub fn canonicalize(version: &str) -> String {
    let canon = replace_dash_runs(version);
    let canon = split_before_digits(&canon);
    let canon = split_after_digits(&canon);
    let canon = split_after_alnum(&canon);
    let canon = split_before_alnum(&canon);
    let canon = collapse_zero_runs(&canon);
    let canon = strip_leading_zeros(&canon);
    let canon = collapse_dot_runs(&canon);
    trace!("canonicalize {version:?} -> {canon:?}");
    canon
}

/// Leading numeric component of a version, or 0 when it is missing,
/// zero, negative, or unparseable.
pub fn major(version: &str) -> u32 {
    let canon = canonicalize(version);
    let first = canon.splitn(2, '.').next().unwrap_or("");
    match first.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dash_runs() {
        assert_eq!(replace_dash_runs("1-2_3+4"), "1.2.3.4");
        assert_eq!(replace_dash_runs("1--__++2"), "1.2");
        assert_eq!(replace_dash_runs("5.6"), "5.6");
    }

    #[test]
    fn digit_boundaries() {
        assert_eq!(split_before_digits("a1"), "a.1");
        assert_eq!(split_after_digits("1a"), "1.a");
        assert_eq!(split_after_digits("1.0alpha"), "1.0.alpha");
    }

    #[test]
    fn alnum_boundaries() {
        assert_eq!(split_after_alnum("1|2"), "1.|2");
        assert_eq!(split_before_alnum("1|2"), "1|.2");
    }

    #[test]
    fn zero_runs() {
        assert_eq!(collapse_zero_runs("000"), "0");
        assert_eq!(collapse_zero_runs("0001.02"), "01.02");
        assert_eq!(collapse_zero_runs("10.00"), "10.0");
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(strip_leading_zeros("07"), "7");
        assert_eq!(strip_leading_zeros("0"), "0");
        assert_eq!(strip_leading_zeros("1.0"), "1.0");
        assert_eq!(strip_leading_zeros("01.02"), "1.2");
    }

    #[test]
    fn dot_runs() {
        assert_eq!(collapse_dot_runs("1...2"), "1.2");
        assert_eq!(collapse_dot_runs(".1."), ".1.");
    }

    #[test]
    fn canonical_form() {
        assert_eq!(canonicalize("1.0alpha"), "1.0.alpha");
        assert_eq!(canonicalize("1...2"), "1.2");
        assert_eq!(canonicalize("01.02"), "1.2");
        assert_eq!(canonicalize("0001.02"), "1.2");
        assert_eq!(canonicalize("1|2/3#4"), "1.|.2./.3.#.4");
        assert_eq!(canonicalize("1.0-beta2"), "1.0.beta.2");
        assert_eq!(canonicalize("4.2.1"), "4.2.1");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "1.0alpha",
            "1...2",
            "01.02",
            "1|2/3#4",
            "1.0-beta2",
            "10.15.7",
            "0",
            "",
            ".",
            "7.0.4",
        ];
        for s in samples {
            let once = canonicalize(s);
            assert_eq!(canonicalize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn major_component() {
        assert_eq!(major("1.0.0"), 1);
        assert_eq!(major("invalid"), 0);
        assert_eq!(major("-1.2.3"), 0);
        assert_eq!(major("5.2"), 5);
        assert_eq!(major("0.9"), 0);
        assert_eq!(major(""), 0);
        assert_eq!(major("71.0.3578.99"), 71);
    }
}
