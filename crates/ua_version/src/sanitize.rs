use std::sync::LazyLock;

use regex::Regex;

// unresolved capture placeholders left behind by a rule template, e.g. "$2"
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\d").unwrap());

/// Clean a version fragment produced by rule-template substitution.
///
/// - drops every `$` + digit placeholder pair
/// - drops one trailing `.`
/// - turns `_` separators into `.`
/// - trims surrounding whitespace
pub fn sanitize(version: &str) -> String {
    if version.is_empty() {
        return String::new();
    }

    let version = PLACEHOLDER.replace_all(version, "");
    let version = version.strip_suffix('.').unwrap_or(&version);
    version.replace('_', ".").trim().to_string()
}
