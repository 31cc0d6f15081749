//! camelCase to kebab-case conversion for style property names.

use regex::Regex;
use std::sync::LazyLock;

use super::map::StyleMap;

static RE_ACRONYM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z])([A-Z])").unwrap());
static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static RE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());

/// Convert a property name to kebab-case.
///
/// Splits adjacent capitals, then lower-to-upper word boundaries, collapses
/// whitespace and underscore runs into a single hyphen and lowercases the
/// result. Running it on its own output is a no-op.
///
/// ```
/// use ratio_placeholder::style::kebab_case;
///
/// assert_eq!(kebab_case("paddingTop"), "padding-top");
/// assert_eq!(kebab_case("padding-top"), "padding-top");
/// ```
pub fn kebab_case(name: &str) -> String {
    let name = RE_ACRONYM.replace_all(name, "${1}-${2}");
    let name = RE_WORD.replace_all(&name, "${1}-${2}");
    let name = RE_SEPARATOR.replace_all(&name, "-");
    name.to_lowercase()
}

/// Fresh style map with every property name converted by [`kebab_case`].
///
/// Only needed for targets that take raw style strings; structured style
/// objects keep their camelCase names.
pub fn kebabify(style: &StyleMap) -> StyleMap {
    style
        .iter()
        .map(|(name, value)| (kebab_case(name), value.clone()))
        .collect()
}
