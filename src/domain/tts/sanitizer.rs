use regex::Regex;
use std::sync::LazyLock;

/// Symbols spoken as words, applied in order
const REPLACEMENTS: &[(&str, &str)] = &[
    ("&", " and "),
    ("+", " plus "),
    ("%", " percent "),
    ("<", " less than "),
    ("=", " equals "),
    ("@", " at "),
];

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?\-]").expect("valid disallowed-character pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Make text safe and speakable: spell out symbols, drop any other
/// punctuation except `. , ! ? -`, and normalize whitespace.
pub fn clean(text: &str) -> String {
    let mut spoken = text.to_string();
    for (symbol, words) in REPLACEMENTS {
        if spoken.contains(symbol) {
            spoken = spoken.replace(symbol, words);
        }
    }

    let stripped = DISALLOWED.replace_all(&spoken, "");
    let normalized = WHITESPACE.replace_all(&stripped, " ");

    normalized.trim().to_string()
}
