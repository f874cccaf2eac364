use std::sync::LazyLock;

use regex_lite::Regex;

// `<TYPE, value>` with optional brackets; the first comma separates the two halves
static PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<?(?P<kind>[^,]*),(?P<value>.*?)>?$").expect("token pair pattern is valid")
});

/// Split a trimmed entry line into its raw type tag and value, both trimmed.
pub fn split_pair(line: &str) -> Option<(&str, &str)> {
    let caps = PAIR.captures(line)?;
    let kind = caps.name("kind")?.as_str().trim();
    let value = caps.name("value")?.as_str().trim();
    Some((kind, value))
}
