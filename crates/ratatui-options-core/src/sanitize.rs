use regex::Regex;
use std::sync::LazyLock;

// Allowed: ASCII word characters, space, and . ' ( ) / - ! ? &
static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_ .'()/\-!?&]+").expect("static pattern"));

/// Strip the first run of disallowed characters, then truncate to `max_length` chars.
///
/// Only one run is removed per call, so `"a#b#c"` becomes `"ab#c"`. Callers run this on every
/// keystroke, which keeps typed input clean; a paste with several disjoint runs needs more passes.
pub fn sanitize(input: &str, max_length: usize) -> String {
    let cleaned = DISALLOWED_RUN.replace(input, "");
    truncate_chars(&cleaned, max_length)
}

/// Whether every character of `input` is in the allowed class.
pub fn is_clean(input: &str) -> bool {
    !DISALLOWED_RUN.is_match(input)
}

pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => input[..byte_idx].to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_allowed_punctuation_and_truncates() {
        assert_eq!(sanitize("abc!!!def", 5), "abc!!");
        assert_eq!(sanitize("Don't (stop) / go-on? & more.", 255), "Don't (stop) / go-on? & more.");
    }

    #[test]
    fn removes_only_the_first_disallowed_run() {
        assert_eq!(sanitize("a^~b", 100), "ab");
        assert_eq!(sanitize("a#b#c", 100), "ab#c");
        assert!(!is_clean(&sanitize("a#b#c", 100)));
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hi", 10), "hi");
    }
}
