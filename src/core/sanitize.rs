// src/core/sanitize.rs

/// `&nbsp;` arrives from the parser as U+00A0.
pub fn normalize_entities(s: &str) -> String {
    s.replace('\u{a0}', " ")
}

/// Single spaces between words, none at the ends.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Last `n` characters of `s`, or `None` when `s` is shorter.
pub fn tail_chars(s: &str, n: usize) -> Option<&str> {
    if n == 0 { return Some(""); }
    let (idx, _) = s.char_indices().rev().nth(n - 1)?;
    Some(&s[idx..])
}
