//! Character-based string helpers.
//!
//! Grid positions count characters, not bytes, so every width computation in
//! the crate goes through these.

/// Number of characters in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `max` characters of `s`.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// `s` padded with spaces at the end to `width` characters.
pub(crate) fn pad_end(s: &str, width: usize) -> String {
    let len = char_len(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(len));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

/// `s` padded with spaces at the start to `width` characters.
pub(crate) fn pad_start(s: &str, width: usize) -> String {
    let len = char_len(s);
    let mut out: String = std::iter::repeat(' ')
        .take(width.saturating_sub(len))
        .collect();
    out.push_str(s);
    out
}

/// `s` centered in `width` characters, odd space on the right.
///
/// Text longer than `width` is cut to `width`.
pub(crate) fn pad_center(s: &str, width: usize) -> String {
    let len = char_len(s);
    if len >= width {
        return truncate(s, width);
    }
    let total = width - len;
    let left = total / 2;
    let right = total - left;
    let mut out = " ".repeat(left);
    out.push_str(s);
    out.push_str(&" ".repeat(right));
    out
}

/// Character index of the last occurrence of `needle` in `haystack`.
pub(crate) fn rfind_chars(haystack: &[char], needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&start| haystack[start..start + needle.len()] == needle[..])
}
