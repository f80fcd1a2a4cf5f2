//! Text helpers for the domain layer.

/// Shorten `s` to at most `max_bytes` bytes for display, marking the cut
/// with `...`.
///
/// The cut always lands on a UTF-8 character boundary. Strings that already
/// fit are returned unchanged.
pub fn excerpt(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let mut end = max_bytes.saturating_sub(3);
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
