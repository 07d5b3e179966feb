//! Small string helpers shared by the exporter crates

/// Truncate a string to `max_len` bytes, appending "..." when shortened.
///
/// Never splits a UTF-8 character.
#[must_use]
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len.saturating_sub(3);
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Join a base URL and a path with exactly one slash between them
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Render an optional value as a CSV cell, empty when absent
#[must_use]
pub fn optional_cell<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello world", 5), "he...");
        assert_eq!(truncate_string("hi", 10), "hi");
        assert_eq!(truncate_string("exact", 5), "exact");
        assert_eq!(truncate_string("test", 2), "...");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        // "é" is two bytes; a cut at byte 2 would land inside it
        let truncated = truncate_string("aébcdef", 5);
        assert_eq!(truncated, "a...");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://x/api", "tasks"), "https://x/api/tasks");
        assert_eq!(join_url("https://x/api/", "/tasks"), "https://x/api/tasks");
        assert_eq!(
            join_url("http://127.0.0.1:1234", "completed/get_all"),
            "http://127.0.0.1:1234/completed/get_all"
        );
    }

    #[test]
    fn test_optional_cell() {
        assert_eq!(optional_cell(Some(&"abc")), "abc");
        assert_eq!(optional_cell(Some(&42)), "42");
        assert_eq!(optional_cell::<String>(None), "");
    }
}
