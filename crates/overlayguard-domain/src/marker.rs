//! Commit-message marker detection.

/// Line terminators recognized when splitting a commit message.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// True when some line of `message`, trimmed and lowercased, starts with `marker`.
///
/// Text after the marker on the same line is ignored. A marker that only appears
/// mid-line does not count.
pub fn has_marker(message: &str, marker: &str) -> bool {
    let marker = marker.trim().to_lowercase();
    if marker.is_empty() {
        return false;
    }
    message
        .split(is_line_break)
        .any(|line| line.trim().to_lowercase().starts_with(&marker))
}
