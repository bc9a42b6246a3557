use tracing::trace;

use crate::NameSyntax;

/// Split `text` on dots that sit outside bracket or double-quote spans.
///
/// `[`, `]` and `"` each toggle a single in-literal flag, so unbalanced input
/// keeps the flag set for the rest of the text. The result always holds at
/// least one segment.
pub fn split_segments(text: &str) -> Vec<&str> {
    split_segments_with(text, &NameSyntax::TSQL)
}

pub fn split_segments_with<'a>(text: &'a str, syntax: &NameSyntax) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut in_literal = false;
    let mut start = 0usize;

    for (idx, ch) in text.char_indices() {
        if syntax.is_enclosing(ch) {
            in_literal = !in_literal;
        } else if !in_literal && ch == syntax.separator {
            segments.push(&text[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    segments.push(&text[start..]);

    trace!(input = text, segments = segments.len(), "split qualified name");
    segments
}
