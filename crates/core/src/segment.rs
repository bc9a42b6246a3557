use std::borrow::Cow;

use crate::NameSyntax;

/// Remove `"`, `'`, `[` and `]` from a raw segment. Nothing else is touched,
/// whitespace included.
pub fn clean_segment(segment: &str) -> Cow<'_, str> {
    clean_segment_with(segment, &NameSyntax::TSQL)
}

pub fn clean_segment_with<'a>(segment: &'a str, syntax: &NameSyntax) -> Cow<'a, str> {
    if !segment.chars().any(|ch| syntax.is_stripped(ch)) {
        return Cow::Borrowed(segment);
    }

    Cow::Owned(
        segment
            .chars()
            .filter(|ch| !syntax.is_stripped(*ch))
            .collect(),
    )
}
