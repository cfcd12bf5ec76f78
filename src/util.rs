/// Outcome of matching an edge label against a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelMatch {
    /// Every character of the label matched.
    Full,
    /// The label diverges from the text (or the text runs out) at this byte
    /// offset into the label. Always on a character boundary of the label.
    DivergesAt(usize),
}

/// Matches `label` against `text[start..stop]`, character by character.
///
/// Returns [`LabelMatch::Full`] if the whole label is a prefix of the text
/// window, otherwise the offset within `label` of the first character that
/// differs or has no counterpart in the window. Because the matched part is
/// identical in both strings, `start + offset` is the corresponding position in
/// `text`.
///
/// Panics if `start..stop` is not a valid char-boundary range of `text`.
pub(crate) fn match_label(text: &str, start: usize, stop: usize, label: &str) -> LabelMatch {
    debug_assert!(!label.is_empty(), "edge labels are never empty");

    let mut window = text[start..stop].chars();
    for (j, expected) in label.char_indices() {
        match window.next() {
            Some(c) if c == expected => {}
            _ => return LabelMatch::DivergesAt(j),
        }
    }

    LabelMatch::Full
}

/// First character of a non-empty string.
#[inline]
pub(crate) fn first_char(s: &str) -> char {
    match s.chars().next() {
        Some(c) => c,
        None => panic!("first_char called on an empty string"),
    }
}
