//! Text preprocessing around grammar matching.
//!
//! The annotation grammar is matched against a single line. Line breaks are
//! swapped for [`LINE_BREAK_SENTINEL`] before matching and swapped back in
//! every capture afterwards.
//!
//! Text that already contains the sentinel cannot be told apart from a
//! substituted line break: such characters come back as `\n`. Callers can
//! detect this with [`contains_sentinel`].

/// Private code point standing in for a line break during matching.
///
/// `U+FFFF` is a Unicode noncharacter and never appears in well-formed
/// documentation text.
pub const LINE_BREAK_SENTINEL: char = '\u{FFFF}';

/// Trim `raw` and replace each line break (`\r\n`, `\r` or `\n`) with
/// [`LINE_BREAK_SENTINEL`].
///
/// # Examples
/// ```
/// use paramdoc_grammar::{LINE_BREAK_SENTINEL, preprocess};
/// assert_eq!(preprocess("  a\r\nb\n"), format!("a{LINE_BREAK_SENTINEL}b"));
/// ```
#[must_use]
pub fn preprocess(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.trim().chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push(LINE_BREAK_SENTINEL);
            }
            '\n' => out.push(LINE_BREAK_SENTINEL),
            other => out.push(other),
        }
    }
    out
}

/// Replace every [`LINE_BREAK_SENTINEL`] in `text` with `\n`.
#[must_use]
pub fn restore_line_breaks(text: &str) -> String {
    text.replace(LINE_BREAK_SENTINEL, "\n")
}

/// Whether `raw` already contains [`LINE_BREAK_SENTINEL`].
#[must_use]
pub fn contains_sentinel(raw: &str) -> bool {
    raw.contains(LINE_BREAK_SENTINEL)
}

/// Remove the leading whitespace shared by all non-blank lines.
///
/// Blank lines lose as much of that prefix as they have. Text without a
/// common prefix is returned unchanged.
///
/// # Examples
/// ```
/// use paramdoc_grammar::unindent;
/// assert_eq!(unindent("  a\n    b\n\n  c"), "a\n  b\n\nc");
/// assert_eq!(unindent("a\n  b"), "a\n  b");
/// ```
#[must_use]
pub fn unindent(text: &str) -> String {
    let prefix = common_indent(text);
    if prefix.is_empty() {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| {
            line.strip_prefix(prefix)
                .unwrap_or_else(|| line.trim_start())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_indent(text: &str) -> &str {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());
    let Some(first) = lines.next() else {
        return "";
    };
    let mut prefix = leading_whitespace(first);
    for line in lines {
        let shared: usize = prefix
            .chars()
            .zip(line.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        prefix = prefix.get(..shared).unwrap_or_default();
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map_or(line.len(), |(idx, _)| idx);
    line.get(..end).unwrap_or_default()
}
