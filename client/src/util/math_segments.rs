//! Lexer splitting display text into plain-text and math segments.
//!
//! `$$...$$` delimits block math and `$...$` inline math. The output always
//! alternates text and math, starting and ending with a (possibly empty)
//! text segment, so renderers can rely on even indices being text.
//!
//! Unbalanced input never fails: a delimiter without a partner, or wrapping
//! only whitespace, stays in the text verbatim. Inline math cannot cross a
//! line break; block math can. `\$` is never a delimiter.

#[cfg(test)]
#[path = "math_segments_test.rs"]
mod math_segments_test;

/// One run of display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Trimmed body of a `$...$` span.
    InlineMath(String),
    /// Trimmed body of a `$$...$$` span.
    BlockMath(String),
}

impl Segment {
    pub fn is_math(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

/// Split `input` into alternating text and math segments.
pub fn lex_segments(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = input;

    while let Some(at) = find_unescaped(rest, "$") {
        text.push_str(&rest[..at]);
        let tail = &rest[at..];
        if let Some((math, consumed)) = take_math(tail) {
            segments.push(Segment::Text(std::mem::take(&mut text)));
            segments.push(math);
            rest = &tail[consumed..];
        } else {
            let literal = if tail.starts_with("$$") { 2 } else { 1 };
            text.push_str(&tail[..literal]);
            rest = &tail[literal..];
        }
    }

    text.push_str(rest);
    segments.push(Segment::Text(text));
    segments
}

/// Read one math span from the start of `tail`, which begins with `$`.
///
/// Returns the segment and the number of bytes consumed, delimiters included.
fn take_math(tail: &str) -> Option<(Segment, usize)> {
    if let Some(body) = tail.strip_prefix("$$") {
        let end = find_unescaped(body, "$$")?;
        let content = body[..end].trim();
        return (!content.is_empty()).then(|| (Segment::BlockMath(content.to_owned()), end + 4));
    }

    let body = &tail[1..];
    let end = find_unescaped(body, "$")?;
    let raw = &body[..end];
    if raw.contains('\n') {
        return None;
    }
    let content = raw.trim();
    (!content.is_empty()).then(|| (Segment::InlineMath(content.to_owned()), end + 2))
}

/// Byte offset of the first `needle` in `haystack` not preceded by an
/// unpaired backslash.
fn find_unescaped(haystack: &str, needle: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(rel) = haystack[from..].find(needle) {
        let at = from + rel;
        if !is_escaped(haystack, at) {
            return Some(at);
        }
        from = at + 1;
    }
    None
}

fn is_escaped(haystack: &str, at: usize) -> bool {
    let backslashes = haystack[..at].chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 1
}
