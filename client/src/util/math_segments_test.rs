use super::*;

fn text(s: &str) -> Segment {
    Segment::Text(s.to_owned())
}

fn inline(s: &str) -> Segment {
    Segment::InlineMath(s.to_owned())
}

fn block(s: &str) -> Segment {
    Segment::BlockMath(s.to_owned())
}

// =============================================================
// Balanced input
// =============================================================

#[test]
fn mixed_inline_and_block_math() {
    assert_eq!(
        lex_segments(r"Solve $x^2=4$ to get $$x=\pm2$$"),
        vec![text("Solve "), inline("x^2=4"), text(" to get "), block(r"x=\pm2"), text("")]
    );
}

#[test]
fn plain_text_is_a_single_segment() {
    assert_eq!(lex_segments("Step 1: add both sides"), vec![text("Step 1: add both sides")]);
}

#[test]
fn empty_input_is_one_empty_text_segment() {
    assert_eq!(lex_segments(""), vec![text("")]);
}

#[test]
fn adjacent_math_spans_are_separated_by_empty_text() {
    assert_eq!(
        lex_segments("$a$$$b$$"),
        vec![text(""), inline("a"), text(""), block("b"), text("")]
    );
}

#[test]
fn math_content_is_trimmed() {
    assert_eq!(lex_segments("$  y = 2  $"), vec![text(""), inline("y = 2"), text("")]);
}

#[test]
fn block_math_may_span_lines() {
    assert_eq!(
        lex_segments("so $$\nx = 1\n$$ done"),
        vec![text("so "), block("x = 1"), text(" done")]
    );
}

#[test]
fn output_alternates_text_and_math() {
    let segments = lex_segments("a $b$ c $$d$$ e $f$");
    assert_eq!(segments.len() % 2, 1);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.is_math(), i % 2 == 1, "segment {i}: {segment:?}");
    }
}

// =============================================================
// Unbalanced and degenerate input
// =============================================================

#[test]
fn unterminated_inline_delimiter_is_plain_text() {
    assert_eq!(lex_segments("costs $5 today"), vec![text("costs $5 today")]);
}

#[test]
fn unterminated_block_delimiter_is_plain_text() {
    assert_eq!(lex_segments("$$x + 1"), vec![text("$$x + 1")]);
    assert_eq!(lex_segments("$$x$"), vec![text("$$x$")]);
}

#[test]
fn unterminated_block_still_allows_later_inline_math() {
    assert_eq!(
        lex_segments("$$ open then $y$"),
        vec![text("$$ open then "), inline("y"), text("")]
    );
}

#[test]
fn empty_delimited_spans_are_plain_text() {
    assert_eq!(lex_segments("$$$$"), vec![text("$$$$")]);
    assert_eq!(lex_segments("$ $"), vec![text("$ $")]);
}

#[test]
fn inline_math_does_not_cross_line_breaks() {
    assert_eq!(lex_segments("$a\nb$"), vec![text("$a\nb$")]);
    assert_eq!(lex_segments("$a\n$b$"), vec![text("$a\n"), inline("b"), text("")]);
}

#[test]
fn escaped_dollars_are_not_delimiters() {
    assert_eq!(lex_segments(r"pay \$5 and \$6"), vec![text(r"pay \$5 and \$6")]);
    assert_eq!(
        lex_segments(r"$\text{\$}1$"),
        vec![text(""), inline(r"\text{\$}1"), text("")]
    );
}

#[test]
fn escaped_backslash_does_not_escape_dollar() {
    assert_eq!(lex_segments(r"\\$x$"), vec![text(r"\\"), inline("x"), text("")]);
}
