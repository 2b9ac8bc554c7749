//! Text and formula views with typeset math.
//!
//! SYSTEM CONTEXT
//! ==============
//! Display text is lexed into segments. Text runs are rendered as markdown
//! and math runs go through the KaTeX bridge. A formula that fails to
//! typeset becomes an inline error message, leaving the rest of the panel
//! intact.

#[cfg(test)]
#[path = "math_text_test.rs"]
mod math_text_test;

use leptos::prelude::*;

use crate::util::katex::{KatexRenderer, MathDisplay, MathRenderer};
use crate::util::markdown::{escape_html, render_markdown_html};
use crate::util::math_segments::{Segment, lex_segments};

/// Placeholder for an empty formula.
pub const EMPTY_FORMULA_TEXT: &str = "No formula available";

/// Text with embedded `$...$` / `$$...$$` math.
#[component]
pub fn MathText(#[prop(into)] content: String) -> impl IntoView {
    let html = segments_html(&lex_segments(&content), &KatexRenderer);
    view! { <div class="math-text" inner_html=html></div> }
}

/// A bare LaTeX formula.
#[component]
pub fn MathFormula(#[prop(into)] latex: String, #[prop(optional)] block: bool) -> impl IntoView {
    let display = if block { MathDisplay::Block } else { MathDisplay::Inline };
    let html = formula_html(&latex, display, &KatexRenderer);
    view! { <div class="math-formula" inner_html=html></div> }
}

/// Markup for a lexed segment stream.
///
/// Text runs are rendered as markdown in one pass, with each formula held
/// by a placeholder token until the markdown is done.
pub fn segments_html(segments: &[Segment], renderer: &impl MathRenderer) -> String {
    let mut source = String::new();
    let mut formulas = Vec::new();
    for segment in segments {
        if segment.is_math() {
            source.push_str(&formula_token(formulas.len()));
            formulas.push(segment_formula_html(segment, renderer));
        } else if let Segment::Text(text) = segment {
            source.push_str(text);
        }
    }

    let mut html = render_markdown_html(&source);
    for (index, markup) in formulas.iter().enumerate() {
        html = html.replacen(&formula_token(index), markup, 1);
    }
    html
}

// Private-use code points never occur in solver text and pass through
// markdown untouched.
fn formula_token(index: usize) -> String {
    format!("\u{E000}{index}\u{E001}")
}

fn segment_formula_html(segment: &Segment, renderer: &impl MathRenderer) -> String {
    match segment {
        Segment::InlineMath(latex) => formula_html(latex, MathDisplay::Inline, renderer),
        Segment::BlockMath(latex) => formula_html(latex, MathDisplay::Block, renderer),
        Segment::Text(text) => escape_html(text),
    }
}

/// Markup for one formula, degrading to visible text on failure.
pub fn formula_html(latex: &str, display: MathDisplay, renderer: &impl MathRenderer) -> String {
    let trimmed = latex.trim();
    if trimmed.is_empty() {
        return format!("<span class=\"math-empty\">{EMPTY_FORMULA_TEXT}</span>");
    }

    match renderer.render(trimmed, display) {
        Ok(markup) => match display {
            MathDisplay::Inline => format!("<span class=\"math-inline\">{markup}</span>"),
            MathDisplay::Block => format!("<span class=\"math-block\">{markup}</span>"),
        },
        Err(e) => {
            leptos::logging::warn!("formula render failed: {e}");
            format!(
                "<span class=\"math-error\">Error rendering formula: {}</span>",
                escape_html(latex)
            )
        }
    }
}
