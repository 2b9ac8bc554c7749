//! Bridge to the KaTeX typesetter loaded by the page shell.
//!
//! In the browser, `window.katex.renderToString` produces the markup. On the
//! server and in native tests there is no KaTeX, so formulas render as
//! escaped `<code>` and the hydrated client replaces them once results arrive.

#[cfg(test)]
#[path = "katex_test.rs"]
mod katex_test;

use crate::util::markdown::escape_html;

/// How a formula sits in the surrounding text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathDisplay {
    Inline,
    Block,
}

/// Typesets a LaTeX formula into HTML markup.
pub trait MathRenderer {
    /// # Errors
    ///
    /// Returns a message when the formula cannot be typeset.
    fn render(&self, latex: &str, display: MathDisplay) -> Result<String, String>;
}

/// Renderer backed by the KaTeX global.
#[derive(Clone, Copy, Debug, Default)]
pub struct KatexRenderer;

impl MathRenderer for KatexRenderer {
    fn render(&self, latex: &str, display: MathDisplay) -> Result<String, String> {
        #[cfg(feature = "hydrate")]
        {
            render_with_katex(latex, display)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(code_markup(latex, display))
        }
    }
}

/// Untypeset formula markup.
pub fn code_markup(latex: &str, display: MathDisplay) -> String {
    let modifier = match display {
        MathDisplay::Inline => "inline",
        MathDisplay::Block => "block",
    };
    format!("<code class=\"math math--{modifier}\">{}</code>", escape_html(latex))
}

#[cfg(feature = "hydrate")]
fn render_with_katex(latex: &str, display: MathDisplay) -> Result<String, String> {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let katex = Reflect::get(&window, &JsValue::from_str("katex")).map_err(js_error_message)?;
    if katex.is_undefined() || katex.is_null() {
        return Err("KaTeX is not loaded".to_owned());
    }
    let render_to_string = Reflect::get(&katex, &JsValue::from_str("renderToString"))
        .map_err(js_error_message)?
        .dyn_into::<Function>()
        .map_err(js_error_message)?;

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("displayMode"),
        &JsValue::from_bool(display == MathDisplay::Block),
    )
    .map_err(js_error_message)?;
    Reflect::set(&options, &JsValue::from_str("throwOnError"), &JsValue::TRUE).map_err(js_error_message)?;

    render_to_string
        .call2(&katex, &JsValue::from_str(latex), &options)
        .map_err(js_error_message)?
        .as_string()
        .ok_or_else(|| "KaTeX returned no markup".to_owned())
}

#[cfg(feature = "hydrate")]
fn js_error_message(value: wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
