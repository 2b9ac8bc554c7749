//! Compile-time client configuration.
//!
//! The page talks to exactly one endpoint with one upload contract, so these
//! are constants rather than runtime settings. The host relays `/solve` to
//! whichever solving service it is configured for.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Relative path of the solving endpoint on the serving host.
pub const SOLVE_ENDPOINT: &str = "/solve";

/// Multipart field name carrying the uploaded image.
pub const UPLOAD_FIELD: &str = "image";

/// `accept` filter for the file picker.
pub const IMAGE_ACCEPT: &str = "image/*";

/// Answer shown when the solution text has no non-blank lines.
pub const ANSWER_FALLBACK: &str = "See solution below";

/// Hide the final answer until the user asks for it.
pub const REVEAL_ANSWER_ON_CLICK: bool = true;

/// KaTeX release loaded by the page shell.
pub const KATEX_VERSION: &str = "0.16.11";

/// Stylesheet URL for the pinned KaTeX release.
pub fn katex_stylesheet_url() -> String {
    format!("https://cdn.jsdelivr.net/npm/katex@{KATEX_VERSION}/dist/katex.min.css")
}

/// Script URL for the pinned KaTeX release.
pub fn katex_script_url() -> String {
    format!("https://cdn.jsdelivr.net/npm/katex@{KATEX_VERSION}/dist/katex.min.js")
}
