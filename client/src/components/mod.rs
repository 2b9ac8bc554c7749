//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the solver page's surfaces while reading shared state
//! from the `SolverState` context provider.

pub mod math_text;
pub mod result_panels;
pub mod status_line;
pub mod upload_panel;
