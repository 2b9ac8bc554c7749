//! Wire DTOs for the `/solve` endpoint and their display mapping.
//!
//! DESIGN
//! ======
//! Solving backends answer in one of two shapes. Both are decoded into
//! `SolveResponse` and collapsed into a single `SolvedEquation` so the view
//! layer only ever sees one triple of equation, answer, and steps.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::config::ANSWER_FALLBACK;

/// Successful `/solve` response body.
///
/// Variant order matters for `untagged` decoding: a body carrying both
/// shapes is read as a transcript.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// Recognized LaTeX plus a newline-delimited solution text.
    Transcript {
        /// Equation recognized from the image.
        latex: String,
        /// Solution text; each non-blank line is one step.
        solution: String,
    },
    /// Display fields already split by the backend.
    Structured {
        equation: String,
        answer: String,
        steps: Vec<String>,
    },
}

/// Failure body returned with non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
}

/// The three display fields shown after a successful solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolvedEquation {
    pub equation: String,
    pub answer: String,
    pub steps: Vec<String>,
}

impl From<SolveResponse> for SolvedEquation {
    fn from(response: SolveResponse) -> Self {
        match response {
            SolveResponse::Structured { equation, answer, steps } => Self { equation, answer, steps },
            SolveResponse::Transcript { latex, solution } => {
                let steps = solution_steps(&solution);
                let answer = steps
                    .last()
                    .cloned()
                    .unwrap_or_else(|| ANSWER_FALLBACK.to_owned());
                Self { equation: latex, answer, steps }
            }
        }
    }
}

/// Split solution text into steps, dropping whitespace-only lines.
///
/// Lines keep their spacing; only blank ones are removed.
pub fn solution_steps(solution: &str) -> Vec<String> {
    solution
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}
