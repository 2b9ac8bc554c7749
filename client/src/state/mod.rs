//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page has a single domain model, `solver`, held in one signal and
//! changed only through its reducer.

pub mod solver;
