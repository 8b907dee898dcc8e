//! Shared helpers for the hangman test suites: one-time logging setup and
//! problem-details assertions that do not depend on the app's own types.

pub mod logging;
pub mod problem_details;
