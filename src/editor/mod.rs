//! Editor Layer
//!
//! The rename workflow: one session driven through
//! collect → validate → submit → reconcile, with the view updated only
//! from server-confirmed values.

mod controller;
mod outcome;
mod prompt;

#[cfg(test)]
mod tests;

pub use controller::{EditController, EditPhase};
pub use outcome::EditOutcome;
pub use prompt::{EditPrompt, PromptOutcome};
