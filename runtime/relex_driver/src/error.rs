//! Failure taxonomy.
//!
//! Three tiers. Recognition failures are recovered inside the driver and
//! surface only through the listener dispatch. Interpreter failures
//! outside the recognition taxonomy propagate to the caller unchanged.
//! Invariant violations (popping an empty mode stack, consuming past end
//! of input) panic.

use thiserror::Error;

use crate::mode::Mode;

/// A recognition failure raised by the pattern interpreter.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum RecognitionError {
    /// No rule matched anything from the start position.
    #[error("no viable alternative at index {start_index}")]
    NoViableAlt { start_index: u32, mode: Mode },

    /// A rule matched part of the input and then aborted.
    #[error("rule {rule_index} aborted at index {index}")]
    RuleAborted { rule_index: u32, index: u32 },
}

/// Failure channel of a single match attempt.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Recoverable: the driver reports it and resumes matching.
    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    /// Not a recognition failure; passed through to the caller.
    #[error("interpreter failure: {0}")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error surfaced by `next_token`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DriverError {
    /// The interpreter failed outside the recognition taxonomy.
    #[error("pattern interpreter failed: {0}")]
    Interpreter(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Render offending text for a diagnostic, escaping layout characters.
pub fn error_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests;
