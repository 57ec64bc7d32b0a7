//! The pattern-interpreter contract.
//!
//! The driver is independent of how matching is implemented; anything
//! that can run a longest-match attempt over a rule network plugs in
//! here. The interpreter owns line/column tracking: the driver reads
//! positions from it when a token starts and delegates consumption to it
//! wherever that tracking must stay current.

use relex_core::{CharStream, TokenType};

use crate::error::MatchError;
use crate::mode::Mode;

/// Outcome of one match attempt.
///
/// `Skip` and `More` are control outcomes, not token types: `Skip`
/// discards the in-progress match and emits nothing; `More` keeps the
/// start position and extends the match with the next attempt.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchOutcome {
    /// A rule matched and resolved to this token type.
    Token(TokenType),
    /// Discard the in-progress match; restart at the current position.
    Skip,
    /// Keep the start position; the next attempt extends the match.
    More,
}

/// Longest-match simulation over a rule network.
pub trait PatternInterpreter {
    /// Attempt one match against the rules of `mode`, consuming matched
    /// characters from `input`.
    ///
    /// An attempt started with `input` already at end of input resolves
    /// to [`TokenType::EOF`] rather than failing; the driver then routes
    /// the first end-of-input token through the ordinary emission path.
    fn match_token(
        &mut self,
        input: &mut dyn CharStream,
        mode: Mode,
    ) -> Result<MatchOutcome, MatchError>;

    /// Consume one character, keeping line/column tracking current
    /// (including newline handling).
    fn consume(&mut self, input: &mut dyn CharStream);

    /// Current line, 1-based.
    fn line(&self) -> u32;

    /// Current column, 0-based.
    fn column(&self) -> u32;

    fn set_line(&mut self, line: u32);

    fn set_column(&mut self, column: u32);

    /// Text of the span consumed by the current match, in the
    /// interpreter's own view (which may normalize line endings rather
    /// than mirror raw stream indices).
    fn text(&self, input: &dyn CharStream) -> String;

    /// Drop position tracking back to a fresh state.
    fn reset(&mut self);

    /// When true, the driver logs mode transitions.
    fn debug(&self) -> bool {
        false
    }
}
