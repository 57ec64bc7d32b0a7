//! The token-recognition driver.
//!
//! One `next_token` call produces exactly one token. The outer loop
//! starts a token by capturing the stream position and the interpreter's
//! line/column; the inner loop re-runs the interpreter while it reports
//! `More`, so a match can be extended any number of times without losing
//! its start. `Skip` discards everything accumulated and restarts at the
//! current position. End of input latches once; every later call yields
//! a fresh end-of-input token.
//!
//! Recognition failures never stop the token stream: each one is
//! reported to the listener dispatch exactly once, recovery makes one
//! character of forward progress (or defers to the end-of-input path),
//! and matching resumes.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use relex_core::{
    Channel, CharStream, CommonTokenFactory, Span, Token, TokenDraft, TokenFactory, TokenType,
};

use crate::error::{error_display, DriverError, MatchError, RecognitionError};
use crate::interp::{MatchOutcome, PatternInterpreter};
use crate::listener::{ErrorListener, ListenerDispatch, SyntaxError};
use crate::mode::Mode;

/// Resolution of the in-progress token.
///
/// `Unset` at the top of every inner iteration; a rule action may settle
/// it before the interpreter's outcome is adopted.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
enum Resolution {
    #[default]
    Unset,
    Skip,
    More,
    Kind(TokenType),
}

/// Scan bookkeeping for the token currently being assembled.
///
/// The `start_*` fields are captured once per outer iteration and stay
/// fixed while `More` rounds extend the match. `hit_eof` is a latch: it
/// never reverts except through a full reset.
#[derive(Clone, Debug, Default)]
struct ScanState {
    start_index: u32,
    start_line: u32,
    start_column: u32,
    resolution: Resolution,
    channel: Channel,
    text_override: Option<Arc<str>>,
    hit_eof: bool,
    current: Option<Token>,
}

/// Collaborators and scan state behind the driver.
///
/// This is the surface rule actions and [`LexerHooks`] implementations
/// work against; [`TokenDriver`] pairs it with a hook set.
pub struct DriverCore {
    input: Box<dyn CharStream>,
    interp: Box<dyn PatternInterpreter>,
    factory: Box<dyn TokenFactory>,
    listeners: ListenerDispatch,
    state: ScanState,
    mode: Mode,
    mode_stack: SmallVec<[Mode; 4]>,
}

impl DriverCore {
    fn new(input: Box<dyn CharStream>, interp: Box<dyn PatternInterpreter>) -> Self {
        DriverCore {
            input,
            interp,
            factory: Box::new(CommonTokenFactory),
            listeners: ListenerDispatch::new(),
            state: ScanState::default(),
            mode: Mode::DEFAULT,
            mode_stack: SmallVec::new(),
        }
    }

    // ─── Stream access ───────────────────────────────────────────────

    pub fn input(&self) -> &dyn CharStream {
        self.input.as_ref()
    }

    pub fn input_mut(&mut self) -> &mut dyn CharStream {
        self.input.as_mut()
    }

    /// Current stream position.
    pub fn char_index(&self) -> u32 {
        self.input.index()
    }

    pub fn source_name(&self) -> &str {
        self.input.source_name()
    }

    // ─── Interpreter position ────────────────────────────────────────

    /// Current line, 1-based.
    pub fn line(&self) -> u32 {
        self.interp.line()
    }

    /// Current column, 0-based.
    pub fn column(&self) -> u32 {
        self.interp.column()
    }

    pub fn set_line(&mut self, line: u32) {
        self.interp.set_line(line);
    }

    pub fn set_column(&mut self, column: u32) {
        self.interp.set_column(column);
    }

    // ─── Modes ───────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Nesting depth of the mode stack.
    pub fn mode_depth(&self) -> usize {
        self.mode_stack.len()
    }

    /// Replace the current mode without touching the stack.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.interp.debug() {
            debug!(from = %self.mode, to = %mode, "set mode");
        }
        self.mode = mode;
    }

    /// Push the current mode and switch to `mode`.
    pub fn push_mode(&mut self, mode: Mode) {
        if self.interp.debug() {
            debug!(from = %self.mode, to = %mode, depth = self.mode_stack.len(), "push mode");
        }
        self.mode_stack.push(self.mode);
        self.mode = mode;
    }

    /// Pop back to the mode active before the matching push and return it.
    ///
    /// # Panics
    ///
    /// Panics when the mode stack is empty.
    pub fn pop_mode(&mut self) -> Mode {
        let Some(previous) = self.mode_stack.pop() else {
            panic!("empty mode stack");
        };
        if self.interp.debug() {
            debug!(from = %self.mode, to = %previous, "pop mode");
        }
        self.mode = previous;
        self.mode
    }

    // ─── Rule-action surface ─────────────────────────────────────────

    /// Discard the in-progress match; nothing is emitted for it.
    pub fn skip(&mut self) {
        self.state.resolution = Resolution::Skip;
    }

    /// Extend the in-progress match into the next attempt, keeping its
    /// start position.
    pub fn more(&mut self) {
        self.state.resolution = Resolution::More;
    }

    /// Settle the in-progress token's type, overriding whatever the
    /// interpreter resolves for this attempt.
    pub fn set_type(&mut self, kind: TokenType) {
        self.state.resolution = Resolution::Kind(kind);
    }

    /// Type of the in-progress token, if settled.
    pub fn token_type(&self) -> Option<TokenType> {
        match self.state.resolution {
            Resolution::Kind(kind) => Some(kind),
            _ => None,
        }
    }

    /// Route the next emitted token on `channel`.
    pub fn set_channel(&mut self, channel: Channel) {
        self.state.channel = channel;
    }

    pub fn channel(&self) -> Channel {
        self.state.channel
    }

    /// Replace the emitted token's text.
    pub fn set_text(&mut self, text: impl Into<Arc<str>>) {
        self.state.text_override = Some(text.into());
    }

    /// Text of the in-progress token: the explicit override if one was
    /// set, otherwise the interpreter's view of the consumed span.
    pub fn text(&self) -> String {
        match &self.state.text_override {
            Some(text) => text.to_string(),
            None => self.interp.text(self.input.as_ref()),
        }
    }

    /// Index of the in-progress token's first character.
    pub fn token_start_index(&self) -> u32 {
        self.state.start_index
    }

    /// Line of the in-progress token's first character, 1-based.
    pub fn token_start_line(&self) -> u32 {
        self.state.start_line
    }

    /// Column of the in-progress token's first character, 0-based.
    pub fn token_start_column(&self) -> u32 {
        self.state.start_column
    }

    /// The most recently produced token.
    pub fn current_token(&self) -> Option<&Token> {
        self.state.current.as_ref()
    }

    // ─── Listeners & factory ─────────────────────────────────────────

    pub fn add_error_listener(&mut self, listener: Box<dyn ErrorListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_error_listeners(&mut self) {
        self.listeners.remove_all();
    }

    pub fn set_token_factory(&mut self, factory: Box<dyn TokenFactory>) {
        self.factory = factory;
    }

    // ─── Emission ────────────────────────────────────────────────────

    /// Adopt `token` as the token produced by this call. Rule actions
    /// use this to emit something other than the default.
    pub fn emit_token(&mut self, token: Token) {
        self.state.current = Some(token);
    }

    /// Build the default token for the settled match: the span from the
    /// captured start to the current stream position, the captured start
    /// line/column, and any channel or text override set along the way.
    pub fn build_token(&self) -> Token {
        let kind = match self.state.resolution {
            Resolution::Kind(kind) => kind,
            _ => TokenType::INVALID,
        };
        let draft = TokenDraft {
            kind,
            channel: self.state.channel,
            span: Span::new(self.state.start_index, self.input.index()),
            line: self.state.start_line,
            column: self.state.start_column,
            text: self.state.text_override.clone(),
        };
        self.factory.create(self.input.as_ref(), draft)
    }

    /// Build and adopt a fresh end-of-input token at the current stream
    /// position. Not cached: every call past end of input constructs a
    /// new one.
    pub fn emit_eof(&mut self) -> Token {
        let draft = TokenDraft {
            kind: TokenType::EOF,
            channel: Channel::DEFAULT,
            span: Span::point(self.input.index()),
            line: self.interp.line(),
            column: self.interp.column(),
            text: None,
        };
        let token = self.factory.create(self.input.as_ref(), draft);
        self.state.current = Some(token.clone());
        token
    }

    // ─── Recovery ────────────────────────────────────────────────────

    /// Default recovery: one character of forward progress, or nothing
    /// when the stream is already at end of input.
    ///
    /// Only the no-viable-alternative kind consumes through the
    /// interpreter; every other kind consumes from the stream directly,
    /// so interpreter line/column tracking can lag until the next token
    /// starts. That lag is part of the protocol; override
    /// [`LexerHooks::recover`] to change it.
    pub fn recover_default(&mut self, failure: &RecognitionError) {
        if self.input.la(1).is_none() {
            return;
        }
        match failure {
            RecognitionError::NoViableAlt { .. } => self.interp.consume(self.input.as_mut()),
            _ => self.input.consume(),
        }
    }

    // ─── Internals ───────────────────────────────────────────────────

    fn begin_token(&mut self) {
        self.state.current = None;
        self.state.channel = Channel::DEFAULT;
        self.state.start_index = self.input.index();
        self.state.start_line = self.interp.line();
        self.state.start_column = self.interp.column();
        self.state.text_override = None;
    }

    fn report_recognition_failure(&mut self, failure: &RecognitionError) {
        // Offending span runs from the token start through the character
        // the interpreter stopped on.
        let span = Span::new(
            self.state.start_index,
            self.input.index().saturating_add(1),
        );
        let text = self.input.text(span);
        let message = format!("token recognition error at: '{}'", error_display(&text));
        let error = SyntaxError {
            source_name: self.input.source_name(),
            offending_token: None,
            line: self.state.start_line,
            column: self.state.start_column,
            message: &message,
            failure,
        };
        self.listeners.syntax_error(&error);
    }

    fn reset(&mut self) {
        self.input.seek(0);
        self.state = ScanState::default();
        self.mode = Mode::DEFAULT;
        self.mode_stack.clear();
        self.interp.reset();
    }
}

/// Extension seam for generated lexers.
///
/// The default methods give the stock behavior: exactly one
/// factory-built token per settled match, and one character of recovery
/// progress per recognition failure. A lexer that emits several tokens
/// from one rule match queues them and drains through `pending_token`.
pub trait LexerHooks {
    /// A token already produced and waiting. Drained before any
    /// matching happens.
    fn pending_token(&mut self) -> Option<Token> {
        None
    }

    /// Produce the token for a settled match.
    fn emit(&mut self, core: &mut DriverCore) -> Token {
        core.build_token()
    }

    /// Recover from a recognition failure.
    fn recover(&mut self, core: &mut DriverCore, failure: &RecognitionError) {
        core.recover_default(failure);
    }
}

/// Stock hook set: single emission, default recovery.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultHooks;

impl LexerHooks for DefaultHooks {}

/// The token-recognition driver.
///
/// Produces exactly one token per [`next_token`](TokenDriver::next_token)
/// call, or an end-of-input token on every call once input is exhausted.
pub struct TokenDriver<H: LexerHooks = DefaultHooks> {
    core: DriverCore,
    hooks: H,
}

impl TokenDriver<DefaultHooks> {
    /// Driver with stock emission and recovery.
    pub fn new(input: Box<dyn CharStream>, interp: Box<dyn PatternInterpreter>) -> Self {
        Self::with_hooks(input, interp, DefaultHooks)
    }
}

impl<H: LexerHooks> TokenDriver<H> {
    /// Driver with a custom hook set.
    pub fn with_hooks(
        input: Box<dyn CharStream>,
        interp: Box<dyn PatternInterpreter>,
        hooks: H,
    ) -> Self {
        TokenDriver {
            core: DriverCore::new(input, interp),
            hooks,
        }
    }

    /// Shared state and collaborators.
    pub fn core(&self) -> &DriverCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut DriverCore {
        &mut self.core
    }

    /// Produce the next token.
    ///
    /// Recognition failures are reported to the listeners and recovered
    /// internally; only interpreter failures outside the recognition
    /// taxonomy surface as `Err`. The stream marker taken at the top is
    /// released on every exit path, including the `Err` one.
    pub fn next_token(&mut self) -> Result<Token, DriverError> {
        if let Some(token) = self.hooks.pending_token() {
            self.core.state.current = Some(token.clone());
            return Ok(token);
        }
        let marker = self.core.input.mark();
        let result = Self::run(&mut self.core, &mut self.hooks);
        self.core.input.release(marker);
        result
    }

    /// The resolution loop. The caller holds the stream marker.
    fn run(core: &mut DriverCore, hooks: &mut H) -> Result<Token, DriverError> {
        loop {
            if core.state.hit_eof {
                return Ok(core.emit_eof());
            }
            core.begin_token();
            let settled = loop {
                core.state.resolution = Resolution::Unset;
                let outcome = match core.interp.match_token(core.input.as_mut(), core.mode) {
                    Ok(outcome) => outcome,
                    Err(MatchError::Recognition(failure)) => {
                        core.report_recognition_failure(&failure);
                        hooks.recover(core, &failure);
                        MatchOutcome::Skip
                    }
                    Err(MatchError::Internal(source)) => {
                        return Err(DriverError::Interpreter(source));
                    }
                };
                if core.input.la(1).is_none() {
                    core.state.hit_eof = true;
                }
                if core.state.resolution == Resolution::Unset {
                    core.state.resolution = match outcome {
                        MatchOutcome::Token(kind) => Resolution::Kind(kind),
                        MatchOutcome::Skip => Resolution::Skip,
                        MatchOutcome::More => Resolution::More,
                    };
                }
                match core.state.resolution {
                    Resolution::Skip => break false,
                    Resolution::More => {}
                    Resolution::Unset | Resolution::Kind(_) => break true,
                }
            };
            if !settled {
                // Skip: throw away the attempt and start over at the
                // current position.
                continue;
            }
            let token = match core.state.current.clone() {
                // A rule action already emitted.
                Some(token) => token,
                None => {
                    let token = hooks.emit(core);
                    core.state.current = Some(token.clone());
                    token
                }
            };
            return Ok(token);
        }
    }

    /// Materialize every remaining token. The terminating end-of-input
    /// token is consumed but not included. A second call yields nothing
    /// until [`reset`](TokenDriver::reset).
    pub fn all_tokens(&mut self) -> Result<Vec<Token>, DriverError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.is_eof() {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    /// Rewind the stream to position zero and drop all scan state, mode
    /// nesting, and interpreter tracking. Equivalent to a freshly
    /// constructed driver over the same stream.
    pub fn reset(&mut self) {
        self.core.reset();
    }

    // ─── Delegated surface ───────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.core.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.core.set_mode(mode);
    }

    pub fn push_mode(&mut self, mode: Mode) {
        self.core.push_mode(mode);
    }

    /// See [`DriverCore::pop_mode`].
    pub fn pop_mode(&mut self) -> Mode {
        self.core.pop_mode()
    }

    pub fn line(&self) -> u32 {
        self.core.line()
    }

    pub fn column(&self) -> u32 {
        self.core.column()
    }

    pub fn source_name(&self) -> &str {
        self.core.source_name()
    }

    pub fn add_error_listener(&mut self, listener: Box<dyn ErrorListener>) {
        self.core.add_error_listener(listener);
    }

    pub fn remove_error_listeners(&mut self) {
        self.core.remove_error_listeners();
    }

    pub fn set_token_factory(&mut self, factory: Box<dyn TokenFactory>) {
        self.core.set_token_factory(factory);
    }
}
