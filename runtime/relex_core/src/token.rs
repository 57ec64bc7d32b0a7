//! Token values and their type/channel identifiers.

use std::fmt;
use std::sync::Arc;

use crate::span::Span;

/// Token type resolved by the pattern interpreter.
///
/// Grammar-defined types are positive integers assigned by the generator.
/// Two values are reserved: [`TokenType::EOF`] marks end of input and
/// [`TokenType::INVALID`] is the placeholder for a token whose type has
/// not been resolved yet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenType(pub i32);

impl TokenType {
    /// End-of-input token type.
    pub const EOF: TokenType = TokenType(-1);
    /// Placeholder for an unresolved token type.
    pub const INVALID: TokenType = TokenType(0);
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == TokenType::EOF {
            f.write_str("EOF")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Channel a token is routed on.
///
/// Channels tag tokens without removing them from the stream; a parser
/// typically reads [`Channel::DEFAULT`] and skips over everything else.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Channel(pub u32);

impl Channel {
    /// Channel ordinary tokens are routed on.
    pub const DEFAULT: Channel = Channel(0);
    /// Conventional side channel for trivia (whitespace, comments).
    pub const HIDDEN: Channel = Channel(1);
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recognized token.
///
/// Tokens are immutable after creation; ownership transfers to whoever
/// pulled them out of the driver. Text and source name are `Arc<str>` so
/// clones stay cheap.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    source_name: Arc<str>,
    kind: TokenType,
    text: Arc<str>,
    channel: Channel,
    span: Span,
    line: u32,
    column: u32,
}

impl Token {
    /// Assemble a token from its parts.
    ///
    /// `line` is 1-based and `column` 0-based, both referring to the
    /// token's first character.
    pub fn new(
        source_name: Arc<str>,
        kind: TokenType,
        text: Arc<str>,
        channel: Channel,
        span: Span,
        line: u32,
        column: u32,
    ) -> Self {
        Token {
            source_name,
            kind,
            text,
            channel,
            span,
            line,
            column,
        }
    }

    /// Name of the source this token came from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Resolved token type.
    pub fn kind(&self) -> TokenType {
        self.kind
    }

    /// Token text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Channel the token is routed on.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Character span the token covers. Empty for end-of-input tokens.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Line of the token's first character, 1-based.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the token's first character, 0-based.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Check if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::EOF
    }
}

impl fmt::Display for Token {
    /// Compact single-line form, e.g. `[@2..4='ab',<1>,1:2]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[@{}='{}',<{}>,{}:{}]",
            self.span,
            escape_layout(&self.text),
            self.kind,
            self.line,
            self.column
        )
    }
}

/// Escape layout characters so a token prints on one line.
fn escape_layout(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests;
