//! Token construction.

use std::sync::Arc;

use crate::span::Span;
use crate::stream::CharStream;
use crate::token::{Channel, Token, TokenType};

/// Field bundle the driver hands to a factory for one emission.
///
/// `text` carries an explicit override when a rule action replaced the
/// lexically derived text; `None` means "derive from the stream".
#[derive(Clone, Debug)]
pub struct TokenDraft {
    pub kind: TokenType,
    pub channel: Channel,
    pub span: Span,
    /// Line of the first character, 1-based.
    pub line: u32,
    /// Column of the first character, 0-based.
    pub column: u32,
    pub text: Option<Arc<str>>,
}

/// Allocates concrete tokens from emission drafts.
///
/// The driver owns exactly one factory; generated lexers substitute their
/// own to intern text or attach extra payload.
pub trait TokenFactory {
    fn create(&self, input: &dyn CharStream, draft: TokenDraft) -> Token;
}

/// Default factory.
///
/// Text resolution order: the draft's explicit override, then `"<EOF>"`
/// for the end-of-input type, then the stream substring covered by the
/// draft span.
#[derive(Copy, Clone, Debug, Default)]
pub struct CommonTokenFactory;

impl TokenFactory for CommonTokenFactory {
    fn create(&self, input: &dyn CharStream, draft: TokenDraft) -> Token {
        let text: Arc<str> = match draft.text {
            Some(text) => text,
            None if draft.kind == TokenType::EOF => Arc::from("<EOF>"),
            None => Arc::from(input.text(draft.span)),
        };
        Token::new(
            input.source_name().into(),
            draft.kind,
            text,
            draft.channel,
            draft.span,
            draft.line,
            draft.column,
        )
    }
}
