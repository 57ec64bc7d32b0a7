//! Primitives shared by the relex driver and its collaborators.
//!
//! This crate is standalone: spans, tokens, the character-stream
//! abstraction, and the token factory have no dependency on the driver,
//! so tools that only consume tokens (highlighters, token dumpers, test
//! harnesses) can use it without the recognition machinery.
//!
//! Positions are character indices, `u32` throughout. Spans are half-open
//! `[start, end)` ranges; the inclusive stop index of a token is
//! `span.end - 1`, and a zero-length span locates the end-of-input token.

mod factory;
mod span;
mod stream;
mod token;

pub use factory::{CommonTokenFactory, TokenDraft, TokenFactory};
pub use span::Span;
pub use stream::{CharStream, Marker, StringStream};
pub use token::{Channel, Token, TokenType};
