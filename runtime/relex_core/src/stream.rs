//! The character stream the driver scans.
//!
//! Positions are character indices starting at zero. Lookahead uses the
//! `la(offset)` convention: `la(1)` is the next unconsumed character,
//! `la(-1)` the one most recently consumed, and `None` is the
//! end-of-input sentinel. Implementations backed by unbounded input must
//! keep their buffered window live between [`CharStream::mark`] and
//! [`CharStream::release`]; the fully buffered [`StringStream`] only
//! counts marks so callers can check balance.

use crate::span::Span;

/// Opaque handle pinning a stream's buffered window.
///
/// Returned by [`CharStream::mark`] and handed back to
/// [`CharStream::release`]. A marker is scoped to a single
/// token-recognition attempt.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Marker(u32);

impl Marker {
    /// Mint a marker. Stream implementations pick the id; the driver
    /// treats it as opaque.
    pub const fn new(id: u32) -> Self {
        Marker(id)
    }

    /// The id this marker was minted with.
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Character-level input stream.
pub trait CharStream {
    /// Current position.
    fn index(&self) -> u32;

    /// Total number of characters in the stream.
    fn size(&self) -> u32;

    /// Lookahead relative to the current position.
    ///
    /// `la(1)` is the next character, `la(-1)` the previous one. Returns
    /// `None` past either end of the stream; `la(0)` is undefined and
    /// also returns `None`.
    fn la(&self, offset: i32) -> Option<char>;

    /// Advance one character.
    ///
    /// # Panics
    ///
    /// Panics when the stream is at end of input.
    fn consume(&mut self);

    /// Move to an absolute position, clamped to `size()`.
    fn seek(&mut self, index: u32);

    /// Pin the buffered window around the current position.
    fn mark(&mut self) -> Marker;

    /// Release a pin taken with [`CharStream::mark`].
    fn release(&mut self, marker: Marker);

    /// Substring covered by `span`, clamped to the stream size.
    fn text(&self, span: Span) -> String;

    /// Name of the underlying source, for diagnostics.
    fn source_name(&self) -> &str;
}

/// In-memory stream over a fully buffered string.
#[derive(Clone, Debug)]
pub struct StringStream {
    name: String,
    chars: Vec<char>,
    len: u32,
    pos: u32,
    next_marker: u32,
    outstanding: u32,
}

impl StringStream {
    /// Stream over `source` with the default name `"<string>"`.
    pub fn new(source: &str) -> Self {
        Self::with_name("<string>", source)
    }

    /// Stream over `source` with an explicit source name.
    ///
    /// # Panics
    ///
    /// Panics if `source` holds more than `u32::MAX` characters.
    pub fn with_name(name: impl Into<String>, source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let len = u32::try_from(chars.len())
            .unwrap_or_else(|_| panic!("source exceeds {} characters", u32::MAX));
        StringStream {
            name: name.into(),
            chars,
            len,
            pos: 0,
            next_marker: 0,
            outstanding: 0,
        }
    }

    /// Number of marks currently held.
    ///
    /// A fully buffered stream never evicts, so this exists for balance
    /// checking: after any complete recognition attempt it is zero.
    pub fn mark_depth(&self) -> u32 {
        self.outstanding
    }
}

impl CharStream for StringStream {
    fn index(&self) -> u32 {
        self.pos
    }

    fn size(&self) -> u32 {
        self.len
    }

    fn la(&self, offset: i32) -> Option<char> {
        if offset == 0 {
            return None;
        }
        let base = i64::from(self.pos);
        let target = if offset > 0 {
            base + i64::from(offset) - 1
        } else {
            base + i64::from(offset)
        };
        usize::try_from(target)
            .ok()
            .and_then(|i| self.chars.get(i).copied())
    }

    fn consume(&mut self) {
        assert!(self.pos < self.len, "cannot consume past end of input");
        self.pos += 1;
    }

    fn seek(&mut self, index: u32) {
        self.pos = index.min(self.len);
    }

    fn mark(&mut self) -> Marker {
        self.outstanding += 1;
        self.next_marker += 1;
        Marker(self.next_marker)
    }

    fn release(&mut self, _marker: Marker) {
        assert!(self.outstanding > 0, "release without a matching mark");
        self.outstanding -= 1;
    }

    fn text(&self, span: Span) -> String {
        let start = span.start.min(self.len) as usize;
        let end = span.end.min(self.len) as usize;
        if start >= end {
            return String::new();
        }
        self.chars[start..end].iter().collect()
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
