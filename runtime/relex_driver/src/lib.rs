//! Token-recognition driver for generated lexers.
//!
//! [`TokenDriver`] turns repeated match attempts by a pluggable
//! [`PatternInterpreter`] into a token stream. The driver owns the
//! control protocol the generated rules rely on: when a token starts,
//! when it is actually emitted, how modes nest, and how matching resumes
//! after a recognition failure. What the rules themselves look like (a
//! rule-network simulation, a DFA, a hand-written matcher) is the
//! interpreter's business.
//!
//! Calls are synchronous and a driver is single-threaded: `next_token`
//! must not be re-entered on the same instance.
//!
//! Character streams and token construction come from `relex_core`.

mod driver;
mod error;
mod interp;
mod listener;
mod mode;

pub use driver::{DefaultHooks, DriverCore, LexerHooks, TokenDriver};
pub use error::{error_display, DriverError, MatchError, RecognitionError};
pub use interp::{MatchOutcome, PatternInterpreter};
pub use listener::{ConsoleListener, ErrorListener, ListenerDispatch, SyntaxError};
pub use mode::Mode;
