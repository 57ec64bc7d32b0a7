//! Lexer modes.

use std::fmt;

/// Identifier for the set of rules currently eligible to match.
///
/// Modes are plain identifiers assigned by the generator; switching modes
/// changes which rules the interpreter may match. The reserved
/// [`Mode::DEFAULT`] is distinct from every grammar-defined mode.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Mode(pub u32);

impl Mode {
    /// Mode active before any grammar-defined switch.
    pub const DEFAULT: Mode = Mode(0);
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
