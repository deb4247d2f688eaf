//! Character constants the comment scanner dispatches on.

pub const LINE_FEED: char = '\n';
pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';
pub const SLASH: char = '/';
pub const BACKSLASH: char = '\\';
pub const BACKTICK: char = '`';

/// Opening marker written in place of `//`.
pub const BLOCK_COMMENT_OPEN: &str = "/*";
/// Closing marker appended before the line terminator.
pub const BLOCK_COMMENT_CLOSE: &str = " */";

/// Whether `ch` opens a string or template literal.
#[inline]
pub fn is_quote(ch: char) -> bool {
    matches!(ch, SINGLE_QUOTE | DOUBLE_QUOTE | BACKTICK)
}
