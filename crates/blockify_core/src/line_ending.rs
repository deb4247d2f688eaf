//! Line-ending detection and normalization.
//!
//! The scanner only ever sees `\n` as a line terminator. Callers detect the
//! style of the original text first, normalize it, and restore the style on
//! the way out.

use memchr::memchr2;
use std::fmt;

/// The line terminator used by a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    /// `\r\n`
    CrLf,
    /// A lone `\r`.
    Cr,
    /// `\n`
    #[default]
    Lf,
}

impl LineEnding {
    /// Detect the style from the first terminator in `text`.
    ///
    /// A `\r` immediately followed by `\n` counts as CRLF, not as CR. Text
    /// without any terminator is treated as LF.
    pub fn detect(text: &str) -> Self {
        let bytes = text.as_bytes();
        match memchr2(b'\r', b'\n', bytes) {
            Some(i) if bytes[i] == b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    LineEnding::CrLf
                } else {
                    LineEnding::Cr
                }
            }
            _ => LineEnding::Lf,
        }
    }

    /// The terminator sequence for this style.
    #[inline]
    pub fn terminator(&self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
            LineEnding::Lf => "\n",
        }
    }

    /// Short name used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::CrLf => "CRLF",
            LineEnding::Cr => "CR",
            LineEnding::Lf => "LF",
        }
    }

    /// Rewrite every `\n` in normalized text to this style's terminator.
    pub fn restore(&self, text: &str) -> String {
        match self {
            LineEnding::Lf => text.to_string(),
            LineEnding::CrLf | LineEnding::Cr => text.replace('\n', self.terminator()),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite all `\r\n` and lone `\r` terminators to `\n`.
///
/// Normalizing text that only contains `\n` returns it unchanged.
pub fn normalize(text: &str) -> String {
    if memchr::memchr(b'\r', text.as_bytes()).is_none() {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
