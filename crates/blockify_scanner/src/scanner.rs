//! The comment-conversion scanner.
//!
//! A forward-only state machine with one character of lookahead. It never
//! backtracks and never fails: unterminated strings and comments simply run
//! to the end of the input.

use crate::char_codes::*;
use blockify_core::text::{TextPos, TextSpan};

/// The active mode of the scanner at a given input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Ordinary source text.
    Normal,
    /// Inside a quoted literal opened by `quote`.
    InString { quote: char },
    /// Between `//` and the end of the line.
    InSingleLineComment,
}

/// The result of one conversion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The converted, still `\n`-normalized text.
    pub text: String,
    /// Spans of every block comment produced, from `/*` through `*/`,
    /// as byte offsets into `text`.
    pub comments: Vec<TextSpan>,
}

impl Conversion {
    /// Number of single-line comments that were rewritten.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Whether the pass changed anything.
    pub fn is_unchanged(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Rewrites `// ...` comments into `/* ... */` comments.
pub struct Scanner {
    /// The normalized source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// The current scan state.
    state: ScanState,
    /// Converted text assembled so far.
    output: String,
    /// Output offset of the `/*` for the comment being scanned.
    comment_start: TextPos,
    /// Finished block comments.
    comments: Vec<TextSpan>,
}

impl Scanner {
    /// Create a new scanner for `\n`-normalized source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            state: ScanState::Normal,
            output: String::with_capacity(text.len()),
            comment_start: 0,
            comments: Vec::new(),
        }
    }

    /// Run the pass to completion.
    pub fn convert(mut self) -> Conversion {
        while let Some(ch) = self.current_char() {
            self.step(ch);
        }
        // A comment on the last line still needs its closing marker, but
        // no newline is invented for it.
        if self.state == ScanState::InSingleLineComment {
            self.close_comment();
        }
        Conversion {
            text: self.output,
            comments: self.comments,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Copy `ch` to the output and advance past it.
    #[inline]
    fn emit(&mut self, ch: char) {
        self.output.push(ch);
        self.pos += 1;
    }

    /// Consume the character at the current position.
    fn step(&mut self, ch: char) {
        match self.state {
            ScanState::Normal => {
                if ch == SLASH && self.char_at(1) == Some(SLASH) {
                    self.comment_start = self.output.len();
                    self.output.push_str(BLOCK_COMMENT_OPEN);
                    self.pos += 2;
                    self.state = ScanState::InSingleLineComment;
                } else if is_quote(ch) {
                    self.emit(ch);
                    self.state = ScanState::InString { quote: ch };
                } else {
                    // Includes a lone `/`: division and regex are not told apart.
                    self.emit(ch);
                }
            }
            ScanState::InString { quote } => {
                if ch == BACKSLASH {
                    self.output.push(ch);
                    if let Some(escaped) = self.char_at(1) {
                        self.output.push(escaped);
                    }
                    self.pos += 2;
                } else if ch == quote {
                    self.emit(ch);
                    self.state = ScanState::Normal;
                } else {
                    self.emit(ch);
                }
            }
            ScanState::InSingleLineComment => {
                if ch == LINE_FEED {
                    self.close_comment();
                }
                self.emit(ch);
            }
        }
    }

    /// Append ` */`, record the finished comment and return to `Normal`.
    fn close_comment(&mut self) {
        self.output.push_str(BLOCK_COMMENT_CLOSE);
        let end = self.output.len();
        self.comments.push(TextSpan::from_bounds(self.comment_start, end));
        self.state = ScanState::Normal;
    }
}

/// Convert every single-line comment in `\n`-normalized `text`.
pub fn convert(text: &str) -> String {
    Scanner::new(text).convert().into_text()
}
