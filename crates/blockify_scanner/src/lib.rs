//! blockify_scanner: Single-line to block comment rewriter.
//!
//! Walks `\n`-normalized source text once and rewrites every `// ...`
//! comment as `/* ... */`. Quoted literals (`'`, `"` and backticks) are
//! copied through untouched, so `//` inside a string is never converted.
//!
//! Not handled:
//! - block comments (an existing `/* ... */` is plain text to the scanner)
//! - regular expression literals
//! - `${...}` interpolation inside template literals

mod char_codes;
mod scanner;

pub use scanner::{convert, Conversion, ScanState, Scanner};
