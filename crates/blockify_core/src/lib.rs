//! blockify_core: Text primitives shared by the comment converter.
//!
//! Provides line-ending detection and normalization, plus the span and
//! line-map types used to locate converted comments.

pub mod line_ending;
pub mod text;

// Re-export commonly used types
pub use line_ending::{normalize, LineEnding};
pub use text::{LineMap, TextPos, TextSpan};
