//! blockify_diagnostics: Per-file errors and outcome reports.
//!
//! Every path handed to the converter ends in exactly one [`FileReport`].
//! Failures never cross file boundaries; a [`ReportCollection`] only
//! aggregates them for summaries.

use blockify_core::LineEnding;
use miette::Diagnostic;
use std::fmt;
use std::io;

/// The file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathOp {
    Stat,
    Read,
    Write,
}

impl fmt::Display for PathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOp::Stat => write!(f, "accessing"),
            PathOp::Read => write!(f, "reading"),
            PathOp::Write => write!(f, "writing"),
        }
    }
}

/// Why a single file was not converted.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConvertError {
    /// Stat, read or write failed for the path.
    #[error("Error {op} file \"{path}\"")]
    #[diagnostic(
        code(blockify::path_access),
        help("check that the path exists and is readable and writable")
    )]
    PathAccess {
        path: String,
        op: PathOp,
        #[source]
        source: io::Error,
    },

    /// The path exists but is not a regular file.
    #[error("Skipping \"{path}\": Not a file.")]
    #[diagnostic(
        code(blockify::not_a_file),
        severity(Warning),
        help("pass individual files; directories are not walked")
    )]
    NotAFile { path: String },

    /// The file content is not valid UTF-8. The file is left untouched.
    #[error("Error decoding file \"{path}\": not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    #[diagnostic(
        code(blockify::invalid_encoding),
        help("only UTF-8 source files can be converted")
    )]
    InvalidEncoding { path: String, valid_up_to: usize },
}

impl ConvertError {
    pub fn path_access(path: impl Into<String>, op: PathOp, source: io::Error) -> Self {
        ConvertError::PathAccess {
            path: path.into(),
            op,
            source,
        }
    }

    /// The path as the user gave it.
    pub fn path(&self) -> &str {
        match self {
            ConvertError::PathAccess { path, .. }
            | ConvertError::NotAFile { path }
            | ConvertError::InvalidEncoding { path, .. } => path,
        }
    }

    /// One-line message including the underlying I/O error, if any.
    pub fn describe(&self) -> String {
        match self {
            ConvertError::PathAccess { source, .. } => format!("{}: {}", self, source),
            _ => self.to_string(),
        }
    }
}

/// Outcome category, used for counting and colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Converted,
    Skipped,
    Failed,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeKind::Converted => write!(f, "converted"),
            OutcomeKind::Skipped => write!(f, "skipped"),
            OutcomeKind::Failed => write!(f, "failed"),
        }
    }
}

/// What happened to one path.
#[derive(Debug)]
pub enum Outcome {
    /// The file was rewritten in place.
    Converted {
        comments: usize,
        line_ending: LineEnding,
    },
    /// The path was not a regular file.
    Skipped(ConvertError),
    /// Stat, read, decode or write failed.
    Failed(ConvertError),
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Converted { .. } => OutcomeKind::Converted,
            Outcome::Skipped(_) => OutcomeKind::Skipped,
            Outcome::Failed(_) => OutcomeKind::Failed,
        }
    }

    pub fn error(&self) -> Option<&ConvertError> {
        match self {
            Outcome::Converted { .. } => None,
            Outcome::Skipped(err) | Outcome::Failed(err) => Some(err),
        }
    }
}

impl From<ConvertError> for Outcome {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::NotAFile { .. } => Outcome::Skipped(err),
            _ => Outcome::Failed(err),
        }
    }
}

/// The outcome for one path, keyed by the path as the user gave it.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub outcome: Outcome,
}

impl FileReport {
    pub fn new(path: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        self.outcome.kind()
    }

    pub fn is_failure(&self) -> bool {
        self.kind() == OutcomeKind::Failed
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Converted { .. } => {
                write!(f, "Converted comments in \"{}\" successfully.", self.path)
            }
            Outcome::Skipped(err) | Outcome::Failed(err) => write!(f, "{}", err.describe()),
        }
    }
}

/// Reports accumulated over one run.
#[derive(Debug, Default)]
pub struct ReportCollection {
    reports: Vec<FileReport>,
}

impl ReportCollection {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    pub fn add(&mut self, report: FileReport) {
        self.reports.push(report);
    }

    fn count(&self, kind: OutcomeKind) -> usize {
        self.reports.iter().filter(|r| r.kind() == kind).count()
    }

    pub fn converted_count(&self) -> usize {
        self.count(OutcomeKind::Converted)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(OutcomeKind::Skipped)
    }

    pub fn failed_count(&self) -> usize {
        self.count(OutcomeKind::Failed)
    }

    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(FileReport::is_failure)
    }

    /// Total comments rewritten across all converted files.
    pub fn comment_count(&self) -> usize {
        self.reports
            .iter()
            .map(|r| match r.outcome {
                Outcome::Converted { comments, .. } => comments,
                _ => 0,
            })
            .sum()
    }

    pub fn reports(&self) -> &[FileReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<FileReport> {
        self.reports
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Sort reports by path. Completion order is otherwise arbitrary.
    pub fn sort(&mut self) {
        self.reports.sort_by(|a, b| a.path.cmp(&b.path));
    }
}
