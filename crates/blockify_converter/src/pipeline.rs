//! Single-file conversion: stat, read, decode, convert, write.

use crate::storage::Storage;
use blockify_core::{normalize, LineEnding, LineMap, TextSpan};
use blockify_diagnostics::{ConvertError, FileReport, Outcome, PathOp};
use blockify_scanner::Scanner;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A path argument and the absolute path it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    /// The argument as given, used in every message about this file.
    pub arg: String,
    /// Absolute path used for all storage calls.
    pub path: PathBuf,
}

impl FileJob {
    /// Resolve `arg` against the current directory. The path does not need
    /// to exist yet.
    pub fn resolve(arg: impl Into<String>) -> Result<Self, ConvertError> {
        let arg = arg.into();
        let path = Path::new(&arg);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(path),
                Err(e) => return Err(ConvertError::path_access(arg, PathOp::Stat, e)),
            }
        };
        Ok(Self { arg, path })
    }

    /// A job with an already-resolved path.
    pub fn with_path(arg: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            arg: arg.into(),
            path: path.into(),
        }
    }
}

/// Converted source text in its original line-ending style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConversion {
    pub text: String,
    pub line_ending: LineEnding,
    /// Block comment spans in the normalized output.
    pub comments: Vec<TextSpan>,
}

/// Detect, normalize, convert and restore one source text.
pub fn convert_source(source: &str) -> SourceConversion {
    let line_ending = LineEnding::detect(source);
    let normalized = normalize(source);
    let conversion = Scanner::new(&normalized).convert();

    if tracing::enabled!(tracing::Level::DEBUG) {
        let lines = LineMap::new(&conversion.text);
        for span in &conversion.comments {
            debug!(line = lines.line_of(span.start) + 1, span = %span, "converted comment");
        }
    }

    SourceConversion {
        text: line_ending.restore(&conversion.text),
        line_ending,
        comments: conversion.comments,
    }
}

/// Decode file bytes as UTF-8.
pub fn decode(arg: &str, bytes: &[u8]) -> Result<String, ConvertError> {
    match simdutf8::compat::from_utf8(bytes) {
        Ok(text) => Ok(text.to_owned()),
        Err(e) => Err(ConvertError::InvalidEncoding {
            path: arg.to_string(),
            valid_up_to: e.valid_up_to(),
        }),
    }
}

async fn run_job<S: Storage + ?Sized>(storage: &S, job: &FileJob) -> Result<Outcome, ConvertError> {
    let kind = storage
        .stat(&job.path)
        .await
        .map_err(|e| ConvertError::path_access(&job.arg, PathOp::Stat, e))?;
    if !kind.is_file() {
        return Err(ConvertError::NotAFile {
            path: job.arg.clone(),
        });
    }

    let bytes = storage
        .read(&job.path)
        .await
        .map_err(|e| ConvertError::path_access(&job.arg, PathOp::Read, e))?;
    let source = decode(&job.arg, &bytes)?;

    let converted = convert_source(&source);

    storage
        .write(&job.path, &converted.text)
        .await
        .map_err(|e| ConvertError::path_access(&job.arg, PathOp::Write, e))?;

    Ok(Outcome::Converted {
        comments: converted.comments.len(),
        line_ending: converted.line_ending,
    })
}

/// Run the full chain for one resolved file. Never fails; the outcome is in
/// the report.
pub async fn process_file<S: Storage + ?Sized>(storage: &S, job: &FileJob) -> FileReport {
    let outcome = match run_job(storage, job).await {
        Ok(outcome) => outcome,
        Err(err) => err.into(),
    };

    match &outcome {
        Outcome::Converted {
            comments,
            line_ending,
        } => info!(path = %job.path.display(), comments, %line_ending, "converted file"),
        Outcome::Skipped(_) => debug!(path = %job.path.display(), "skipped non-file"),
        Outcome::Failed(err) => warn!(path = %job.path.display(), error = %err.describe(), "conversion failed"),
    }

    FileReport::new(job.arg.clone(), outcome)
}

/// Resolve a path argument and process it.
pub async fn process_path<S: Storage + ?Sized>(storage: &S, arg: String) -> FileReport {
    match FileJob::resolve(arg.clone()) {
        Ok(job) => process_file(storage, &job).await,
        Err(err) => FileReport::new(arg, err.into()),
    }
}
