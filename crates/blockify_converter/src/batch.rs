//! Batch orchestration.
//!
//! Spawns one task per path argument and collects the reports as the tasks
//! finish.

use crate::pipeline::process_path;
use crate::storage::{FsStorage, Storage};
use blockify_diagnostics::{FileReport, ReportCollection};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::error;

/// A set of path arguments to convert in place.
pub struct Batch<S: ?Sized = FsStorage> {
    /// Where files are read from and written to.
    storage: Arc<S>,
    /// The path arguments, as given.
    files: Vec<String>,
}

impl Batch<FsStorage> {
    /// Create a batch over the local file system.
    pub fn new(files: Vec<String>) -> Self {
        Self::with_storage(Arc::new(FsStorage), files)
    }
}

impl<S: Storage + ?Sized + 'static> Batch<S> {
    pub fn with_storage(storage: Arc<S>, files: Vec<String>) -> Self {
        Self { storage, files }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Convert every file concurrently.
    ///
    /// `on_report` sees each report as soon as its file finishes, so output
    /// follows completion order. The returned collection holds them all.
    pub async fn run(self, mut on_report: impl FnMut(&FileReport)) -> ReportCollection {
        let mut tasks = JoinSet::new();
        for arg in self.files {
            let storage = Arc::clone(&self.storage);
            tasks.spawn(async move { process_path(storage.as_ref(), arg).await });
        }

        let mut reports = ReportCollection::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(report) => {
                    on_report(&report);
                    reports.add(report);
                }
                Err(e) => error!(error = %e, "conversion task did not complete"),
            }
        }
        reports
    }
}
