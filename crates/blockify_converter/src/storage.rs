//! Storage seam consumed by the pipeline.

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

impl EntryKind {
    pub fn is_file(&self) -> bool {
        *self == EntryKind::File
    }
}

/// Where source files are read from and written back to.
///
/// Implementations perform no retries; every error is handed back to the
/// caller for the path it concerns.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn stat(&self, path: &Path) -> io::Result<EntryKind>;

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the content at `path`. No backup or atomic rename is made.
    async fn write(&self, path: &Path, text: &str) -> io::Result<()>;
}

/// The local file system, via `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

#[async_trait]
impl Storage for FsStorage {
    async fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(if metadata.is_file() {
            EntryKind::File
        } else if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        })
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        tokio::fs::write(path, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fs_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.js");
        let storage = FsStorage;

        storage.write(&path, "x; // y\n").await.unwrap();
        assert_eq!(storage.stat(&path).await.unwrap(), EntryKind::File);
        assert_eq!(storage.read(&path).await.unwrap(), b"x; // y\n");
        assert_eq!(storage.stat(dir.path()).await.unwrap(), EntryKind::Directory);
    }

    #[tokio::test]
    async fn test_fs_storage_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsStorage.stat(&dir.path().join("missing.js")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
