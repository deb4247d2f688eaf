//! blockify_converter: File pipeline around the comment scanner.
//!
//! Each path runs its own stat -> read -> convert -> write chain as an
//! independent tokio task. Nothing is shared between files except the
//! [`Storage`] handle, so one file's failure never affects another.

mod batch;
mod pipeline;
mod storage;

pub use batch::Batch;
pub use pipeline::{convert_source, decode, process_file, process_path, FileJob, SourceConversion};
pub use storage::{EntryKind, FsStorage, Storage};
