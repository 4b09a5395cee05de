pub mod cache;
pub mod entry;
#[cfg(test)]
pub mod fake;
pub mod lister;

pub use cache::FolderCache;
pub use lister::{FileSystem, FsError, OsFileSystem};
