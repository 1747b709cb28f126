//! Project-level filesystem operations.
//!
//! This port provides file I/O scoped to the project root. It knows nothing
//! about controllers, routes, or constants; those belong to the domain.

use crate::domain::AppError;

/// Port for filesystem operations under the project root.
///
/// All `path` arguments are `/`-separated and relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Remove a file. No-op if the file does not exist.
    fn remove_file(&self, path: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Read a file if it exists.
    fn read_file_if_exists(&self, path: &str) -> Result<Option<String>, AppError> {
        if !self.file_exists(path) {
            return Ok(None);
        }
        self.read_file(path).map(Some)
    }

    /// Append to a file while holding an exclusive lock on it.
    ///
    /// The file (and its parent directories) is created if absent. `compute`
    /// receives the current content under the lock and returns the text to
    /// append; an empty string leaves the file untouched. The append is
    /// flushed to disk before the lock is released, and any failure is
    /// returned rather than reported as success.
    fn append_locked(
        &self,
        path: &str,
        compute: &mut dyn FnMut(&str) -> String,
    ) -> Result<(), AppError>;
}
