//! Filesystem gateway.
//!
//! Thin wrappers over `std::fs` with the create-new semantics scaffolding
//! relies on. Callers attach artifact identity to failures; this layer
//! reports the raw `std::io::Error`.

use std::path::Path;

/// Create a new empty file. Fails if `path` already exists; scaffolding
/// never overwrites.
pub fn create_file(path: &Path) -> std::io::Result<()> {
    std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
}

/// Create a single directory. Fails if it already exists or the parent is
/// missing.
pub fn create_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir(path)
}

/// Replace the content of an existing file.
pub fn put_contents(path: &Path, data: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, data)
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
