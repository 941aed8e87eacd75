//! Filesystem capabilities for changie.
//!
//! Reads, writes, and directory listings go through narrow one-method traits
//! so the configuration engine stays a pure function of its inputs and tests
//! can substitute in-memory fakes. [`OsFs`] is the production implementation,
//! backed by atomic writes.

pub mod atomic;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Permission mode for files created by changie (rw-r--r--).
pub const CREATE_FILE_MODE: u32 = 0o644;

/// Permission mode for directories created by changie (rwxr-xr-x).
pub const CREATE_DIR_MODE: u32 = 0o755;

/// Capability to read a file's bytes.
pub trait FileReader {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Capability to write a file with a permission mode.
///
/// The mode is applied on Unix; other platforms ignore it.
pub trait FileWriter {
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;
}

/// Capability to enumerate the entries of a directory.
pub trait DirLister {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Production filesystem backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileReader for OsFs {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

impl FileWriter for OsFs {
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        atomic::atomic_write(path, contents, mode)
    }
}

impl DirLister for OsFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            entries.push(entry?.path());
        }
        // Directory iteration order is platform-dependent
        entries.sort();
        Ok(entries)
    }
}
