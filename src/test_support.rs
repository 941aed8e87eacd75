//! Shared test fixtures: in-memory capability fakes and a cwd guard.

use crate::fs::{DirLister, FileReader, FileWriter};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Changes the process working directory for the guard's lifetime.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not
        // thread-safe. Lock it so tests don't race even if a #[serial]
        // annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A write observed by [`MemFs`].
#[derive(Debug, Clone)]
pub(crate) struct WriteCall {
    pub path: PathBuf,
    pub contents: Vec<u8>,
    pub mode: u32,
}

/// An in-memory filesystem implementing the capability traits.
///
/// Reads and listings serve the seeded file map; writes land in the map and
/// are also recorded with their mode so tests can assert on the exact side
/// effects. Paths can additionally be seeded to fail with a specific error
/// kind.
#[derive(Debug, Default)]
pub(crate) struct MemFs {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    failures: RefCell<BTreeMap<PathBuf, io::ErrorKind>>,
    writes: RefCell<Vec<WriteCall>>,
}

impl MemFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seed(&self, path: &str, contents: &str) {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), contents.as_bytes().to_vec());
    }

    pub(crate) fn seed_failure(&self, path: &str, kind: io::ErrorKind) {
        self.failures.borrow_mut().insert(PathBuf::from(path), kind);
    }

    pub(crate) fn contents(&self, path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(Path::new(path))
            .map(|raw| String::from_utf8_lossy(raw).into_owned())
    }

    pub(crate) fn writes(&self) -> Vec<WriteCall> {
        self.writes.borrow().clone()
    }
}

impl FileReader for MemFs {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        if let Some(kind) = self.failures.borrow().get(path) {
            return Err(io::Error::new(*kind, format!("{}: seeded failure", path.display())));
        }

        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such file", path.display()),
            )
        })
    }
}

impl FileWriter for MemFs {
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        if let Some(kind) = self.failures.borrow().get(path) {
            return Err(io::Error::new(*kind, format!("{}: seeded failure", path.display())));
        }

        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        self.writes.borrow_mut().push(WriteCall {
            path: path.to_path_buf(),
            contents: contents.to_vec(),
            mode,
        });
        Ok(())
    }
}

impl DirLister for MemFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let files = self.files.borrow();
        let mut entries: Vec<PathBuf> = files
            .keys()
            .filter(|candidate| candidate.parent() == Some(path))
            .cloned()
            .collect();
        entries.sort();
        Ok(entries)
    }
}
