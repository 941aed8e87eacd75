//! Atomic file writes for changie.
//!
//! Writes go to a temporary file in the target directory, are synced to
//! disk, and then renamed over the target, so the configuration file is
//! never observable in a half-written state. A crash can leave a stale
//! `.{filename}.tmp` behind but never a corrupt target.
//!
//! Rename is atomic on POSIX when source and destination share a
//! filesystem. On other platforms an existing target is removed first,
//! which is close enough for a single-process CLI.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, applying `mode` on Unix.
///
/// Missing parent directories are created with [`super::CREATE_DIR_MODE`].
pub fn atomic_write(path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        create_dir_all_with_mode(parent)?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, contents, mode)?;
    replace(&temp_path, path)
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid file path"))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file, apply the permission mode, and sync to disk.
fn write_and_sync(path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
    let mut file = File::create(path)?;

    let result = file
        .write_all(contents)
        .and_then(|()| set_mode(&file, mode))
        .and_then(|()| file.sync_all());

    if let Err(err) = result {
        // Don't leave a partial temp file behind
        let _ = fs::remove_file(path);
        return Err(err);
    }

    Ok(())
}

#[cfg(unix)]
fn set_mode(file: &File, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &File, _mode: u32) -> io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn create_dir_all_with_mode(path: &Path) -> io::Result<()> {
    use std::fs::DirBuilder;
    use std::os::unix::fs::DirBuilderExt;
    DirBuilder::new()
        .recursive(true)
        .mode(super::CREATE_DIR_MODE)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_all_with_mode(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Replace the target file with the source file.
#[cfg(unix)]
fn replace(source: &Path, target: &Path) -> io::Result<()> {
    // rename() replaces the destination atomically on POSIX
    if let Err(err) = fs::rename(source, target) {
        let _ = fs::remove_file(source);
        return Err(err);
    }

    // Persist the directory entry as well
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(not(unix))]
fn replace(source: &Path, target: &Path) -> io::Result<()> {
    if target.exists() {
        fs::remove_file(target)?;
    }

    if let Err(err) = fs::rename(source, target) {
        let _ = fs::remove_file(source);
        return Err(err);
    }

    Ok(())
}
