// File import: copy a user-selected audio file into the application cache
mod scoped;

pub use scoped::ScopedSource;

use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Fixed-name subdirectory under the user cache area holding imported audiobooks
pub const CACHE_SUBDIR: &str = "AudiobookPlayer";

/// Errors from the import-and-cache workflow
#[derive(Debug)]
pub enum ImportError {
    /// Scoped read access to the selected file could not be started
    AccessDenied { path: PathBuf, source: io::Error },
    /// Removing the stale copy or copying the source bytes failed
    CopyFailed { dest: PathBuf, source: io::Error },
    /// The user cache area is missing or the subdirectory cannot be created
    CacheDirUnavailable(io::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessDenied { path, source } => {
                write!(f, "failed to get access to file at {}: {source}", path.display())
            }
            Self::CopyFailed { dest, source } => {
                write!(f, "error copying file to {}: {source}", dest.display())
            }
            Self::CacheDirUnavailable(source) => {
                write!(f, "could not access or create cache subdirectory: {source}")
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AccessDenied { source, .. }
            | Self::CopyFailed { source, .. }
            | Self::CacheDirUnavailable(source) => Some(source),
        }
    }
}

/// Resolve (creating if absent) the application cache directory.
///
/// The whole import workflow depends on this directory, so resolution happens
/// once at startup and a failure is treated as fatal by the caller.
///
/// # Errors
/// Returns [`ImportError::CacheDirUnavailable`] if the platform has no user
/// cache area or the subdirectory cannot be created.
pub fn resolve_cache_dir() -> Result<PathBuf, ImportError> {
    let base = dirs::cache_dir().ok_or_else(|| {
        ImportError::CacheDirUnavailable(io::Error::new(
            io::ErrorKind::NotFound,
            "no user cache directory on this platform",
        ))
    })?;
    ensure_cache_dir(&base)
}

fn ensure_cache_dir(base: &Path) -> Result<PathBuf, ImportError> {
    let dir = base.join(CACHE_SUBDIR);
    fs::create_dir_all(&dir).map_err(ImportError::CacheDirUnavailable)?;
    Ok(dir)
}

/// Copy `source` into `cache_dir`, keeping its base name.
///
/// A file already cached under the same name is deleted first, so re-importing
/// the same name overwrites the previous copy. On any failure the destination
/// is left without a partial copy and the previous selection state of the
/// caller stays valid.
///
/// # Errors
/// [`ImportError::AccessDenied`] when the source cannot be opened for reading,
/// [`ImportError::CopyFailed`] when the stale-copy delete or the byte copy fails.
pub fn import_to_cache(source: &Path, cache_dir: &Path) -> Result<PathBuf, ImportError> {
    // Acquire scoped read access; the guard releases it on every exit path
    // of the copy stage below.
    let access = ScopedSource::acquire(source).map_err(|e| ImportError::AccessDenied {
        path: source.to_path_buf(),
        source: e,
    })?;

    copy_into_cache(access, cache_dir)
}

fn copy_into_cache(mut access: ScopedSource, cache_dir: &Path) -> Result<PathBuf, ImportError> {
    let file_name = access
        .path()
        .file_name()
        .ok_or_else(|| ImportError::AccessDenied {
            path: access.path().to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
        })?
        .to_owned();

    let dest = cache_dir.join(&file_name);
    if dest.exists() {
        // Same name overwrites: remove the stale copy, no backup.
        fs::remove_file(&dest).map_err(|e| ImportError::CopyFailed {
            dest: dest.clone(),
            source: e,
        })?;
    }

    match copy_bytes(access.reader(), &dest) {
        Ok(bytes) => {
            log::info!(
                "Imported {} ({bytes} bytes) to {}",
                file_name.to_string_lossy(),
                dest.display()
            );
            Ok(dest)
        }
        Err(e) => {
            // No partial state: drop the half-written destination.
            let _ = fs::remove_file(&dest);
            Err(ImportError::CopyFailed { dest, source: e })
        }
    }
}

fn copy_bytes(reader: &mut File, dest: &Path) -> io::Result<u64> {
    let mut out = File::create(dest)?;
    io::copy(reader, &mut out)
}
