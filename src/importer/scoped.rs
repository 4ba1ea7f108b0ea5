use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary read access to a user-granted file.
///
/// Opening the handle is the acquire step; dropping the guard is the single
/// release point. The access is therefore released exactly once on every exit
/// path of the import workflow, including early returns on a failed copy.
pub struct ScopedSource {
    file: File,
    path: PathBuf,
    #[cfg(test)]
    release_probe: Option<Box<dyn FnOnce()>>,
}

impl ScopedSource {
    /// Acquire read access to the file at `path`
    pub fn acquire(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        log::debug!("Acquired scoped read access to {}", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
            #[cfg(test)]
            release_probe: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The open handle backing the scoped access, used for the byte copy
    pub fn reader(&mut self) -> &mut File {
        &mut self.file
    }

    #[cfg(test)]
    pub(crate) fn set_release_probe(&mut self, probe: Box<dyn FnOnce()>) {
        self.release_probe = Some(probe);
    }
}

impl Drop for ScopedSource {
    fn drop(&mut self) {
        log::debug!("Released scoped read access to {}", self.path.display());
        #[cfg(test)]
        if let Some(probe) = self.release_probe.take() {
            probe();
        }
    }
}

impl std::fmt::Debug for ScopedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedSource")
            .field("path", &self.path)
            .finish()
    }
}
