//! Single-instance PID lock, acquired first thing on CLI startup (§4.8).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::error::{EngineError, Result};

/// Holds an exclusive advisory lock on `pidfile` for the process lifetime.
/// The lock (and the file) is released when this guard is dropped.
pub struct PidLock {
    path: PathBuf,
    file: File,
}

impl PidLock {
    pub fn acquire(pidfile: impl AsRef<Path>) -> Result<Self> {
        let path = pidfile.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(&path)?;

        file.try_lock_exclusive()
            .map_err(|_| EngineError::Locked(path.clone()))?;

        file.set_len(0)?;
        writeln!(file, "{}", std::process::id())?;

        Ok(Self { path, file })
    }
}

impl Drop for PidLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
        let _ = std::fs::remove_file(&self.path);
    }
}
