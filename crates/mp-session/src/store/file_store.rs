//! Directory-backed store: one file per key.

use crate::{KeyValueStore, Result as SessionResult, SessionError};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

/// Distinguishes temp files of overlapping writes within one process
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Persists each key as a file named after the key inside `dir`.
///
/// Writes are atomic: unique temp file, fsync, rename. The directory is created on
/// first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys become file names, so only `[A-Za-z0-9_.-]` is allowed and no leading dot.
    fn path_for(&self, key: &str) -> SessionResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !valid {
            return Err(SessionError::invalid_key(key));
        }

        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self.path_for(key)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::storage(key, path, e)),
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| SessionError::malformed(key, path))
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| SessionError::storage(key, self.dir.clone(), e))?;

        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let temp_path = self
            .dir
            .join(format!(".{key}.tmp.{}.{seq}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::storage(key, temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::storage(key, temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::storage(key, temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::storage(key, final_path.clone(), e)
        })?;

        debug!("Stored key '{key}' at {}", final_path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed key '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::storage(key, path, e)),
        }
    }
}
