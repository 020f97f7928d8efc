//! Output persistence.
//!
//! Every processed image gets its own file named after the request id, so
//! concurrent requests never write to or read from the same path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Where processed images end up on disk.
#[derive(Debug, Clone)]
pub struct OutputStore {
    dir: PathBuf,
    enabled: bool,
}

impl OutputStore {
    /// Create a store rooted at `dir`. Nothing touches the filesystem until
    /// [`OutputStore::prepare`] is called.
    pub fn new(dir: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            dir: dir.into(),
            enabled,
        }
    }

    /// Create the output directory if it does not exist yet.
    ///
    /// Called once at startup before the server accepts connections.
    /// Calling it again is harmless.
    pub fn prepare(&self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        fs::create_dir_all(&self.dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Path a given request's output is written to.
    pub fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("processed-{}.jpg", id.as_hyphenated()))
    }

    /// Write one request's JPEG bytes. Returns the path written, or `None`
    /// when persistence is disabled.
    pub fn persist(&self, id: Uuid, jpeg: &[u8]) -> io::Result<Option<PathBuf>> {
        if !self.enabled {
            return Ok(None);
        }
        let path = self.path_for(id);
        fs::write(&path, jpeg)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = OutputStore::new(tmp.path().join("static/uploads"), true);

        store.prepare().unwrap();
        store.prepare().unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_unique_paths_per_request() {
        let store = OutputStore::new("out", true);
        let a = store.path_for(Uuid::new_v4());
        let b = store.path_for(Uuid::new_v4());

        assert_ne!(a, b);
        assert!(a.starts_with("out"));
        assert_eq!(a.extension().unwrap(), "jpg");
    }

    #[test]
    fn test_persist_writes_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = OutputStore::new(tmp.path(), true);
        let id = Uuid::new_v4();

        let path = store.persist(id, b"\xFF\xD8data\xFF\xD9").unwrap().unwrap();
        assert_eq!(path, store.path_for(id));
        assert_eq!(fs::read(path).unwrap(), b"\xFF\xD8data\xFF\xD9");
    }

    #[test]
    fn test_disabled_store_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = OutputStore::new(tmp.path().join("never"), false);

        store.prepare().unwrap();
        assert!(store.persist(Uuid::new_v4(), b"x").unwrap().is_none());
        assert!(!tmp.path().join("never").exists());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = OutputStore::new(tmp.path().join("not-prepared"), true);

        let err = store.persist(Uuid::new_v4(), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
