//! Local flip cache.
//!
//! Flips are stored one per `*.json` file in a flat directory. Archiving
//! moves the current set into a timestamped subdirectory of `archive/`.

pub mod errors;

use std::path::{Path, PathBuf};

use chrono::Utc;

pub use errors::FlipError;

pub trait FlipStore: Send + Sync {
    /// Delete every stored flip. Returns how many were removed.
    fn clear(&self) -> Result<usize, FlipError>;

    /// Move every stored flip out of the active set. Returns how many moved.
    fn archive(&self) -> Result<usize, FlipError>;
}

#[derive(Debug, Clone)]
pub struct FsFlipStore {
    dir: PathBuf,
}

impl FsFlipStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data_dir>/flips`
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("flips"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn archive_root(&self) -> PathBuf {
        self.dir.join("archive")
    }

    /// Flip files currently in the active set, sorted by name.
    pub fn list(&self) -> Result<Vec<PathBuf>, FlipError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| FlipError::ReadFailed {
            path: self.dir.display().to_string(),
            source: e,
        })?;

        let mut flips = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FlipError::ReadFailed {
                path: self.dir.display().to_string(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                flips.push(path);
            }
        }
        flips.sort();
        Ok(flips)
    }
}

impl FlipStore for FsFlipStore {
    fn clear(&self) -> Result<usize, FlipError> {
        let flips = self.list()?;
        for path in &flips {
            std::fs::remove_file(path).map_err(|e| FlipError::RemoveFailed {
                path: path.display().to_string(),
                source: e,
            })?;
        }

        tracing::info!(
            event = "core.flips.clear_completed",
            dir = %self.dir.display(),
            count = flips.len()
        );
        Ok(flips.len())
    }

    fn archive(&self) -> Result<usize, FlipError> {
        let flips = self.list()?;
        if flips.is_empty() {
            tracing::info!(event = "core.flips.archive_skipped", reason = "no flips");
            return Ok(0);
        }

        let target = self
            .archive_root()
            .join(Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string());
        std::fs::create_dir_all(&target).map_err(|e| FlipError::ArchiveFailed {
            path: target.display().to_string(),
            source: e,
        })?;

        for path in &flips {
            let Some(name) = path.file_name() else {
                continue;
            };
            std::fs::rename(path, target.join(name)).map_err(|e| FlipError::ArchiveFailed {
                path: path.display().to_string(),
                source: e,
            })?;
        }

        tracing::info!(
            event = "core.flips.archive_completed",
            target = %target.display(),
            count = flips.len()
        );
        Ok(flips.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed(store: &FsFlipStore, names: &[&str]) {
        std::fs::create_dir_all(store.dir()).unwrap();
        for name in names {
            std::fs::write(store.dir().join(name), r#"{"images":[],"order":[]}"#).unwrap();
        }
    }

    #[test]
    fn test_list_ignores_non_json_and_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsFlipStore::in_data_dir(temp_dir.path());
        seed(&store, &["b.json", "a.json"]);
        std::fs::write(store.dir().join("notes.txt"), "x").unwrap();
        std::fs::create_dir_all(store.archive_root()).unwrap();

        let names: Vec<_> = store
            .list()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_clear_missing_dir_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsFlipStore::in_data_dir(temp_dir.path());
        assert_eq!(store.clear().unwrap(), 0);
    }

    #[test]
    fn test_clear_removes_flips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsFlipStore::in_data_dir(temp_dir.path());
        seed(&store, &["one.json", "two.json"]);

        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_archive_moves_flips_into_timestamped_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsFlipStore::in_data_dir(temp_dir.path());
        seed(&store, &["one.json", "two.json", "three.json"]);

        assert_eq!(store.archive().unwrap(), 3);
        assert!(store.list().unwrap().is_empty());

        let batches: Vec<_> = std::fs::read_dir(store.archive_root())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(batches.len(), 1);
        assert_eq!(std::fs::read_dir(&batches[0]).unwrap().count(), 3);
    }

    #[test]
    fn test_archive_without_flips_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsFlipStore::in_data_dir(temp_dir.path());
        seed(&store, &[]);

        assert_eq!(store.archive().unwrap(), 0);
        assert!(!store.archive_root().exists());
    }
}
