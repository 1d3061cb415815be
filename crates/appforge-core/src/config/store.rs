//! On-disk config artifact store
//!
//! Every artifact is addressed by its path relative to the store root (the
//! project destination). Features mutate shared files exclusively through
//! `update`/`update_required`, so each one observes the cumulative state
//! left by the features that ran before it. Saves write a sibling temp file
//! and rename it into place, so a crash mid-write leaves the previous valid
//! file intact.

use crate::error::ScaffoldError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Read/modify/write access to config artifacts under a single root
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of an artifact
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Load a JSON artifact, falling back to its default shape when the file
    /// does not exist
    pub fn load<T>(&self, rel: &str) -> Result<T, ScaffoldError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(rel);
        if !path.exists() {
            return Ok(T::default());
        }
        Self::parse(&path)
    }

    /// Load a JSON artifact that must already exist
    pub fn load_required<T>(&self, rel: &str) -> Result<T, ScaffoldError>
    where
        T: DeserializeOwned,
    {
        let path = self.path(rel);
        if !path.exists() {
            return Err(ScaffoldError::MissingBaseConfig(path));
        }
        Self::parse(&path)
    }

    fn parse<T: DeserializeOwned>(path: &Path) -> Result<T, ScaffoldError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| ScaffoldError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save a JSON artifact, replacing the previous file only once the new
    /// contents are fully written
    pub fn save<T: Serialize>(&self, rel: &str, value: &T) -> Result<(), ScaffoldError> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }

        let mut contents = serde_json::to_string_pretty(value).map_err(|e| {
            ScaffoldError::ConfigWrite {
                path: path.clone(),
                source: e,
            }
        })?;
        contents.push('\n');

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "artifact".to_string());
        let tmp = path.with_file_name(format!("{}.tmp", file_name));

        std::fs::write(&tmp, contents).map_err(|e| ScaffoldError::io(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| ScaffoldError::io(&path, e))?;
        Ok(())
    }

    /// Load, apply a patch in memory, save. Missing files start from the
    /// artifact's default shape.
    pub fn update<T>(&self, rel: &str, patch: impl FnOnce(&mut T)) -> Result<(), ScaffoldError>
    where
        T: DeserializeOwned + Default + Serialize,
    {
        let mut value: T = self.load(rel)?;
        patch(&mut value);
        self.save(rel, &value)
    }

    /// Like `update`, but the artifact must already exist
    pub fn update_required<T>(
        &self,
        rel: &str,
        patch: impl FnOnce(&mut T),
    ) -> Result<(), ScaffoldError>
    where
        T: DeserializeOwned + Serialize,
    {
        let mut value: T = self.load_required(rel)?;
        patch(&mut value);
        self.save(rel, &value)
    }

    /// Write a plain-text artifact verbatim
    pub fn write_text(&self, rel: &str, contents: &str) -> Result<(), ScaffoldError> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }
        std::fs::write(&path, contents).map_err(|e| ScaffoldError::io(&path, e))
    }

    /// Create a directory (and parents). Already existing is fine; re-runs
    /// keep whatever the directory holds.
    pub fn ensure_dir(&self, rel: &str) -> Result<(), ScaffoldError> {
        let path = self.path(rel);
        if path.exists() {
            if path.is_dir() {
                return Ok(());
            }
            return Err(ScaffoldError::DirectoryCollision(path));
        }
        std::fs::create_dir_all(&path).map_err(|e| ScaffoldError::io(&path, e))
    }

    /// Remove a directory tree; absent directories are a no-op
    pub fn remove_dir(&self, rel: &str) -> Result<(), ScaffoldError> {
        let path = self.path(rel);
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_dir_all(&path).map_err(|e| ScaffoldError::io(&path, e))
    }
}
