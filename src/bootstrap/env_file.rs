// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ordered `KEY=value` file

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{AgieError, AgieResult};

/// Ordered `.env` contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line; keys keep insertion order
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value recorded for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// File text, one `KEY=value` per line
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect()
    }

    /// Write to `path` through a temp file in the same directory
    ///
    /// The target is only replaced once the full contents are on disk. A
    /// replaced file keeps its permissions; a new file is readable by its
    /// owner only.
    pub fn write_atomic(&self, path: &Path) -> AgieResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(self.render().as_bytes())?;
        file.flush()?;
        if let Ok(existing) = std::fs::metadata(path) {
            file.as_file().set_permissions(existing.permissions())?;
        }
        file.persist(path)
            .map_err(|e| AgieError::Io(format!("{}: {}", path.display(), e.error)))?;

        debug!(path = %path.display(), lines = self.len(), "Env file written");
        Ok(())
    }
}
