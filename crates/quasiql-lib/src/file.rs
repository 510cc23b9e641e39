//! Files handed to the parser and their cache identity.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A source file, relative to the base directory of the parser that reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    pub rel_path: PathBuf,
}

impl File {
    pub fn new(rel_path: impl Into<PathBuf>) -> Self {
        Self {
            rel_path: rel_path.into(),
        }
    }

    pub fn rel_path(&self) -> &Path {
        &self.rel_path
    }

    pub fn full_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.rel_path)
    }

    /// Reads the file as UTF-8 text.
    pub fn read(&self, base_dir: &Path) -> Result<String> {
        let path = self.full_path(base_dir);
        std::fs::read_to_string(&path).map_err(|source| Error::Io { path, source })
    }
}

/// Cache identity of a file: where it lives and what it contained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileKey {
    pub base_dir: PathBuf,
    pub rel_path: PathBuf,
    pub content_hash: u32,
}

impl FileKey {
    pub fn new(base_dir: &Path, file: &File, text: &str) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            rel_path: file.rel_path.clone(),
            content_hash: content_hash(text),
        }
    }
}

/// CRC-32 of the file text.
pub fn content_hash(text: &str) -> u32 {
    crc32fast::hash(text.as_bytes())
}
