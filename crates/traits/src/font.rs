//! FontProvider trait for abstracting font loading.
//!
//! The document typeface is supplied by a collaborator at process start; this
//! trait lets that collaborator be the filesystem, an in-memory store, or
//! anything else that can hand over font bytes by name.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for font loading operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("Font not found: {0}")]
    NotFound(String),

    #[error("Failed to load font '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid font data in '{path}': {message}")]
    InvalidFont { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err.to_string())
    }
}

/// Shared font file bytes.
pub type SharedFontData = Arc<Vec<u8>>;

/// A source of raw font files, addressed by path or key.
pub trait FontProvider: Send + Sync + Debug {
    /// Load the font file stored under `path`.
    fn load(&self, path: &str) -> Result<SharedFontData, FontError>;

    /// Check if a font file exists under `path`.
    fn exists(&self, path: &str) -> bool;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A font provider backed by a pre-populated in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryFontProvider {
    fonts: RwLock<HashMap<String, SharedFontData>>,
}

impl InMemoryFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores font bytes under `path`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `FontError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), FontError> {
        let path = path.into();
        let mut fonts = self.fonts.write().map_err(|_| FontError::LoadFailed {
            path: path.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts.insert(path, Arc::new(data));
        Ok(())
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.fonts.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FontProvider for InMemoryFontProvider {
    fn load(&self, path: &str) -> Result<SharedFontData, FontError> {
        let fonts = self.fonts.read().map_err(|_| FontError::LoadFailed {
            path: path.to_string(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts
            .get(path)
            .cloned()
            .ok_or_else(|| FontError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.fonts
            .read()
            .map(|f| f.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryFontProvider"
    }
}
