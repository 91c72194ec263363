//! Font files read from a local directory.
//!
//! Only `.ttf`, `.otf` and `.ttc` files are served, and only from inside the
//! font directory: absolute names and `..` escapes are refused.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use vitae_traits::{FontError, FontProvider, SharedFontData};

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

fn has_font_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Serves typeface files from a font directory.
#[derive(Debug)]
pub struct FilesystemFontProvider {
    font_dir: PathBuf,
    /// `None` until the directory exists.
    canonical_dir: Option<PathBuf>,
}

impl FilesystemFontProvider {
    pub fn new<P: AsRef<Path>>(font_dir: P) -> Self {
        let font_dir = font_dir.as_ref().to_path_buf();
        let canonical_dir = font_dir.canonicalize().ok();
        Self {
            font_dir,
            canonical_dir,
        }
    }

    pub fn base(&self) -> &Path {
        &self.font_dir
    }

    /// Maps a font file name to its location inside the font directory.
    fn locate(&self, name: &str) -> Result<PathBuf, FontError> {
        if !has_font_extension(name) {
            return Err(FontError::InvalidFont {
                path: name.to_string(),
                message: format!("expected one of .{}", FONT_EXTENSIONS.join(", .")),
            });
        }

        let relative = Path::new(name);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        let candidate = self.font_dir.join(relative);

        // Symlinks can still point outside; compare canonical forms when both resolve.
        let contained = match (candidate.canonicalize(), &self.canonical_dir) {
            (Ok(real), Some(dir)) => real.starts_with(dir),
            _ => !escapes,
        };
        if escapes || !contained {
            return Err(FontError::NotFound(format!(
                "{} (outside font directory {})",
                name,
                self.font_dir.display()
            )));
        }
        Ok(candidate)
    }
}

impl FontProvider for FilesystemFontProvider {
    fn load(&self, name: &str) -> Result<SharedFontData, FontError> {
        let path = self.locate(name)?;
        log::debug!("Reading font file {}", path.display());
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Arc::new(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FontError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(FontError::LoadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.locate(name).is_ok_and(|path| path.is_file())
    }

    fn name(&self) -> &'static str {
        "FilesystemFontProvider"
    }
}
