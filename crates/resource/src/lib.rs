//! Font providers and font set loading for the vitae pipeline.
//!
//! ## Available Providers
//!
//! - [`FilesystemFontProvider`]: Loads font files from a directory
//! - [`InMemoryFontProvider`]: Pre-populated in-memory storage (re-exported from vitae-traits)
//!
//! [`FontSet`] loads the regular and bold faces of the document typeface once
//! at startup and validates them before any document is generated.

mod filesystem;
mod fonts;

pub use filesystem::FilesystemFontProvider;
pub use fonts::{FontFaceInfo, FontSet, DEFAULT_BOLD_FILE, DEFAULT_REGULAR_FILE};

pub use vitae_traits::InMemoryFontProvider;
