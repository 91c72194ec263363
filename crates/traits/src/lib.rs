//! Platform abstraction traits consumed by the vitae pipeline.

pub mod font;

pub use font::{FontError, FontProvider, InMemoryFontProvider, SharedFontData};
