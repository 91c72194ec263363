pub mod defaults;
pub mod dimension;
pub mod error;
pub mod font;
pub mod stylesheet;
pub mod text;

pub use defaults::{names, resume_styles};
pub use dimension::{Margins, PageLayout, PageSize};
pub use error::StyleError;
pub use font::FontFace;
pub use stylesheet::{StyleOverride, StyleRegistry, TextStyle, Theme};
pub use text::{TextAlign, TextTransform};
