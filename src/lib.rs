//! # vitae
//!
//! Turns JSON-Resume-like records into ordered sequences of layout blocks and
//! renders them with a pluggable backend.
//!
//! ```ignore
//! use vitae::{PipelineBuilder, ResumeRecord};
//!
//! let pipeline = PipelineBuilder::new().with_font_dir("fonts").build()?;
//! let record = ResumeRecord::from_json_str(r#"{"basics": {"name": "A. Lin"}}"#)?;
//! let blocks = pipeline.assemble(&record);
//! ```

pub mod error;
pub mod pipeline;
pub mod render;

pub use error::PipelineError;
pub use pipeline::{GenerationConfig, OutputFormat, PipelineBuilder, ResumePipeline};
pub use render::{JsonRenderer, TextRenderer};

// Re-export the engine and foundation types callers need
pub use vitae_blocks::{InlineRun, LayoutBlock, Paragraph, RichText, TwoColumnRow};
pub use vitae_core::{Assembler, CoreError, ResumeRecord, SectionBuilder, SectionRegistry};
pub use vitae_render_core::{DocumentRenderer, RenderContext, RenderError};
pub use vitae_resource::{FilesystemFontProvider, FontSet};
pub use vitae_style::{PageLayout, StyleOverride, StyleRegistry, TextStyle, Theme};
pub use vitae_traits::{FontError, FontProvider, InMemoryFontProvider};
