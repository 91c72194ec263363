//! Resume generation pipeline.
//!
//! - [`PipelineBuilder`]: fluent builder resolving theme, page geometry and fonts
//! - [`ResumePipeline`]: assembles records and renders them with the selected backend
//! - [`OutputFormat`]: selects the rendering backend
//!
//! # Example
//!
//! ```ignore
//! use vitae::{OutputFormat, PipelineBuilder, ResumeRecord};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_output_format(OutputFormat::Text)
//!     .with_theme_file("theme.json")?
//!     .build()?;
//!
//! let record = ResumeRecord::from_json_str(&std::fs::read_to_string("resume.json")?)?;
//! pipeline.generate_to_file(&record, "resume.txt")?;
//! ```

mod builder;
pub mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::{GenerationConfig, OutputFormat};
pub use orchestrator::ResumePipeline;
