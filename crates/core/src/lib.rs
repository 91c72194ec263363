//! # vitae-core
//!
//! The resume document assembly engine.
//!
//! A [`ResumeRecord`] is walked in key order; every key with a registered
//! [`SectionBuilder`] and non-empty data is turned into layout blocks, and the
//! results are concatenated into one sequence for a rendering backend.
//!
//! The engine is synchronous and performs no I/O.

// Re-export foundation crates
pub use vitae_blocks as blocks;
pub use vitae_style as style;

pub mod assembler;
pub mod error;
pub mod record;
pub mod registry;
pub mod sections;

pub use assembler::Assembler;
pub use error::CoreError;
pub use record::ResumeRecord;
pub use registry::SectionRegistry;
pub use sections::SectionBuilder;

pub use vitae_blocks::{LayoutBlock, Paragraph, RichText, TwoColumnRow};
