//! Core rendering abstractions.
//!
//! This crate provides the seam between the assembly engine and the
//! rendering backends:
//! - `DocumentRenderer` trait realizing a block sequence into an output target
//! - `RenderContext` carrying the named styles, page geometry and fonts
//! - Error types for rendering operations

mod error;
mod traits;
mod types;

pub use error::RenderError;
pub use traits::DocumentRenderer;
pub use types::RenderContext;
