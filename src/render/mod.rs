//! Rendering backends.
//!
//! Both implement [`DocumentRenderer`](vitae_render_core::DocumentRenderer)
//! and keep the block order they are given.

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::{DEFAULT_WIDTH, TextRenderer};
