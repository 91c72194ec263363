use thiserror::Error;
use vitae_core::CoreError;
use vitae_render_core::RenderError;
use vitae_style::StyleError;
use vitae_traits::FontError;

/// A comprehensive error type for the resume generation pipeline.
///
/// Everything except `Io` and `Render` is raised while the pipeline is being
/// built; a built pipeline can only fail while writing its output.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Assembly error: {0}")]
    Core(#[from] CoreError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}
