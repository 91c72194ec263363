//! Errors raised by the assembly engine.
//!
//! Bad resume data never surfaces here: malformed entries and fields are
//! recovered by omission. Only a record that is not a mapping at all, and a
//! style configuration the builders cannot work with, are errors.

use thiserror::Error;
use vitae_style::StyleError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Resume record must be a JSON object, found {0}")]
    NotAnObject(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Style configuration error: {0}")]
    Style(#[from] StyleError),
}
