use thiserror::Error;

/// Errors raised while building or validating a style registry.
///
/// These indicate a configuration defect rather than bad resume data and are
/// meant to stop generation at startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Style '{0}' is referenced but not defined")]
    Undefined(String),

    #[error("Invalid style definition for '{name}': {message}")]
    Invalid { name: String, message: String },

    #[error("Theme parse error: {0}")]
    Parse(String),
}
