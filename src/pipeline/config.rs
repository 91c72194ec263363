use std::fmt;
use std::str::FromStr;
use vitae_style::{PageLayout, Theme};

/// Selects the rendering backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The page layout and block sequence as pretty-printed JSON. (Default)
    #[default]
    Json,
    /// A plain-text preview of the document.
    Text,
}

impl OutputFormat {
    /// File extension used for generated files, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!(
                "Unsupported output format '{}' (expected 'json' or 'text')",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

/// Resolved settings a pipeline was built with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    pub output: OutputFormat,
    pub page: PageLayout,
    /// Style overrides layered over the default resume theme.
    pub theme: Theme,
}
