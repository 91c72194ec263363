use super::config::{GenerationConfig, OutputFormat};
use super::orchestrator::ResumePipeline;
use crate::error::PipelineError;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use vitae_core::Assembler;
use vitae_resource::{DEFAULT_BOLD_FILE, DEFAULT_REGULAR_FILE, FilesystemFontProvider, FontSet};
use vitae_style::{PageLayout, Theme, resume_styles};
use vitae_traits::FontProvider;

/// Where the document typeface comes from.
#[derive(Debug)]
struct FontSource {
    provider: Arc<dyn FontProvider>,
    regular: String,
    bold: String,
}

/// A builder for creating a `ResumePipeline`.
///
/// Styles, theme and fonts are all resolved in [`build`](Self::build); any
/// configuration problem is reported there, never during generation.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    output: OutputFormat,
    page: Option<PageLayout>,
    theme: Theme,
    fonts: Option<FontSource>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the default theme and JSON output.
    pub fn new() -> Self {
        Default::default()
    }

    /// Selects the rendering backend.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output = format;
        self
    }

    /// Sets the page geometry, taking precedence over a theme's `page`.
    pub fn with_page_layout(mut self, page: PageLayout) -> Self {
        self.page = Some(page);
        self
    }

    /// Loads a theme from a JSON file.
    pub fn with_theme_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read theme from '{}': {}", path_ref.display(), e),
            ))
        })?;
        log::debug!("Loaded theme file {}", path_ref.display());
        self.with_theme_json(&source)
    }

    /// Parses a theme from a JSON string.
    pub fn with_theme_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.theme = serde_json::from_str(json)?;
        Ok(self)
    }

    /// Uses an already-built theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Loads the regular and bold faces of the document typeface from `provider`.
    pub fn with_fonts(
        mut self,
        provider: Arc<dyn FontProvider>,
        regular: impl Into<String>,
        bold: impl Into<String>,
    ) -> Self {
        self.fonts = Some(FontSource {
            provider,
            regular: regular.into(),
            bold: bold.into(),
        });
        self
    }

    /// Loads the default typeface files from a directory.
    pub fn with_font_dir<P: AsRef<Path>>(self, path: P) -> Self {
        let provider = Arc::new(FilesystemFontProvider::new(path));
        self.with_fonts(provider, DEFAULT_REGULAR_FILE, DEFAULT_BOLD_FILE)
    }

    /// Consumes the builder and creates the `ResumePipeline`.
    pub fn build(self) -> Result<ResumePipeline, PipelineError> {
        let mut styles = resume_styles()?;
        styles.extend_from(&self.theme)?;
        let styles = Arc::new(styles);

        let assembler = Assembler::new(Arc::clone(&styles))?;

        let fonts = match &self.fonts {
            Some(source) => {
                let set = FontSet::load(source.provider.as_ref(), &source.regular, &source.bold)?;
                log::info!(
                    "Loaded typeface from {} ({}, {})",
                    source.provider.name(),
                    source.regular,
                    source.bold
                );
                Some(set)
            }
            None => None,
        };

        let page = self
            .page
            .or_else(|| self.theme.page.clone())
            .unwrap_or_default();

        let config = GenerationConfig {
            output: self.output,
            page,
            theme: self.theme,
        };

        log::info!(
            "Built pipeline: {} output, {} styles, fonts {}",
            config.output,
            styles.len(),
            if fonts.is_some() { "loaded" } else { "not configured" }
        );

        Ok(ResumePipeline::new(config, styles, assembler, fonts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_style::{PageSize, names};
    use vitae_traits::{FontError, InMemoryFontProvider};

    #[test]
    fn test_default_build() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        assert_eq!(pipeline.config().output, OutputFormat::Json);
        assert_eq!(pipeline.config().page, PageLayout::default());
        assert!(pipeline.fonts().is_none());
    }

    #[test]
    fn test_theme_overrides_style_and_page() {
        let pipeline = PipelineBuilder::new()
            .with_theme_json(
                r#"{
                    "page": {"size": "A4", "margins": "1in 0.5in"},
                    "styles": {"Name": {"font": "primary-bold", "fontSize": 20}}
                }"#,
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(pipeline.config().page.size, PageSize::A4);
        assert_eq!(pipeline.config().page.margins.top, 72.0);
        assert_eq!(pipeline.config().page.margins.left, 36.0);
        let name = pipeline.styles().get(names::NAME).unwrap();
        assert_eq!(name.font_size, 20.0);
    }

    #[test]
    fn test_explicit_page_wins_over_theme() {
        let pipeline = PipelineBuilder::new()
            .with_theme_json(r#"{"page": {"size": "A4"}}"#)
            .unwrap()
            .with_page_layout(PageLayout {
                size: PageSize::Legal,
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(pipeline.config().page.size, PageSize::Legal);
    }

    #[test]
    fn test_invalid_theme_json() {
        let result = PipelineBuilder::new().with_theme_json("{ nope");
        assert!(matches!(result, Err(PipelineError::Json(_))));
    }

    #[test]
    fn test_missing_theme_file() {
        let result = PipelineBuilder::new().with_theme_file("/definitely/not/here.json");
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }

    #[test]
    fn test_missing_fonts_are_fatal() {
        let provider = Arc::new(InMemoryFontProvider::new());
        let result = PipelineBuilder::new()
            .with_fonts(provider, "Regular.ttf", "Bold.ttf")
            .build();
        assert!(matches!(
            result,
            Err(PipelineError::Font(FontError::NotFound(_)))
        ));
    }
}
