use vitae_resource::FontSet;
use vitae_style::{PageLayout, StyleRegistry, TextStyle};
use std::sync::Arc;
use crate::error::RenderError;

/// Everything a backend needs besides the blocks themselves.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub styles: &'a StyleRegistry,
    pub page: &'a PageLayout,
    /// The loaded typeface, when the pipeline was configured with one.
    pub fonts: Option<&'a FontSet>,
}

impl<'a> RenderContext<'a> {
    pub fn new(styles: &'a StyleRegistry, page: &'a PageLayout) -> Self {
        Self {
            styles,
            page,
            fonts: None,
        }
    }

    pub fn with_fonts(mut self, fonts: Option<&'a FontSet>) -> Self {
        self.fonts = fonts;
        self
    }

    /// Resolves a style referenced by a block.
    pub fn style(&self, name: &str) -> Result<&'a Arc<TextStyle>, RenderError> {
        Ok(self.styles.require(name)?)
    }
}
