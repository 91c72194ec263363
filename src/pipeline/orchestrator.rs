use super::config::{GenerationConfig, OutputFormat};
use crate::error::PipelineError;
use crate::render::{JsonRenderer, TextRenderer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use vitae_blocks::LayoutBlock;
use vitae_core::{Assembler, ResumeRecord};
use vitae_render_core::{DocumentRenderer, RenderContext};
use vitae_resource::FontSet;
use vitae_style::StyleRegistry;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A configured resume generation pipeline.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug)]
pub struct ResumePipeline {
    config: GenerationConfig,
    styles: Arc<StyleRegistry>,
    assembler: Assembler,
    fonts: Option<FontSet>,
}

impl ResumePipeline {
    pub(super) fn new(
        config: GenerationConfig,
        styles: Arc<StyleRegistry>,
        assembler: Assembler,
        fonts: Option<FontSet>,
    ) -> Self {
        Self {
            config,
            styles,
            assembler,
            fonts,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn styles(&self) -> &Arc<StyleRegistry> {
        &self.styles
    }

    pub fn fonts(&self) -> Option<&FontSet> {
        self.fonts.as_ref()
    }

    /// File extension of the configured output format.
    pub fn extension(&self) -> &'static str {
        self.config.output.extension()
    }

    /// Assembles the layout blocks for one record.
    pub fn assemble(&self, record: &ResumeRecord) -> Vec<LayoutBlock> {
        self.assembler.assemble(record)
    }

    /// Assembles many independent records. Results are in input order.
    #[cfg(feature = "parallel")]
    pub fn assemble_batch(&self, records: &[ResumeRecord]) -> Vec<Vec<LayoutBlock>> {
        log::debug!(
            "Assembling {} records on {} threads",
            records.len(),
            rayon::current_num_threads()
        );
        records.par_iter().map(|r| self.assembler.assemble(r)).collect()
    }

    /// Assembles many independent records. Results are in input order.
    #[cfg(not(feature = "parallel"))]
    pub fn assemble_batch(&self, records: &[ResumeRecord]) -> Vec<Vec<LayoutBlock>> {
        records.iter().map(|r| self.assembler.assemble(r)).collect()
    }

    /// Renders an already-assembled block sequence with the configured backend.
    pub fn render<W: Write>(&self, blocks: &[LayoutBlock], writer: W) -> Result<W, PipelineError> {
        let context = RenderContext::new(&self.styles, &self.config.page).with_fonts(self.fonts());
        let writer = match self.config.output {
            OutputFormat::Json => JsonRenderer::new().render(blocks, &context, writer)?,
            OutputFormat::Text => TextRenderer::new().render(blocks, &context, writer)?,
        };
        Ok(writer)
    }

    /// Assembles `record` and writes the rendered document to `writer`.
    pub fn generate<W: Write>(&self, record: &ResumeRecord, writer: W) -> Result<W, PipelineError> {
        let blocks = self.assemble(record);
        self.render(&blocks, writer)
    }

    /// Assembles `record` and writes the rendered document to the file at `path`.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        record: &ResumeRecord,
        path: P,
    ) -> Result<(), PipelineError> {
        let path_ref = path.as_ref();
        let file = File::create(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create '{}': {}", path_ref.display(), e),
            ))
        })?;
        let mut writer = self.generate(record, BufWriter::new(file))?;
        writer.flush()?;
        log::info!("Wrote {}", path_ref.display());
        Ok(())
    }
}
