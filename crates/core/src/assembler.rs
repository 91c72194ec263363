//! The engine entry point: validated styles plus the section registry.

use crate::error::CoreError;
use crate::record::ResumeRecord;
use crate::registry::SectionRegistry;
use std::sync::Arc;
use vitae_blocks::LayoutBlock;
use vitae_style::StyleRegistry;

/// Turns resume records into layout block sequences.
///
/// Construction checks that every style a builder may reference is defined,
/// so assembly itself cannot fail. An `Assembler` holds no mutable state and
/// can be shared across threads.
#[derive(Debug)]
pub struct Assembler {
    styles: Arc<StyleRegistry>,
    sections: SectionRegistry,
}

impl Assembler {
    /// Creates an assembler for the eleven resume sections.
    pub fn new(styles: Arc<StyleRegistry>) -> Result<Self, CoreError> {
        Self::with_sections(styles, SectionRegistry::resume())
    }

    pub fn with_sections(
        styles: Arc<StyleRegistry>,
        sections: SectionRegistry,
    ) -> Result<Self, CoreError> {
        styles.ensure_defined(sections.required_styles())?;
        Ok(Self { styles, sections })
    }

    pub fn styles(&self) -> &Arc<StyleRegistry> {
        &self.styles
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    /// Assembles the block sequence for `record`. Deterministic: the same
    /// record always yields the same sequence.
    pub fn assemble(&self, record: &ResumeRecord) -> Vec<LayoutBlock> {
        let blocks = self.sections.assemble(record);
        log::info!(
            "Assembled {} top-level blocks from {} record sections",
            blocks.len(),
            record.len()
        );
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitae_style::{FontFace, StyleError, TextStyle, names, resume_styles};

    fn styles() -> Arc<StyleRegistry> {
        Arc::new(resume_styles().unwrap())
    }

    #[test]
    fn test_assembler_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Assembler>();
    }

    #[test]
    fn test_missing_style_is_fatal() {
        let partial = StyleRegistry::new()
            .with_style(names::BODY, TextStyle::new(FontFace::Regular, 10.0))
            .unwrap();
        let err = Assembler::new(Arc::new(partial)).unwrap_err();
        assert!(matches!(err, CoreError::Style(StyleError::Undefined(_))));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let assembler = Assembler::new(styles()).unwrap();
        let record = ResumeRecord::from_value(json!({
            "basics": {"name": "A. Lin"},
            "work": [{"company": "Acme", "highlights": ["x"]}],
            "skills": [{"name": "Rust", "keywords": ["serde"]}]
        }))
        .unwrap();
        assert_eq!(assembler.assemble(&record), assembler.assemble(&record));
    }

    #[test]
    fn test_empty_record_yields_nothing() {
        let assembler = Assembler::new(styles()).unwrap();
        assert!(assembler.assemble(&ResumeRecord::default()).is_empty());
    }
}
