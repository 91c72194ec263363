use super::{EntrySection, SectionBuilder, body_line, heading_line};
use crate::record::entries::ReferenceEntry;
use serde_json::Value;
use vitae_blocks::LayoutBlock;
use vitae_style::names;

#[derive(Debug, Default)]
pub struct ReferencesSection;

impl EntrySection for ReferencesSection {
    type Entry = ReferenceEntry;

    fn title(&self) -> &str {
        "REFERENCES"
    }

    fn entry_blocks(&self, entry: &ReferenceEntry) -> Vec<LayoutBlock> {
        heading_line(entry.name.as_deref())
            .into_iter()
            .chain(body_line(entry.reference.as_deref()))
            .collect()
    }
}

impl SectionBuilder for ReferencesSection {
    fn key(&self) -> &str {
        "references"
    }

    fn styles(&self) -> &'static [&'static str] {
        &[names::SECTION_HEADER, names::JOB_HEADER, names::BODY]
    }

    fn build(&self, data: &Value) -> Vec<LayoutBlock> {
        self.build_section(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::body;
    use serde_json::json;
    use vitae_blocks::RichText;

    #[test]
    fn test_reference_blocks() {
        let blocks = ReferencesSection.build(&json!([
            {"name": "J. Doe", "reference": "Reliable and kind."},
            {"reference": "Anonymous praise."}
        ]));
        assert_eq!(
            body(&blocks),
            &[
                LayoutBlock::text(RichText::strong("J. Doe"), names::JOB_HEADER),
                LayoutBlock::text("Reliable and kind.", names::BODY),
                LayoutBlock::spacer(4.0),
                LayoutBlock::text("Anonymous praise.", names::BODY),
                LayoutBlock::spacer(4.0),
            ]
        );
    }
}
