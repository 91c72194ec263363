use super::{EntrySection, NARROW_COLUMN, SectionBuilder, body_line, heading_line};
use crate::record::entries::PublicationEntry;
use serde_json::Value;
use vitae_blocks::{LayoutBlock, Paragraph};
use vitae_style::names;

/// `publications`: bold name, publisher against release date, URL and summary.
///
/// Unlike the other row-based sections the publisher/date row is always
/// emitted, with empty cells for absent values.
#[derive(Debug, Default)]
pub struct PublicationsSection;

impl EntrySection for PublicationsSection {
    type Entry = PublicationEntry;

    fn title(&self) -> &str {
        "PUBLICATIONS"
    }

    fn entry_blocks(&self, entry: &PublicationEntry) -> Vec<LayoutBlock> {
        let row = LayoutBlock::row(
            Paragraph::new(entry.publisher.clone().unwrap_or_default(), names::BODY),
            Paragraph::new(entry.release_date.clone().unwrap_or_default(), names::DATE_COLUMN),
            NARROW_COLUMN,
        );

        heading_line(entry.name.as_deref())
            .into_iter()
            .chain(Some(row))
            .chain(body_line(entry.url.as_deref()))
            .chain(body_line(entry.summary.as_deref()))
            .collect()
    }
}

impl SectionBuilder for PublicationsSection {
    fn key(&self) -> &str {
        "publications"
    }

    fn styles(&self) -> &'static [&'static str] {
        &[
            names::SECTION_HEADER,
            names::JOB_HEADER,
            names::BODY,
            names::DATE_COLUMN,
        ]
    }

    fn build(&self, data: &Value) -> Vec<LayoutBlock> {
        self.build_section(data)
    }
}
