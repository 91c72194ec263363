use super::{EntrySection, NARROW_COLUMN, SectionBuilder, body_line, row_if_any};
use crate::record::entries::AwardEntry;
use serde_json::Value;
use vitae_blocks::{LayoutBlock, Paragraph, RichText};
use vitae_style::names;

/// `awards`: bold title and awarder against the date, then an optional summary.
#[derive(Debug, Default)]
pub struct AwardsSection;

impl EntrySection for AwardsSection {
    type Entry = AwardEntry;

    fn title(&self) -> &str {
        "AWARDS"
    }

    fn entry_blocks(&self, entry: &AwardEntry) -> Vec<LayoutBlock> {
        // The awarder is only shown alongside a title.
        let left = match (entry.title.as_deref(), entry.awarder.as_deref()) {
            (Some(title), Some(awarder)) => {
                RichText::strong(title).text(" - ").text(awarder)
            }
            (Some(title), None) => RichText::strong(title),
            (None, _) => RichText::new(),
        };
        let right = entry.date.as_deref().map(RichText::plain).unwrap_or_default();

        row_if_any(
            Paragraph::new(left, names::JOB_HEADER),
            Paragraph::new(right, names::DATE_COLUMN),
            NARROW_COLUMN,
        )
        .into_iter()
        .chain(body_line(entry.summary.as_deref()))
        .collect()
    }
}

impl SectionBuilder for AwardsSection {
    fn key(&self) -> &str {
        "awards"
    }

    fn styles(&self) -> &'static [&'static str] {
        &[
            names::SECTION_HEADER,
            names::JOB_HEADER,
            names::DATE_COLUMN,
            names::BODY,
        ]
    }

    fn build(&self, data: &Value) -> Vec<LayoutBlock> {
        self.build_section(data)
    }
}
