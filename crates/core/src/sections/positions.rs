use super::{
    EntrySection, NARROW_COLUMN, SectionBuilder, WIDE_COLUMN, body_line, bullets, date_range,
    join_present, row_if_any,
};
use crate::record::entries::PositionEntry;
use serde_json::Value;
use vitae_blocks::{LayoutBlock, Paragraph, RichText};
use vitae_style::names;

/// Bold `"organization - position"` in the left cell.
fn title_cell(entry: &PositionEntry) -> Paragraph {
    let title = join_present([entry.organization(), entry.position.as_deref()], " - ");
    Paragraph::new(
        title.map(RichText::strong).unwrap_or_default(),
        names::JOB_HEADER,
    )
}

fn dates(entry: &PositionEntry) -> Option<String> {
    date_range(entry.start_date.as_deref(), entry.end_date.as_deref())
}

/// `work`: rows of `"organization - position"` against `"location | dates"`, then highlights.
#[derive(Debug, Default)]
pub struct ExperienceSection;

impl EntrySection for ExperienceSection {
    type Entry = PositionEntry;

    fn title(&self) -> &str {
        "EXPERIENCE"
    }

    fn entry_blocks(&self, entry: &PositionEntry) -> Vec<LayoutBlock> {
        let right = join_present([entry.location.as_deref(), dates(entry).as_deref()], " | ");
        let right = Paragraph::new(right.unwrap_or_default(), names::DATE_COLUMN);

        row_if_any(title_cell(entry), right, WIDE_COLUMN)
            .into_iter()
            .chain(bullets(&entry.highlights))
            .collect()
    }
}

impl SectionBuilder for ExperienceSection {
    fn key(&self) -> &str {
        "work"
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

/// `volunteer`: like experience, with dates alone on the right and an
/// optional URL line and summary before the highlights.
#[derive(Debug, Default)]
pub struct VolunteerSection;

impl EntrySection for VolunteerSection {
    type Entry = PositionEntry;

    fn title(&self) -> &str {
        "VOLUNTEER"
    }

    fn entry_blocks(&self, entry: &PositionEntry) -> Vec<LayoutBlock> {
        let right = Paragraph::new(dates(entry).unwrap_or_default(), names::DATE_COLUMN);

        row_if_any(title_cell(entry), right, NARROW_COLUMN)
            .into_iter()
            .chain(body_line(entry.url.as_deref()))
            .chain(body_line(entry.summary.as_deref()))
            .chain(bullets(&entry.highlights))
            .collect()
    }
}

impl SectionBuilder for VolunteerSection {
    fn key(&self) -> &str {
        "volunteer"
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
