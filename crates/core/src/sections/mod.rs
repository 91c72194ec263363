//! Section builders.
//!
//! Each builder consumes the slice of the record stored under its key and
//! returns zero or more layout blocks. A titled section is emitted as a single
//! keep-together group:
//!
//! ```text
//! Group [ Text(TITLE, SectionHeader), Rule, Spacer, ...entries..., Spacer ]
//! ```
//!
//! or not at all, when no entry produces content.

mod awards;
mod basics;
mod education;
mod keywords;
mod languages;
mod positions;
mod projects;
mod publications;
mod references;

pub use awards::AwardsSection;
pub use basics::BasicsSection;
pub use education::EducationSection;
pub use keywords::KeywordSection;
pub use languages::LanguagesSection;
pub use positions::{ExperienceSection, VolunteerSection};
pub use projects::ProjectsSection;
pub use publications::PublicationsSection;
pub use references::ReferencesSection;

use crate::record::entries::entries;
use serde::de::DeserializeOwned;
use serde_json::Value;
use vitae_blocks::{LayoutBlock, Paragraph, RichText};
use vitae_style::names;

/// Width of the separator under a section title, as a fraction of the content width.
pub const RULE_WIDTH: f32 = 1.0;
pub const RULE_THICKNESS: f32 = 0.5;
/// Gap between the separator and the first entry.
pub const HEADER_GAP: f32 = 3.0;
/// Gap after each entry of a row-based section.
pub const ENTRY_GAP: f32 = 4.0;
/// Gap closing every titled section.
pub const SECTION_GAP: f32 = 5.0;
/// Right column width for experience and education rows.
pub const WIDE_COLUMN: f32 = 150.0;
/// Right column width for volunteer, award and publication rows.
pub const NARROW_COLUMN: f32 = 100.0;

const BULLET: &str = "\u{2022} ";

/// Turns one section of a resume record into layout blocks.
pub trait SectionBuilder: Send + Sync {
    /// The record key this builder consumes.
    fn key(&self) -> &str;

    /// Every style name this builder may reference.
    fn styles(&self) -> &'static [&'static str];

    /// Builds the blocks for `data`. Never fails: unusable data yields nothing.
    fn build(&self, data: &Value) -> Vec<LayoutBlock>;
}

/// A titled section made of a sequence of independent entries.
pub(crate) trait EntrySection {
    type Entry: DeserializeOwned;

    fn title(&self) -> &str;

    /// Blocks for one entry; empty when the entry has nothing to show.
    fn entry_blocks(&self, entry: &Self::Entry) -> Vec<LayoutBlock>;

    /// Spacer height appended after each entry that produced content.
    fn entry_gap(&self) -> Option<f32> {
        Some(ENTRY_GAP)
    }

    fn build_section(&self, data: &Value) -> Vec<LayoutBlock> {
        let mut body = Vec::new();
        for entry in entries::<Self::Entry>(data) {
            let blocks = self.entry_blocks(&entry);
            if blocks.is_empty() {
                continue;
            }
            body.extend(blocks);
            if let Some(gap) = self.entry_gap() {
                body.push(LayoutBlock::spacer(gap));
            }
        }
        titled(self.title(), body)
    }
}

/// Wraps a section body in its title, separator and closing gap.
/// An empty body yields no blocks at all.
pub fn titled(title: &str, body: Vec<LayoutBlock>) -> Vec<LayoutBlock> {
    if body.is_empty() {
        return Vec::new();
    }
    let mut blocks = Vec::with_capacity(body.len() + 4);
    blocks.push(LayoutBlock::text(title, names::SECTION_HEADER));
    blocks.push(LayoutBlock::rule(RULE_WIDTH, RULE_THICKNESS));
    blocks.push(LayoutBlock::spacer(HEADER_GAP));
    blocks.extend(body);
    blocks.push(LayoutBlock::spacer(SECTION_GAP));
    vec![LayoutBlock::group(blocks)]
}

/// Joins the present parts with `separator`.
pub(crate) fn join_present<'a, I>(parts: I, separator: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let present: Vec<&str> = parts.into_iter().flatten().collect();
    (!present.is_empty()).then(|| present.join(separator))
}

/// `"start - end"`, collapsing to whichever date is present.
pub(crate) fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    join_present([start, end], " - ")
}

/// A `Body` paragraph holding `text`, if any.
pub(crate) fn body_line(text: Option<&str>) -> Option<LayoutBlock> {
    text.map(|t| LayoutBlock::text(t, names::BODY))
}

/// A bold heading line in `JobHeader` style, if any.
pub(crate) fn heading_line(text: Option<&str>) -> Option<LayoutBlock> {
    text.map(|t| LayoutBlock::text(RichText::strong(t), names::JOB_HEADER))
}

pub(crate) fn bullets(items: &[String]) -> impl Iterator<Item = LayoutBlock> + '_ {
    items
        .iter()
        .map(|item| LayoutBlock::text(format!("{BULLET}{item}"), names::BODY))
}

/// A two-column row, unless both cells are empty.
pub(crate) fn row_if_any(left: Paragraph, right: Paragraph, width: f32) -> Option<LayoutBlock> {
    if left.is_empty() && right.is_empty() {
        None
    } else {
        Some(LayoutBlock::row(left, right, width))
    }
}

/// `"<bold label>: text"`, the line shape shared by keyword and language lists.
pub(crate) fn labelled_line(label: &str, text: &str) -> LayoutBlock {
    LayoutBlock::text(
        RichText::strong(label).text(": ").text(text),
        names::BODY,
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titled_wraps_body_in_one_group() {
        let blocks = titled("SKILLS", vec![LayoutBlock::text("Rust", names::BODY)]);
        let inner = test_support::section_blocks(&blocks);
        assert_eq!(
            inner,
            &[
                LayoutBlock::text("SKILLS", names::SECTION_HEADER),
                LayoutBlock::rule(1.0, 0.5),
                LayoutBlock::spacer(3.0),
                LayoutBlock::text("Rust", names::BODY),
                LayoutBlock::spacer(5.0),
            ]
        );
    }

    #[test]
    fn test_titled_empty_body_is_nothing() {
        assert!(titled("SKILLS", Vec::new()).is_empty());
    }

    #[test]
    fn test_date_range_never_dangles() {
        assert_eq!(date_range(Some("2019"), Some("2021")).as_deref(), Some("2019 - 2021"));
        assert_eq!(date_range(Some("2019"), None).as_deref(), Some("2019"));
        assert_eq!(date_range(None, Some("2021")).as_deref(), Some("2021"));
        assert_eq!(date_range(None, None), None);
    }

    #[test]
    fn test_join_present_skips_absent_parts() {
        assert_eq!(
            join_present([Some("a"), None, Some("c")], " | ").as_deref(),
            Some("a | c")
        );
        assert_eq!(join_present([None, None], " | "), None);
    }

    #[test]
    fn test_row_if_any() {
        let empty = || Paragraph::new(RichText::new(), names::BODY);
        assert!(row_if_any(empty(), empty(), WIDE_COLUMN).is_none());
        let row = row_if_any(empty(), Paragraph::new("2020", names::DATE_COLUMN), WIDE_COLUMN);
        assert!(matches!(row, Some(LayoutBlock::TwoColumnRow(_))));
    }
}
