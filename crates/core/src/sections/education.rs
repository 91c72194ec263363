use super::{EntrySection, SectionBuilder, WIDE_COLUMN, date_range, join_present, row_if_any};
use crate::record::entries::EducationEntry;
use serde_json::Value;
use vitae_blocks::{LayoutBlock, Paragraph, RichText};
use vitae_style::names;

/// `education`: degree against dates and score, then institution and courses.
#[derive(Debug, Default)]
pub struct EducationSection;

impl EducationSection {
    fn degree(entry: &EducationEntry) -> Paragraph {
        let degree = join_present([entry.study_type.as_deref(), entry.area.as_deref()], ", ");
        Paragraph::new(degree.map(RichText::strong).unwrap_or_default(), names::BODY)
    }

    fn dates_and_score(entry: &EducationEntry) -> Paragraph {
        let dates = date_range(entry.start_date.as_deref(), entry.end_date.as_deref());
        let score = entry.score.as_deref().map(|s| format!("Score: {s}"));
        let text = join_present([dates.as_deref(), score.as_deref()], " | ");
        Paragraph::new(text.unwrap_or_default(), names::DATE_COLUMN)
    }

    fn institution(entry: &EducationEntry) -> Option<LayoutBlock> {
        let name = entry.institution.as_deref()?;
        let content = match entry.url.as_deref() {
            Some(url) => RichText::new().link(name, url),
            None => RichText::plain(name),
        };
        Some(LayoutBlock::text(content, names::INSTITUTION))
    }

    fn courses(entry: &EducationEntry) -> Option<LayoutBlock> {
        (!entry.courses.is_empty()).then(|| {
            LayoutBlock::text(format!("Courses: {}", entry.courses.join(", ")), names::BODY)
        })
    }
}

impl EntrySection for EducationSection {
    type Entry = EducationEntry;

    fn title(&self) -> &str {
        "EDUCATION"
    }

    fn entry_blocks(&self, entry: &EducationEntry) -> Vec<LayoutBlock> {
        row_if_any(Self::degree(entry), Self::dates_and_score(entry), WIDE_COLUMN)
            .into_iter()
            .chain(Self::institution(entry))
            .chain(Self::courses(entry))
            .collect()
    }
}

impl SectionBuilder for EducationSection {
    fn key(&self) -> &str {
        "education"
    }

    fn styles(&self) -> &'static [&'static str] {
        &[
            names::SECTION_HEADER,
            names::BODY,
            names::DATE_COLUMN,
            names::INSTITUTION,
        ]
    }

    fn build(&self, data: &Value) -> Vec<LayoutBlock> {
        self.build_section(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{body, texts};
    use serde_json::json;
    use vitae_blocks::InlineRun;

    fn right_column(blocks: &[LayoutBlock]) -> String {
        match &body(blocks)[0] {
            LayoutBlock::TwoColumnRow(row) => row.right.plain_text(),
            other => panic!("expected a row, got {other:?}"),
        }
    }

    #[test]
    fn test_start_date_only() {
        let blocks = EducationSection.build(&json!([{"studyType": "BSc", "startDate": "2019"}]));
        assert_eq!(right_column(&blocks), "2019");
    }

    #[test]
    fn test_end_date_only_and_score() {
        let blocks = EducationSection.build(&json!([{"endDate": "2023", "score": 3.8}]));
        assert_eq!(right_column(&blocks), "2023 | Score: 3.8");
    }

    #[test]
    fn test_full_entry() {
        let blocks = EducationSection.build(&json!([{
            "institution": "NTNU",
            "url": "https://ntnu.no",
            "area": "Computer Science",
            "studyType": "Master",
            "startDate": "2019",
            "endDate": "2021",
            "score": "A",
            "courses": ["Compilers", "Databases"]
        }]));

        let body = body(&blocks);
        let LayoutBlock::TwoColumnRow(row) = &body[0] else {
            panic!("expected a row");
        };
        assert_eq!(row.left.plain_text(), "Master, Computer Science");
        assert!(row.left.content.runs()[0].bold);
        assert_eq!(row.left.style, names::BODY);
        assert_eq!(row.right.plain_text(), "2019 - 2021 | Score: A");
        assert_eq!(row.right_column_width, WIDE_COLUMN);

        let LayoutBlock::Text(institution) = &body[1] else {
            panic!("expected the institution line");
        };
        assert_eq!(institution.style, names::INSTITUTION);
        assert_eq!(
            institution.content.runs(),
            &[InlineRun::link("NTNU", "https://ntnu.no")]
        );
        assert_eq!(texts(&body[2..]), vec!["Courses: Compilers, Databases"]);
    }

    #[test]
    fn test_institution_only_has_no_row() {
        let blocks = EducationSection.build(&json!([{"institution": "NTNU"}]));
        let body = body(&blocks);
        assert_eq!(body[0], LayoutBlock::text("NTNU", names::INSTITUTION));
        assert_eq!(body[1], LayoutBlock::spacer(4.0));
    }

    #[test]
    fn test_courses_drop_non_text_items() {
        let blocks = EducationSection.build(&json!([{"courses": [null, "Algebra", {"x": 1}]}]));
        assert_eq!(texts(body(&blocks)), vec!["Courses: Algebra"]);
    }
}
