use super::{EntrySection, SectionBuilder, body_line, bullets, heading_line};
use crate::record::entries::ProjectEntry;
use serde_json::Value;
use vitae_blocks::LayoutBlock;
use vitae_style::names;

#[derive(Debug, Default)]
pub struct ProjectsSection;

impl EntrySection for ProjectsSection {
    type Entry = ProjectEntry;

    fn title(&self) -> &str {
        "PROJECTS"
    }

    fn entry_blocks(&self, entry: &ProjectEntry) -> Vec<LayoutBlock> {
        heading_line(entry.name.as_deref())
            .into_iter()
            .chain(body_line(entry.description.as_deref()))
            .chain(bullets(&entry.highlights))
            .collect()
    }
}

impl SectionBuilder for ProjectsSection {
    fn key(&self) -> &str {
        "projects"
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
    use crate::sections::test_support::{body, texts};
    use serde_json::json;

    #[test]
    fn test_project_blocks() {
        let blocks = ProjectsSection.build(&json!([{
            "name": "vitae",
            "description": "Resume engine.",
            "highlights": ["Fast", "Typed"]
        }]));
        assert_eq!(
            texts(body(&blocks)),
            vec!["vitae", "Resume engine.", "\u{2022} Fast", "\u{2022} Typed"]
        );
    }

    #[test]
    fn test_highlights_not_a_list() {
        let blocks = ProjectsSection.build(&json!([{"name": "vitae", "highlights": "Fast"}]));
        assert_eq!(texts(body(&blocks)), vec!["vitae"]);
    }
}
