use super::{EntrySection, SectionBuilder, labelled_line};
use crate::record::entries::KeywordEntry;
use serde_json::Value;
use vitae_blocks::LayoutBlock;
use vitae_style::names;

/// A list of `"<bold name>: keyword, keyword"` lines. Serves both `skills` and `interests`.
#[derive(Debug, Clone)]
pub struct KeywordSection {
    key: &'static str,
    title: &'static str,
}

impl KeywordSection {
    pub const fn new(key: &'static str, title: &'static str) -> Self {
        Self { key, title }
    }

    pub const fn skills() -> Self {
        Self::new("skills", "SKILLS")
    }

    pub const fn interests() -> Self {
        Self::new("interests", "INTERESTS")
    }
}

impl EntrySection for KeywordSection {
    type Entry = KeywordEntry;

    fn title(&self) -> &str {
        self.title
    }

    fn entry_blocks(&self, entry: &KeywordEntry) -> Vec<LayoutBlock> {
        match entry.name.as_deref() {
            Some(name) if !entry.keywords.is_empty() => {
                vec![labelled_line(name, &entry.keywords.join(", "))]
            }
            _ => Vec::new(),
        }
    }

    fn entry_gap(&self) -> Option<f32> {
        None
    }
}

impl SectionBuilder for KeywordSection {
    fn key(&self) -> &str {
        self.key
    }

    fn styles(&self) -> &'static [&'static str] {
        &[names::SECTION_HEADER, names::BODY]
    }

    fn build(&self, data: &Value) -> Vec<LayoutBlock> {
        self.build_section(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{body, section_blocks, texts};
    use serde_json::json;
    use vitae_blocks::InlineRun;

    #[test]
    fn test_skill_lines() {
        let blocks = KeywordSection::skills().build(&json!([
            {"name": "Languages", "keywords": ["Rust", "Go"]},
            {"name": "Tools", "keywords": ["git"]}
        ]));
        assert_eq!(
            texts(body(&blocks)),
            vec!["Languages: Rust, Go", "Tools: git"]
        );
        let LayoutBlock::Text(first) = &body(&blocks)[0] else {
            panic!("expected text");
        };
        assert_eq!(first.content.runs()[0], InlineRun::bold("Languages"));
        assert_eq!(first.style, names::BODY);
    }

    #[test]
    fn test_no_spacer_between_lines() {
        let blocks = KeywordSection::skills().build(&json!([
            {"name": "A", "keywords": ["x"]},
            {"name": "B", "keywords": ["y"]}
        ]));
        assert_eq!(body(&blocks).len(), 2);
    }

    #[test]
    fn test_entries_missing_name_or_keywords_are_skipped() {
        let blocks = KeywordSection::interests().build(&json!([
            {"name": "Chess"},
            {"keywords": ["tea"]},
            {"name": "Music", "keywords": []},
            {"name": "Hiking", "keywords": [1, null]},
            {"name": "Climbing", "keywords": [true]}
        ]));
        let inner = section_blocks(&blocks);
        assert_eq!(inner[0], LayoutBlock::text("INTERESTS", names::SECTION_HEADER));
        assert_eq!(texts(body(&blocks)), vec!["Hiking: 1"]);
    }

    #[test]
    fn test_all_entries_empty_is_nothing() {
        let blocks = KeywordSection::skills().build(&json!([{"name": "Rust"}, {}]));
        assert!(blocks.is_empty());
    }
}
